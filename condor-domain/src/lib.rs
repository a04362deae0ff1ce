pub mod model;
pub mod repository;

pub use model::{
    BoardingPass, CheckinSimulation, Flight, Passenger, PassengerManifestEntry, Seat,
};
pub use repository::{FlightRepository, RepositoryError};
