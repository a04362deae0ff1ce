use async_trait::async_trait;

use crate::model::{BoardingPass, Flight, Seat};

pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;

/// Data access seam for flight, seat and boarding data. The check-in engine
/// receives an implementation of this trait instead of reaching into any
/// shared database handle.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// `Ok(None)` when the flight does not exist.
    async fn find_flight(&self, flight_id: i64) -> Result<Option<Flight>, RepositoryError>;

    /// All boarding passes of the flight, joined with their passenger,
    /// in boarding-pass order.
    async fn boarding_passes(&self, flight_id: i64) -> Result<Vec<BoardingPass>, RepositoryError>;

    /// Full seat inventory of the airplane, ordered by row then column.
    async fn seats_for_airplane(&self, airplane_id: i64) -> Result<Vec<Seat>, RepositoryError>;
}
