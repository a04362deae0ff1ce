use std::collections::HashSet;
use std::sync::Arc;

use condor_domain::{CheckinSimulation, FlightRepository, PassengerManifestEntry};
use tracing::{debug, info};

use crate::engine;
use crate::seatmap::SeatPool;

#[derive(Debug, thiserror::Error)]
pub enum CheckinError {
    #[error("data access failed: {0}")]
    DataAccess(String),
}

/// Runs the check-in simulation for one flight against an injected flight
/// repository. One invocation handles one flight over a consistent snapshot
/// of its data; callers needing serialized runs per flight coordinate
/// outside this service.
pub struct CheckinService {
    repo: Arc<dyn FlightRepository>,
}

impl CheckinService {
    pub fn new(repo: Arc<dyn FlightRepository>) -> Self {
        Self { repo }
    }

    /// Simulates check-in for `flight_id`. Returns `Ok(None)` when the
    /// flight does not exist; a flight with no passengers yields an empty
    /// manifest. Passengers a seat could not be found for come back with
    /// `seat_id: None` rather than an error.
    pub async fn simulate(&self, flight_id: i64) -> Result<Option<CheckinSimulation>, CheckinError> {
        let Some(flight) = self
            .repo
            .find_flight(flight_id)
            .await
            .map_err(|e| CheckinError::DataAccess(e.to_string()))?
        else {
            debug!(flight_id, "flight not found");
            return Ok(None);
        };

        let mut passes = self
            .repo
            .boarding_passes(flight_id)
            .await
            .map_err(|e| CheckinError::DataAccess(e.to_string()))?;
        let inventory = self
            .repo
            .seats_for_airplane(flight.airplane_id)
            .await
            .map_err(|e| CheckinError::DataAccess(e.to_string()))?;

        let taken: HashSet<i64> = passes.iter().filter_map(|bp| bp.seat_id).collect();
        let mut pool = SeatPool::new(&inventory, &taken);
        engine::assign_seats(&mut passes, &mut pool);

        let unassigned = passes.iter().filter(|bp| bp.seat_id.is_none()).count();
        info!(
            flight_id,
            passengers = passes.len(),
            unassigned,
            "check-in simulation complete"
        );

        Ok(Some(CheckinSimulation {
            flight_id: flight.flight_id,
            takeoff_date_time: flight.takeoff_date_time,
            takeoff_airport: flight.takeoff_airport,
            landing_date_time: flight.landing_date_time,
            landing_airport: flight.landing_airport,
            airplane_id: flight.airplane_id,
            passengers: passes.iter().map(PassengerManifestEntry::from).collect(),
        }))
    }
}
