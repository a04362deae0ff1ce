use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One physical seat slot on an airplane model. Read-only reference data:
/// (seat_row, seat_column) is unique per airplane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub seat_id: i64,
    pub seat_row: i32,
    pub seat_column: String,
    pub seat_type_id: i64,
    pub airplane_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub passenger_id: i64,
    pub dni: String,
    pub name: String,
    pub age: i32,
    pub country: String,
}

impl Passenger {
    pub fn is_minor(&self) -> bool {
        self.age < 18
    }
}

/// One passenger's booking on one flight. The engine only ever fills
/// `seat_id`; `seat_type_id` is fixed at purchase time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardingPass {
    pub boarding_pass_id: i64,
    pub purchase_id: i64,
    pub passenger: Passenger,
    pub seat_type_id: i64,
    pub seat_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_id: i64,
    pub takeoff_date_time: DateTime<Utc>,
    pub takeoff_airport: String,
    pub landing_date_time: DateTime<Utc>,
    pub landing_airport: String,
    pub airplane_id: i64,
}

/// One passenger entry of the simulation output, flattened for the API
/// boundary. `seat_id` stays `None` for passengers no seat could be found
/// for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerManifestEntry {
    pub passenger_id: i64,
    pub dni: String,
    pub name: String,
    pub age: i32,
    pub country: String,
    pub boarding_pass_id: i64,
    pub purchase_id: i64,
    pub seat_type_id: i64,
    pub seat_id: Option<i64>,
}

impl From<&BoardingPass> for PassengerManifestEntry {
    fn from(bp: &BoardingPass) -> Self {
        Self {
            passenger_id: bp.passenger.passenger_id,
            dni: bp.passenger.dni.clone(),
            name: bp.passenger.name.clone(),
            age: bp.passenger.age,
            country: bp.passenger.country.clone(),
            boarding_pass_id: bp.boarding_pass_id,
            purchase_id: bp.purchase_id,
            seat_type_id: bp.seat_type_id,
            seat_id: bp.seat_id,
        }
    }
}

/// Full result of a check-in simulation: flight fields passed through
/// unchanged plus the passenger manifest in original boarding-pass order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinSimulation {
    pub flight_id: i64,
    pub takeoff_date_time: DateTime<Utc>,
    pub takeoff_airport: String,
    pub landing_date_time: DateTime<Utc>,
    pub landing_airport: String,
    pub airplane_id: i64,
    pub passengers: Vec<PassengerManifestEntry>,
}
