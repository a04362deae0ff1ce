use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use condor_domain::{
    BoardingPass, Flight, FlightRepository, Passenger, RepositoryError, Seat,
};

/// In-memory flight data, keyed the way the relational schema is: flights
/// by id, seats by airplane, boarding passes by flight. Backs tests and the
/// seeded demo mode when no database is configured.
#[derive(Debug, Default)]
pub struct InMemoryFlightRepository {
    flights: HashMap<i64, Flight>,
    seats: HashMap<i64, Vec<Seat>>,
    boarding_passes: HashMap<i64, Vec<BoardingPass>>,
}

impl InMemoryFlightRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_flight(&mut self, flight: Flight) {
        self.flights.insert(flight.flight_id, flight);
    }

    /// Seats are bucketed by their own `airplane_id` and kept in the order
    /// the SQL store would return them: row, then column.
    pub fn add_seats(&mut self, seats: Vec<Seat>) {
        for seat in seats {
            self.seats.entry(seat.airplane_id).or_default().push(seat);
        }
        for inventory in self.seats.values_mut() {
            inventory.sort_by(|a, b| {
                a.seat_row
                    .cmp(&b.seat_row)
                    .then_with(|| a.seat_column.cmp(&b.seat_column))
            });
        }
    }

    pub fn add_boarding_passes(&mut self, flight_id: i64, passes: Vec<BoardingPass>) {
        self.boarding_passes.entry(flight_id).or_default().extend(passes);
    }

    /// A small seeded dataset: one flight, an airplane with rows 1-5 and
    /// columns A-D (rows 1-2 premium, type 2), two purchases on board.
    pub fn demo() -> Self {
        let mut repo = Self::new();
        repo.add_flight(Flight {
            flight_id: 1,
            takeoff_date_time: Utc.timestamp_opt(1_688_207_580, 0).unwrap(),
            takeoff_airport: "SCL".to_string(),
            landing_date_time: Utc.timestamp_opt(1_688_221_980, 0).unwrap(),
            landing_airport: "LIM".to_string(),
            airplane_id: 1,
        });

        let mut seats = Vec::new();
        let mut seat_id = 1;
        for row in 1..=5 {
            for column in ["A", "B", "C", "D"] {
                seats.push(Seat {
                    seat_id,
                    seat_row: row,
                    seat_column: column.to_string(),
                    seat_type_id: if row <= 2 { 2 } else { 1 },
                    airplane_id: 1,
                });
                seat_id += 1;
            }
        }
        repo.add_seats(seats);

        let passenger = |id: i64, name: &str, age: i32| Passenger {
            passenger_id: id,
            dni: format!("{}", 10_000_000 + id),
            name: name.to_string(),
            age,
            country: "Chile".to_string(),
        };
        repo.add_boarding_passes(
            1,
            vec![
                BoardingPass {
                    boarding_pass_id: 1,
                    purchase_id: 100,
                    passenger: passenger(1, "Amalia Fuentes", 41),
                    seat_type_id: 1,
                    seat_id: None,
                },
                BoardingPass {
                    boarding_pass_id: 2,
                    purchase_id: 100,
                    passenger: passenger(2, "Tomás Fuentes", 9),
                    seat_type_id: 1,
                    seat_id: None,
                },
                BoardingPass {
                    boarding_pass_id: 3,
                    purchase_id: 100,
                    passenger: passenger(3, "Renata Fuentes", 13),
                    seat_type_id: 1,
                    seat_id: None,
                },
                BoardingPass {
                    boarding_pass_id: 4,
                    purchase_id: 101,
                    passenger: passenger(4, "Ernesto Soto", 55),
                    seat_type_id: 2,
                    seat_id: None,
                },
                BoardingPass {
                    boarding_pass_id: 5,
                    purchase_id: 101,
                    passenger: passenger(5, "Carmen Soto", 52),
                    seat_type_id: 2,
                    seat_id: None,
                },
            ],
        );
        repo
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn find_flight(&self, flight_id: i64) -> Result<Option<Flight>, RepositoryError> {
        Ok(self.flights.get(&flight_id).cloned())
    }

    async fn boarding_passes(&self, flight_id: i64) -> Result<Vec<BoardingPass>, RepositoryError> {
        Ok(self.boarding_passes.get(&flight_id).cloned().unwrap_or_default())
    }

    async fn seats_for_airplane(&self, airplane_id: i64) -> Result<Vec<Seat>, RepositoryError> {
        Ok(self.seats.get(&airplane_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seats_come_back_ordered_by_row_then_column() {
        let mut repo = InMemoryFlightRepository::new();
        let seat = |seat_id, seat_row, seat_column: &str| Seat {
            seat_id,
            seat_row,
            seat_column: seat_column.to_string(),
            seat_type_id: 1,
            airplane_id: 7,
        };
        repo.add_seats(vec![seat(1, 2, "B"), seat(2, 1, "C"), seat(3, 1, "A"), seat(4, 2, "A")]);

        let inventory = repo.seats_for_airplane(7).await.unwrap();
        let order: Vec<i64> = inventory.iter().map(|s| s.seat_id).collect();
        assert_eq!(order, vec![3, 2, 4, 1]);
    }

    #[tokio::test]
    async fn missing_flight_data_is_empty_not_an_error() {
        let repo = InMemoryFlightRepository::new();
        assert!(repo.find_flight(9).await.unwrap().is_none());
        assert!(repo.boarding_passes(9).await.unwrap().is_empty());
        assert!(repo.seats_for_airplane(9).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn demo_dataset_is_consistent() {
        let repo = InMemoryFlightRepository::demo();
        let flight = repo.find_flight(1).await.unwrap().unwrap();
        let seats = repo.seats_for_airplane(flight.airplane_id).await.unwrap();
        let passes = repo.boarding_passes(1).await.unwrap();

        assert_eq!(seats.len(), 20);
        assert_eq!(passes.len(), 5);
        // Every required seat type exists somewhere in the inventory.
        for bp in &passes {
            assert!(seats.iter().any(|s| s.seat_type_id == bp.seat_type_id));
        }
    }
}
