use async_trait::async_trait;
use chrono::{DateTime, Utc};
use condor_domain::{
    BoardingPass, Flight, FlightRepository, Passenger, RepositoryError, Seat,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};

/// Postgres-backed flight repository. Queries use the runtime `query_as`
/// API so the crate builds without a live database.
pub struct PgFlightRepository {
    pool: PgPool,
}

impl PgFlightRepository {
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
        tracing::info!("connected to Postgres");
        Ok(Self { pool })
    }

    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct FlightRow {
    flight_id: i64,
    takeoff_date_time: DateTime<Utc>,
    takeoff_airport: String,
    landing_date_time: DateTime<Utc>,
    landing_airport: String,
    airplane_id: i64,
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Self {
            flight_id: row.flight_id,
            takeoff_date_time: row.takeoff_date_time,
            takeoff_airport: row.takeoff_airport,
            landing_date_time: row.landing_date_time,
            landing_airport: row.landing_airport,
            airplane_id: row.airplane_id,
        }
    }
}

#[derive(FromRow)]
struct BoardingPassRow {
    boarding_pass_id: i64,
    purchase_id: i64,
    seat_type_id: i64,
    seat_id: Option<i64>,
    passenger_id: i64,
    dni: String,
    name: String,
    age: i32,
    country: String,
}

impl From<BoardingPassRow> for BoardingPass {
    fn from(row: BoardingPassRow) -> Self {
        Self {
            boarding_pass_id: row.boarding_pass_id,
            purchase_id: row.purchase_id,
            passenger: Passenger {
                passenger_id: row.passenger_id,
                dni: row.dni,
                name: row.name,
                age: row.age,
                country: row.country,
            },
            seat_type_id: row.seat_type_id,
            seat_id: row.seat_id,
        }
    }
}

#[derive(FromRow)]
struct SeatRow {
    seat_id: i64,
    seat_row: i32,
    seat_column: String,
    seat_type_id: i64,
    airplane_id: i64,
}

impl From<SeatRow> for Seat {
    fn from(row: SeatRow) -> Self {
        Self {
            seat_id: row.seat_id,
            seat_row: row.seat_row,
            seat_column: row.seat_column,
            seat_type_id: row.seat_type_id,
            airplane_id: row.airplane_id,
        }
    }
}

#[async_trait]
impl FlightRepository for PgFlightRepository {
    async fn find_flight(&self, flight_id: i64) -> Result<Option<Flight>, RepositoryError> {
        let row = sqlx::query_as::<_, FlightRow>(
            r#"
            SELECT flight_id, takeoff_date_time, takeoff_airport,
                   landing_date_time, landing_airport, airplane_id
            FROM flight
            WHERE flight_id = $1
            "#,
        )
        .bind(flight_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Flight::from))
    }

    async fn boarding_passes(&self, flight_id: i64) -> Result<Vec<BoardingPass>, RepositoryError> {
        let rows = sqlx::query_as::<_, BoardingPassRow>(
            r#"
            SELECT bp.boarding_pass_id, bp.purchase_id, bp.seat_type_id, bp.seat_id,
                   p.passenger_id, p.dni, p.name, p.age, p.country
            FROM boarding_pass bp
            JOIN passenger p ON p.passenger_id = bp.passenger_id
            WHERE bp.flight_id = $1
            ORDER BY bp.boarding_pass_id
            "#,
        )
        .bind(flight_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BoardingPass::from).collect())
    }

    async fn seats_for_airplane(&self, airplane_id: i64) -> Result<Vec<Seat>, RepositoryError> {
        // Seats belong to the airplane, not the flight; ordered so the
        // engine scans rows bottom-up.
        let rows = sqlx::query_as::<_, SeatRow>(
            r#"
            SELECT seat_id, seat_row, seat_column, seat_type_id, airplane_id
            FROM seat
            WHERE airplane_id = $1
            ORDER BY seat_row, seat_column
            "#,
        )
        .bind(airplane_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Seat::from).collect())
    }
}
