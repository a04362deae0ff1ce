use std::net::SocketAddr;
use std::sync::Arc;

use condor_api::{app, AppState};
use condor_checkin::CheckinService;
use condor_domain::FlightRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "condor_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = condor_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting condor API on port {}", config.server.port);

    let repo: Arc<dyn FlightRepository> = match &config.database.url {
        Some(url) => {
            let pg = condor_store::PgFlightRepository::connect(url)
                .await
                .expect("Failed to connect to Postgres");
            Arc::new(pg)
        }
        None => {
            tracing::warn!("no database configured, serving the seeded demo dataset");
            Arc::new(condor_store::InMemoryFlightRepository::demo())
        }
    };

    let state = AppState {
        checkin: Arc::new(CheckinService::new(repo)),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app(state)).await.unwrap();
}
