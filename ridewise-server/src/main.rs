use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use ridewise_server::ehailing::{
    EHailingBackend, EHailingClient, EHailingConfig, MockEHailingClient,
};
use ridewise_server::formatter::TripService;
use ridewise_server::myciti::{MockMyCitiClient, MyCitiBackend, MyCitiClient, MyCitiConfig};
use ridewise_server::web::{AppState, create_router};

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default static assets directory.
const DEFAULT_STATIC_DIR: &str = "static";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ridewise_server=info,tower_http=info")),
        )
        .init();

    // Recorded responses replace the backend when a fixture directory is given
    let backend = match std::env::var("MYCITI_FIXTURES_DIR") {
        Ok(dir) => {
            let mock = MockMyCitiClient::new(&dir)?;
            info!(dir = %dir, trips = mock.len(), "Serving recorded MyCiTi trips");
            MyCitiBackend::Fixtures(mock)
        }
        Err(_) => {
            let config = MyCitiConfig::from_env();
            info!(base_url = %config.base_url, "Using MyCiTi service");
            MyCitiBackend::Http(MyCitiClient::new(config)?)
        }
    };

    let estimates = match std::env::var("UBER_FIXTURES_DIR") {
        Ok(dir) => {
            let mock = MockEHailingClient::new(&dir)?;
            info!(dir = %dir, estimates = mock.len(), "Serving recorded e-hailing estimates");
            EHailingBackend::Fixtures(mock)
        }
        Err(_) => {
            let config = EHailingConfig::from_env();
            info!(base_url = %config.base_url, "Using e-hailing estimator");
            EHailingBackend::Http(EHailingClient::new(config)?)
        }
    };

    let truncate =
        std::env::var("RIDEWISE_SHORT_ADDRESSES").is_ok_and(|v| v == "1" || v == "true");
    let state = AppState::new(TripService::new(backend))
        .with_estimates(estimates)
        .with_address_truncation(truncate);

    let static_dir =
        std::env::var("RIDEWISE_STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());
    let app = create_router(state, &static_dir);

    let addr: SocketAddr = std::env::var("RIDEWISE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    info!("RideWise listening on http://{addr}");
    info!("  GET  /health    - Health check");
    info!("  GET  /api/trip  - Trip comparison (JSON)");
    info!("  GET  /trip      - Trip comparison (HTML fragment)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
