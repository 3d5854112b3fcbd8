use link_dashboard::{router, AppState, Config, Dashboard, HttpBackend};
use std::{net::SocketAddr, sync::Arc};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    info!(
        "using backend {} (series policy {:?})",
        config.backend_url, config.series_policy
    );

    let backend = HttpBackend::new(config.backend_url.clone())?;
    let dashboard = Dashboard::new(Arc::new(backend), config.backend_url.clone(), config.series_policy);
    dashboard.load_session().await;

    let app = router(AppState::new(dashboard));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
