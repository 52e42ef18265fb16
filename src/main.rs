use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use todosapp::logging::init_tracing;
use todosapp::metrics::init_metrics;
use todosapp::router::init_router_with_metrics;
use todosapp::state::init_app_state;
use todosapp_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(&config.logging)?;

    let metrics_handle = init_metrics()?;
    let state = init_app_state(&config).await?;
    let app = init_router_with_metrics(state, metrics_handle);

    let address = config.server.address();
    let listener = TcpListener::bind(&address).await?;
    info!(%address, "Server listening");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
