use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryPortfolio};
use crate::routes::with_rewards_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use cardgenie::config::AppConfig;
use cardgenie::error::AppError;
use cardgenie::rewards::{AlertThresholds, RewardsCatalog, RewardsService};
use cardgenie::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(RewardsCatalog::standard());
    let portfolio = Arc::new(InMemoryPortfolio::default());
    let rewards_service = Arc::new(RewardsService::new(
        catalog,
        portfolio,
        AlertThresholds::default(),
    ));
    // The demo portfolio starts with every catalog record connected.
    rewards_service.connect_full_catalog();

    let app = with_rewards_routes(rewards_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "rewards service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
