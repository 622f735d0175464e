use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use cardgenie::error::AppError;
use cardgenie::rewards::{
    rewards_router, spending_summary, CardId, PortfolioRepository, RewardsService,
    SpendingSummary, StatementImporter,
};
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct StatementInsightsRequest {
    pub(crate) csv: String,
    #[serde(default)]
    pub(crate) card_id: Option<String>,
}

pub(crate) fn with_rewards_routes<R>(service: Arc<RewardsService<R>>) -> axum::Router
where
    R: PortfolioRepository + 'static,
{
    rewards_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/insights/statement",
            axum::routing::post(statement_insights_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Hydrate spending insights from an uploaded statement export instead of
/// the catalog transactions. Malformed CSV rows surface as 400s.
pub(crate) async fn statement_insights_endpoint(
    Json(payload): Json<StatementInsightsRequest>,
) -> Result<Json<SpendingSummary>, AppError> {
    let StatementInsightsRequest { csv, card_id } = payload;

    let reader = Cursor::new(csv.into_bytes());
    let transactions = StatementImporter::from_reader(reader)?;
    let card_id = card_id.map(CardId::new);

    Ok(Json(spending_summary(&transactions, card_id.as_ref())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn statement_endpoint_summarizes_uploaded_csv() {
        let request = StatementInsightsRequest {
            csv: "Date,Merchant,Category,Amount,Card,Rewards\n\
                  2024-11-04,Whole Foods,Groceries,124.50,sound-cashback,498\n"
                .to_string(),
            card_id: None,
        };

        let Json(summary) = statement_insights_endpoint(Json(request))
            .await
            .expect("summary builds");

        assert_eq!(summary.transaction_count, 1);
        assert_eq!(summary.total_spend_cents, 12_450);
    }

    #[tokio::test]
    async fn statement_endpoint_rejects_malformed_rows() {
        let request = StatementInsightsRequest {
            csv: "Date,Merchant,Category,Amount,Card,Rewards\n\
                  bad-date,Shop,Other,10.00,,\n"
                .to_string(),
            card_id: None,
        };

        let error = statement_insights_endpoint(Json(request))
            .await
            .expect_err("import must fail");
        assert!(matches!(error, AppError::Import(_)));
    }
}
