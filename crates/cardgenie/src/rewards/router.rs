use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use super::assistant::AssistantReply;
use super::domain::{CardId, LoyaltyId};
use super::engine::Recommendation;
use super::insights::{GoalProgress, SpendingSummary};
use super::portfolio::PortfolioRepository;
use super::service::RewardsService;
use super::views::{AlertFeed, PortfolioView};

/// Router builder exposing the rewards API. Every handler is infallible:
/// malformed JSON is rejected by the extractor, and all well-typed inputs
/// produce a 200 response.
pub fn rewards_router<R>(service: Arc<RewardsService<R>>) -> Router
where
    R: PortfolioRepository + 'static,
{
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler::<R>))
        .route("/api/v1/portfolio", get(portfolio_handler::<R>))
        .route(
            "/api/v1/portfolio/cards",
            post(connect_cards_handler::<R>),
        )
        .route(
            "/api/v1/portfolio/cards/:card_id",
            delete(disconnect_card_handler::<R>),
        )
        .route(
            "/api/v1/portfolio/loyalty",
            post(connect_loyalty_handler::<R>),
        )
        .route(
            "/api/v1/portfolio/loyalty/:account_id",
            delete(disconnect_loyalty_handler::<R>),
        )
        .route("/api/v1/alerts", get(alerts_handler::<R>))
        .route(
            "/api/v1/insights/spending",
            get(spending_handler::<R>),
        )
        .route(
            "/api/v1/insights/spending/:card_id",
            get(card_spending_handler::<R>),
        )
        .route("/api/v1/insights/goals", get(goals_handler::<R>))
        .route(
            "/api/v1/assistant/messages",
            post(assistant_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub category: String,
    pub amount_cents: u32,
}

#[derive(Debug, Deserialize)]
pub struct ConnectIdsRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessageRequest {
    pub message: String,
}

pub(crate) async fn recommend_handler<R>(
    State(service): State<Arc<RewardsService<R>>>,
    Json(request): Json<RecommendationRequest>,
) -> Json<Recommendation>
where
    R: PortfolioRepository + 'static,
{
    Json(service.recommend(&request.category, request.amount_cents))
}

pub(crate) async fn portfolio_handler<R>(
    State(service): State<Arc<RewardsService<R>>>,
) -> Json<PortfolioView>
where
    R: PortfolioRepository + 'static,
{
    Json(service.portfolio_view())
}

pub(crate) async fn connect_cards_handler<R>(
    State(service): State<Arc<RewardsService<R>>>,
    Json(request): Json<ConnectIdsRequest>,
) -> Json<PortfolioView>
where
    R: PortfolioRepository + 'static,
{
    let ids: Vec<CardId> = request.ids.into_iter().map(CardId::new).collect();
    Json(service.connect_cards(&ids))
}

pub(crate) async fn disconnect_card_handler<R>(
    State(service): State<Arc<RewardsService<R>>>,
    Path(card_id): Path<String>,
) -> Json<PortfolioView>
where
    R: PortfolioRepository + 'static,
{
    Json(service.disconnect_card(&CardId::new(card_id)))
}

pub(crate) async fn connect_loyalty_handler<R>(
    State(service): State<Arc<RewardsService<R>>>,
    Json(request): Json<ConnectIdsRequest>,
) -> Json<PortfolioView>
where
    R: PortfolioRepository + 'static,
{
    let ids: Vec<LoyaltyId> = request.ids.into_iter().map(LoyaltyId::new).collect();
    Json(service.connect_loyalty_accounts(&ids))
}

pub(crate) async fn disconnect_loyalty_handler<R>(
    State(service): State<Arc<RewardsService<R>>>,
    Path(account_id): Path<String>,
) -> Json<PortfolioView>
where
    R: PortfolioRepository + 'static,
{
    Json(service.disconnect_loyalty_account(&LoyaltyId::new(account_id)))
}

pub(crate) async fn alerts_handler<R>(
    State(service): State<Arc<RewardsService<R>>>,
) -> Json<AlertFeed>
where
    R: PortfolioRepository + 'static,
{
    Json(service.alerts(Utc::now()))
}

pub(crate) async fn spending_handler<R>(
    State(service): State<Arc<RewardsService<R>>>,
) -> Json<SpendingSummary>
where
    R: PortfolioRepository + 'static,
{
    Json(service.spending(None))
}

pub(crate) async fn card_spending_handler<R>(
    State(service): State<Arc<RewardsService<R>>>,
    Path(card_id): Path<String>,
) -> Json<SpendingSummary>
where
    R: PortfolioRepository + 'static,
{
    Json(service.spending(Some(&CardId::new(card_id))))
}

pub(crate) async fn goals_handler<R>(
    State(service): State<Arc<RewardsService<R>>>,
) -> Json<Vec<GoalProgress>>
where
    R: PortfolioRepository + 'static,
{
    Json(service.goals())
}

pub(crate) async fn assistant_handler<R>(
    State(service): State<Arc<RewardsService<R>>>,
    Json(request): Json<AssistantMessageRequest>,
) -> Json<AssistantReply>
where
    R: PortfolioRepository + 'static,
{
    Json(service.assistant_reply(&request.message))
}
