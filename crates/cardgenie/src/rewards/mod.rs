//! Rewards portfolio, recommendation, and alerting domain.
//!
//! The static catalog owns every card and loyalty record; the portfolio
//! store tracks which identifiers are connected; the recommendation engine
//! and alert generator are pure functions over that state.

pub mod alerts;
pub mod assistant;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod import;
pub mod insights;
pub mod portfolio;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use alerts::{derive_alerts, severity_counts, AlertThresholds, SeverityCounts};
pub use assistant::{AssistantReply, AssistantResponder};
pub use catalog::RewardsCatalog;
pub use domain::{
    Alert, AlertKind, Card, CardId, CategoryRate, Goal, GoalKind, LoyaltyAccount, LoyaltyId,
    Severity, SpendCategory, Transaction,
};
pub use engine::{estimate_reward_cents, Recommendation, RecommendationEngine};
pub use import::{StatementImportError, StatementImporter};
pub use insights::{
    goal_progress, portfolio_highlights, spending_summary, GoalProgress, PortfolioHighlights,
    SpendingSummary,
};
pub use portfolio::PortfolioRepository;
pub use router::rewards_router;
pub use service::RewardsService;
pub use views::{AlertFeed, AlertView, CardView, LoyaltyAccountView, PortfolioView};
