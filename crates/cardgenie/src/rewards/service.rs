use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::alerts::{derive_alerts, severity_counts, AlertThresholds};
use super::assistant::{AssistantReply, AssistantResponder};
use super::catalog::RewardsCatalog;
use super::domain::{Card, CardId, LoyaltyAccount, LoyaltyId};
use super::engine::{Recommendation, RecommendationEngine};
use super::insights::{
    goal_progress, portfolio_highlights, spending_summary, GoalProgress, SpendingSummary,
};
use super::portfolio::PortfolioRepository;
use super::views::{AlertFeed, AlertView, CardView, LoyaltyAccountView, PortfolioView};

/// Service composing the catalog, the portfolio store, the recommendation
/// engine, and the alert/insight generators. Every operation is a total
/// function: unknown identifiers are dropped, unknown categories fall back
/// to the `other` bucket, and nothing here can fail for well-typed input.
pub struct RewardsService<R> {
    catalog: Arc<RewardsCatalog>,
    portfolio: Arc<R>,
    engine: RecommendationEngine,
    responder: AssistantResponder,
    thresholds: AlertThresholds,
}

impl<R> RewardsService<R>
where
    R: PortfolioRepository + 'static,
{
    pub fn new(catalog: Arc<RewardsCatalog>, portfolio: Arc<R>, thresholds: AlertThresholds) -> Self {
        let engine = RecommendationEngine::new(catalog.clone());
        Self {
            catalog,
            portfolio,
            engine,
            responder: AssistantResponder::standard(),
            thresholds,
        }
    }

    /// Connect every catalog card and loyalty account, the demo's initial
    /// state.
    pub fn connect_full_catalog(&self) {
        self.portfolio.connect_cards(&self.catalog.card_ids());
        self.portfolio
            .connect_loyalty_accounts(&self.catalog.loyalty_ids());
    }

    pub fn catalog(&self) -> &RewardsCatalog {
        &self.catalog
    }

    pub fn connect_cards(&self, ids: &[CardId]) -> PortfolioView {
        self.portfolio.connect_cards(ids);
        self.portfolio_view()
    }

    pub fn disconnect_card(&self, id: &CardId) -> PortfolioView {
        self.portfolio.disconnect_card(id);
        self.portfolio_view()
    }

    pub fn connect_loyalty_accounts(&self, ids: &[LoyaltyId]) -> PortfolioView {
        self.portfolio.connect_loyalty_accounts(ids);
        self.portfolio_view()
    }

    pub fn disconnect_loyalty_account(&self, id: &LoyaltyId) -> PortfolioView {
        self.portfolio.disconnect_loyalty_account(id);
        self.portfolio_view()
    }

    /// Catalog records for the connected cards, in connection order.
    /// Unknown ids are silently dropped.
    pub fn connected_cards(&self) -> Vec<Card> {
        self.portfolio
            .connected_card_ids()
            .iter()
            .filter_map(|id| self.catalog.card(id))
            .cloned()
            .collect()
    }

    pub fn connected_loyalty_accounts(&self) -> Vec<LoyaltyAccount> {
        self.portfolio
            .connected_loyalty_ids()
            .iter()
            .filter_map(|id| self.catalog.loyalty_account(id))
            .cloned()
            .collect()
    }

    pub fn portfolio_view(&self) -> PortfolioView {
        let cards = self.connected_cards();
        let loyalty = self.connected_loyalty_accounts();
        let summary = portfolio_highlights(&cards, &loyalty, &self.thresholds);

        PortfolioView {
            cards: cards.iter().map(CardView::from_card).collect(),
            loyalty_accounts: loyalty
                .iter()
                .map(LoyaltyAccountView::from_account)
                .collect(),
            summary,
        }
    }

    pub fn recommend(&self, category: &str, amount_cents: u32) -> Recommendation {
        self.engine.recommend(category, amount_cents)
    }

    pub fn alerts(&self, now: DateTime<Utc>) -> AlertFeed {
        let cards = self.connected_cards();
        let loyalty = self.connected_loyalty_accounts();
        let alerts = derive_alerts(
            &cards,
            &loyalty,
            self.catalog.seed_alerts(),
            &self.thresholds,
            now,
        );

        AlertFeed {
            counts: severity_counts(&alerts),
            alerts: alerts.iter().map(AlertView::from_alert).collect(),
        }
    }

    pub fn spending(&self, card: Option<&CardId>) -> SpendingSummary {
        spending_summary(self.catalog.transactions(), card)
    }

    pub fn goals(&self) -> Vec<GoalProgress> {
        goal_progress(self.catalog.goals())
    }

    pub fn assistant_reply(&self, message: &str) -> AssistantReply {
        self.responder.reply(message)
    }
}
