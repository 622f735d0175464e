use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::alerts::SeverityCounts;
use super::domain::{
    Alert, AlertKind, Card, CardId, CategoryRate, LoyaltyAccount, LoyaltyId, Severity,
};
use super::insights::PortfolioHighlights;

/// Card record shaped for API responses, with derived utilization.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: CardId,
    pub name: String,
    pub issuer: String,
    pub last_four: String,
    pub network: String,
    pub rewards_program: String,
    pub annual_fee_cents: u32,
    pub credit_limit_cents: u32,
    pub current_balance_cents: u32,
    pub utilization_pct: f32,
    pub categories: Vec<CategoryRate>,
}

impl CardView {
    pub fn from_card(card: &Card) -> Self {
        Self {
            id: card.id.clone(),
            name: card.name.clone(),
            issuer: card.issuer.clone(),
            last_four: card.last_four.clone(),
            network: card.network.clone(),
            rewards_program: card.rewards_program.clone(),
            annual_fee_cents: card.annual_fee_cents,
            credit_limit_cents: card.credit_limit_cents,
            current_balance_cents: card.current_balance_cents,
            utilization_pct: card.utilization() * 100.0,
            categories: card.categories.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoyaltyAccountView {
    pub id: LoyaltyId,
    pub program: String,
    pub point_balance: u32,
    pub value_cents: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_expiration: Option<u32>,
}

impl LoyaltyAccountView {
    pub fn from_account(account: &LoyaltyAccount) -> Self {
        Self {
            id: account.id.clone(),
            program: account.program.clone(),
            point_balance: account.point_balance,
            value_cents: account.value_cents,
            expiration_date: account.expiration_date,
            days_until_expiration: account.days_until_expiration,
        }
    }
}

/// Connected portfolio with its headline summary figures.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioView {
    pub cards: Vec<CardView>,
    pub loyalty_accounts: Vec<LoyaltyAccountView>,
    pub summary: PortfolioHighlights,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    pub id: String,
    pub kind: AlertKind,
    pub kind_label: &'static str,
    pub severity: Severity,
    pub severity_label: &'static str,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_at_risk_cents: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AlertView {
    pub fn from_alert(alert: &Alert) -> Self {
        Self {
            id: alert.id.clone(),
            kind: alert.kind,
            kind_label: alert.kind.label(),
            severity: alert.severity,
            severity_label: alert.severity.label(),
            title: alert.title.clone(),
            message: alert.message.clone(),
            value_at_risk_cents: alert.value_at_risk_cents,
            action: alert.action.clone(),
            created_at: alert.created_at,
        }
    }
}

/// Severity-ordered alert list plus per-severity tab counts.
#[derive(Debug, Clone, Serialize)]
pub struct AlertFeed {
    pub counts: SeverityCounts,
    pub alerts: Vec<AlertView>,
}
