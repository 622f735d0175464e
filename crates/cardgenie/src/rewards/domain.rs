use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog credit cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Identifier wrapper for catalog loyalty accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoyaltyId(pub String);

impl LoyaltyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Purchase categories the recommendation table is keyed on. Free-text input
/// resolves case-insensitively; anything unrecognized lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendCategory {
    Dining,
    Groceries,
    Travel,
    Gas,
    Shopping,
    Entertainment,
    Other,
}

impl SpendCategory {
    pub const ALL: [SpendCategory; 7] = [
        SpendCategory::Dining,
        SpendCategory::Groceries,
        SpendCategory::Travel,
        SpendCategory::Gas,
        SpendCategory::Shopping,
        SpendCategory::Entertainment,
        SpendCategory::Other,
    ];

    pub fn resolve(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dining" => Self::Dining,
            "groceries" | "grocery" => Self::Groceries,
            "travel" => Self::Travel,
            "gas" => Self::Gas,
            "shopping" => Self::Shopping,
            "entertainment" => Self::Entertainment,
            _ => Self::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dining => "Dining",
            Self::Groceries => "Groceries",
            Self::Travel => "Travel",
            Self::Gas => "Gas",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Noun phrase used when assembling recommendation copy.
    pub(crate) const fn spend_phrase(self) -> &'static str {
        match self {
            Self::Dining => "dining",
            Self::Groceries => "grocery",
            Self::Travel => "travel",
            Self::Gas => "gas station",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::Other => "everyday",
        }
    }
}

/// Earning rate a card posts for one of its bonus categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRate {
    pub name: String,
    pub rate: f32,
}

/// Catalog record for a credit card. All money fields are integer cents.
///
/// `current_balance_cents <= credit_limit_cents` is expected but not
/// enforced; utilization simply reflects whatever the record holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub issuer: String,
    pub last_four: String,
    pub network: String,
    pub rewards_program: String,
    pub annual_fee_cents: u32,
    pub credit_limit_cents: u32,
    pub current_balance_cents: u32,
    pub categories: Vec<CategoryRate>,
}

impl Card {
    /// Balance divided by limit, as a ratio. A zero limit reads as fully
    /// utilized so it can never hide a carried balance.
    pub fn utilization(&self) -> f32 {
        if self.credit_limit_cents == 0 {
            if self.current_balance_cents == 0 {
                0.0
            } else {
                1.0
            }
        } else {
            self.current_balance_cents as f32 / self.credit_limit_cents as f32
        }
    }
}

/// Catalog record for a loyalty program account.
///
/// Invariant: `expiration_date == None` implies `days_until_expiration == None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    pub id: LoyaltyId,
    pub program: String,
    pub point_balance: u32,
    pub value_cents: u32,
    pub expiration_date: Option<NaiveDate>,
    pub days_until_expiration: Option<u32>,
}

/// Classification for an alert feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Expiration,
    Bonus,
    Recommendation,
    Limit,
}

impl AlertKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Expiration => "Expiration",
            Self::Bonus => "Bonus",
            Self::Recommendation => "Recommendation",
            Self::Limit => "Limit",
        }
    }
}

/// Alert severity, ranked urgent before warning before info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Urgent,
    Warning,
    Info,
}

impl Severity {
    pub const fn rank(self) -> u8 {
        match self {
            Self::Urgent => 0,
            Self::Warning => 1,
            Self::Info => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

/// A severity-tagged notice surfaced on the dashboard feed. Alerts have no
/// lifecycle beyond creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub value_at_risk_cents: Option<u32>,
    pub action: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A settled purchase used for read-only spending aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub merchant: String,
    pub category: SpendCategory,
    pub amount_cents: u32,
    pub card_id: CardId,
    pub rewards_earned: u32,
}

/// Savings target funded by accumulated rewards value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_cents: u32,
    pub current_cents: u32,
    pub target_date: NaiveDate,
    pub kind: GoalKind,
}

impl Goal {
    /// Current over target, clamped to 1.0. A zero target counts as met.
    pub fn progress(&self) -> f32 {
        if self.target_cents == 0 {
            1.0
        } else {
            (self.current_cents as f32 / self.target_cents as f32).clamp(0.0, 1.0)
        }
    }

    pub fn remaining_cents(&self) -> u32 {
        self.target_cents.saturating_sub(self.current_cents)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    Travel,
    Cashback,
    StatementCredit,
}

impl GoalKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Travel => "Travel",
            Self::Cashback => "Cashback",
            Self::StatementCredit => "Statement Credit",
        }
    }
}
