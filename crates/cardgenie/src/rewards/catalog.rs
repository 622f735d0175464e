use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::domain::{
    Alert, AlertKind, Card, CardId, CategoryRate, Goal, GoalKind, LoyaltyAccount, LoyaltyId,
    Severity, SpendCategory, Transaction,
};

/// Static catalog backing the demo portfolio. Full card and loyalty records
/// live here; the portfolio store tracks only which identifiers are
/// connected. Nothing is ever removed from the catalog.
#[derive(Debug)]
pub struct RewardsCatalog {
    cards: Vec<Card>,
    loyalty_accounts: Vec<LoyaltyAccount>,
    seed_alerts: Vec<Alert>,
    transactions: Vec<Transaction>,
    goals: Vec<Goal>,
}

impl RewardsCatalog {
    pub fn standard() -> Self {
        Self {
            cards: standard_cards(),
            loyalty_accounts: standard_loyalty_accounts(),
            seed_alerts: standard_seed_alerts(),
            transactions: standard_transactions(),
            goals: standard_goals(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn loyalty_accounts(&self) -> &[LoyaltyAccount] {
        &self.loyalty_accounts
    }

    /// Bonus and recommendation notices shipped as fixed feed content.
    /// Expiration and limit alerts are always derived, never seeded.
    pub fn seed_alerts(&self) -> &[Alert] {
        &self.seed_alerts
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    pub fn loyalty_account(&self, id: &LoyaltyId) -> Option<&LoyaltyAccount> {
        self.loyalty_accounts.iter().find(|account| &account.id == id)
    }

    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id.clone()).collect()
    }

    pub fn loyalty_ids(&self) -> Vec<LoyaltyId> {
        self.loyalty_accounts
            .iter()
            .map(|account| account.id.clone())
            .collect()
    }
}

fn card(
    id: &str,
    name: &str,
    issuer: &str,
    last_four: &str,
    network: &str,
    rewards_program: &str,
    credit_limit_cents: u32,
    current_balance_cents: u32,
    categories: Vec<CategoryRate>,
) -> Card {
    Card {
        id: CardId::new(id),
        name: name.to_string(),
        issuer: issuer.to_string(),
        last_four: last_four.to_string(),
        network: network.to_string(),
        rewards_program: rewards_program.to_string(),
        annual_fee_cents: 0,
        credit_limit_cents,
        current_balance_cents,
        categories,
    }
}

fn rate(name: &str, rate: f32) -> CategoryRate {
    CategoryRate {
        name: name.to_string(),
        rate,
    }
}

fn standard_cards() -> Vec<Card> {
    vec![
        card(
            "sound-rewards",
            "Sound Credit Union Rewards",
            "Sound Credit Union",
            "4892",
            "Visa",
            "Sound Rewards",
            300_000,
            75_000,
            vec![rate("Everything", 1.0)],
        ),
        card(
            "sound-cashback",
            "Sound Credit Union Cashback",
            "Sound Credit Union",
            "1004",
            "Visa",
            "Sound Cashback",
            200_000,
            38_000,
            vec![rate("Everything", 1.5)],
        ),
        card(
            "freedom-flex",
            "Chase Freedom Flex",
            "Chase",
            "7823",
            "Visa",
            "Chase Ultimate Rewards",
            300_000,
            60_000,
            vec![
                rate("Dining", 3.0),
                rate("Grocery", 3.0),
                rate("Travel", 5.0),
                rate("Everything", 1.0),
            ],
        ),
        card(
            "double-cash",
            "Citi Double Cash",
            "Citi",
            "3391",
            "Mastercard",
            "Citi ThankYou Rewards",
            150_000,
            40_000,
            vec![rate("Dining", 2.0), rate("Travel", 2.0)],
        ),
    ]
}

fn standard_loyalty_accounts() -> Vec<LoyaltyAccount> {
    vec![
        LoyaltyAccount {
            id: LoyaltyId::new("hyatt"),
            program: "World of Hyatt".to_string(),
            point_balance: 32_000,
            value_cents: 64_000,
            expiration_date: None,
            days_until_expiration: None,
        },
        LoyaltyAccount {
            id: LoyaltyId::new("united"),
            program: "United MileagePlus".to_string(),
            point_balance: 45_000,
            value_cents: 67_500,
            expiration_date: Some(date(2025, 3, 15)),
            days_until_expiration: Some(131),
        },
        LoyaltyAccount {
            id: LoyaltyId::new("hilton"),
            program: "Hilton Honors".to_string(),
            point_balance: 58_000,
            value_cents: 29_000,
            expiration_date: Some(date(2024, 12, 20)),
            days_until_expiration: Some(45),
        },
        LoyaltyAccount {
            id: LoyaltyId::new("costco"),
            program: "Costco Gold Star Member".to_string(),
            point_balance: 0,
            value_cents: 15_000,
            expiration_date: None,
            days_until_expiration: None,
        },
    ]
}

fn standard_seed_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "seed-dining-upgrade".to_string(),
            kind: AlertKind::Recommendation,
            severity: Severity::Warning,
            title: "Better card for dining".to_string(),
            message: "Using Chase Freedom Flex instead of Sound Cashback would earn you 3x \
                      points on dining purchases."
                .to_string(),
            value_at_risk_cents: None,
            action: Some("See Analysis".to_string()),
            created_at: timestamp(2024, 11, 2, 9, 15),
        },
        Alert {
            id: "seed-travel-bonus".to_string(),
            kind: AlertKind::Bonus,
            severity: Severity::Info,
            title: "5x bonus on Chase Freedom Flex".to_string(),
            message: "Earn 5x points on travel bookings this quarter.".to_string(),
            value_at_risk_cents: None,
            action: Some("Learn More".to_string()),
            created_at: timestamp(2024, 10, 31, 12, 0),
        },
    ]
}

fn standard_transactions() -> Vec<Transaction> {
    vec![
        transaction(
            "txn-0001",
            date(2024, 11, 4),
            "Whole Foods",
            SpendCategory::Groceries,
            12_450,
            "sound-cashback",
            498,
        ),
        transaction(
            "txn-0002",
            date(2024, 11, 3),
            "United Airlines",
            SpendCategory::Travel,
            45_890,
            "sound-rewards",
            1_377,
        ),
        transaction(
            "txn-0003",
            date(2024, 11, 3),
            "Starbucks",
            SpendCategory::Dining,
            850,
            "sound-cashback",
            34,
        ),
        transaction(
            "txn-0004",
            date(2024, 11, 2),
            "Amazon",
            SpendCategory::Shopping,
            8_920,
            "freedom-flex",
            178,
        ),
        transaction(
            "txn-0005",
            date(2024, 11, 1),
            "Shell Gas Station",
            SpendCategory::Gas,
            5_500,
            "freedom-flex",
            110,
        ),
    ]
}

fn transaction(
    id: &str,
    date: NaiveDate,
    merchant: &str,
    category: SpendCategory,
    amount_cents: u32,
    card_id: &str,
    rewards_earned: u32,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date,
        merchant: merchant.to_string(),
        category,
        amount_cents,
        card_id: CardId::new(card_id),
        rewards_earned,
    }
}

fn standard_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "goal-hawaii".to_string(),
            name: "Hawaii Vacation 2025".to_string(),
            target_cents: 100_000,
            current_cents: 67_500,
            target_date: date(2025, 7, 1),
            kind: GoalKind::Travel,
        },
        Goal {
            id: "goal-holiday".to_string(),
            name: "Holiday Shopping Fund".to_string(),
            target_cents: 50_000,
            current_cents: 29_000,
            target_date: date(2024, 12, 15),
            kind: GoalKind::Cashback,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid catalog date")
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid catalog timestamp")
}
