use chrono::NaiveDate;
use serde::Serialize;

use super::alerts::AlertThresholds;
use super::domain::{Card, CardId, Goal, GoalKind, LoyaltyAccount, SpendCategory, Transaction};

/// Aggregate spend and rewards for one category, in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: SpendCategory,
    pub category_label: &'static str,
    pub amount_cents: u32,
    pub rewards_earned: u32,
}

/// Read-only rollup of transactions, optionally scoped to a single card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<CardId>,
    pub transaction_count: usize,
    pub total_spend_cents: u32,
    pub total_rewards_earned: u32,
    /// Rewards over spend, as a percentage. Zero spend reads as zero.
    pub average_reward_rate_pct: f32,
    pub by_category: Vec<CategorySpend>,
}

pub fn spending_summary(transactions: &[Transaction], card: Option<&CardId>) -> SpendingSummary {
    let mut by_category: Vec<CategorySpend> = Vec::new();
    let mut total_spend_cents: u32 = 0;
    let mut total_rewards_earned: u32 = 0;
    let mut transaction_count = 0;

    for transaction in transactions {
        if let Some(card_id) = card {
            if &transaction.card_id != card_id {
                continue;
            }
        }

        transaction_count += 1;
        total_spend_cents = total_spend_cents.saturating_add(transaction.amount_cents);
        total_rewards_earned = total_rewards_earned.saturating_add(transaction.rewards_earned);

        match by_category
            .iter_mut()
            .find(|entry| entry.category == transaction.category)
        {
            Some(entry) => {
                entry.amount_cents = entry.amount_cents.saturating_add(transaction.amount_cents);
                entry.rewards_earned =
                    entry.rewards_earned.saturating_add(transaction.rewards_earned);
            }
            None => by_category.push(CategorySpend {
                category: transaction.category,
                category_label: transaction.category.label(),
                amount_cents: transaction.amount_cents,
                rewards_earned: transaction.rewards_earned,
            }),
        }
    }

    let average_reward_rate_pct = if total_spend_cents == 0 {
        0.0
    } else {
        total_rewards_earned as f32 / total_spend_cents as f32 * 100.0
    };

    SpendingSummary {
        card_id: card.cloned(),
        transaction_count,
        total_spend_cents,
        total_rewards_earned,
        average_reward_rate_pct,
        by_category,
    }
}

/// Display-derived progress for one savings goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_id: String,
    pub name: String,
    pub kind: GoalKind,
    pub kind_label: &'static str,
    pub target_cents: u32,
    pub current_cents: u32,
    pub remaining_cents: u32,
    pub target_date: NaiveDate,
    pub progress_pct: f32,
}

pub fn goal_progress(goals: &[Goal]) -> Vec<GoalProgress> {
    goals
        .iter()
        .map(|goal| GoalProgress {
            goal_id: goal.id.clone(),
            name: goal.name.clone(),
            kind: goal.kind,
            kind_label: goal.kind.label(),
            target_cents: goal.target_cents,
            current_cents: goal.current_cents,
            remaining_cents: goal.remaining_cents(),
            target_date: goal.target_date,
            progress_pct: goal.progress() * 100.0,
        })
        .collect()
}

/// Headline figures for the portfolio summary strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortfolioHighlights {
    /// Combined cash value of every connected loyalty balance.
    pub total_rewards_value_cents: u32,
    /// Value on loyalty balances inside the expiration window.
    pub expiring_value_cents: u32,
    /// Aggregate balance over aggregate limit, as a percentage.
    pub utilization_pct: f32,
}

pub fn portfolio_highlights(
    cards: &[Card],
    loyalty_accounts: &[LoyaltyAccount],
    thresholds: &AlertThresholds,
) -> PortfolioHighlights {
    let total_rewards_value_cents = loyalty_accounts
        .iter()
        .fold(0u32, |sum, account| sum.saturating_add(account.value_cents));

    let expiring_value_cents = loyalty_accounts
        .iter()
        .filter(|account| {
            account
                .days_until_expiration
                .is_some_and(|days| days < thresholds.expiration_window_days)
        })
        .fold(0u32, |sum, account| sum.saturating_add(account.value_cents));

    let total_balance: u64 = cards
        .iter()
        .map(|card| card.current_balance_cents as u64)
        .sum();
    let total_limit: u64 = cards
        .iter()
        .map(|card| card.credit_limit_cents as u64)
        .sum();
    let utilization_pct = if total_limit == 0 {
        0.0
    } else {
        total_balance as f32 / total_limit as f32 * 100.0
    };

    PortfolioHighlights {
        total_rewards_value_cents,
        expiring_value_cents,
        utilization_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::catalog::RewardsCatalog;

    #[test]
    fn summary_groups_categories_in_first_seen_order() {
        let catalog = RewardsCatalog::standard();
        let summary = spending_summary(catalog.transactions(), None);

        assert_eq!(summary.transaction_count, 5);
        assert_eq!(summary.total_spend_cents, 73_610);
        assert_eq!(summary.total_rewards_earned, 2_197);
        let categories: Vec<SpendCategory> = summary
            .by_category
            .iter()
            .map(|entry| entry.category)
            .collect();
        assert_eq!(
            categories,
            vec![
                SpendCategory::Groceries,
                SpendCategory::Travel,
                SpendCategory::Dining,
                SpendCategory::Shopping,
                SpendCategory::Gas,
            ]
        );
    }

    #[test]
    fn summary_scoped_to_card_filters_transactions() {
        let catalog = RewardsCatalog::standard();
        let card_id = CardId::new("sound-cashback");
        let summary = spending_summary(catalog.transactions(), Some(&card_id));

        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.total_spend_cents, 13_300);
        assert_eq!(summary.total_rewards_earned, 532);
        assert_eq!(summary.card_id, Some(card_id));
    }

    #[test]
    fn empty_transactions_produce_zeroed_summary() {
        let summary = spending_summary(&[], None);
        assert_eq!(summary.transaction_count, 0);
        assert_eq!(summary.average_reward_rate_pct, 0.0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn goal_progress_reports_percentage_and_remainder() {
        let catalog = RewardsCatalog::standard();
        let progress = goal_progress(catalog.goals());

        assert_eq!(progress.len(), 2);
        assert_eq!(progress[0].goal_id, "goal-hawaii");
        assert!((progress[0].progress_pct - 67.5).abs() < 0.01);
        assert_eq!(progress[0].remaining_cents, 32_500);
    }

    #[test]
    fn highlights_sum_loyalty_value_and_flag_expiring_balances() {
        let catalog = RewardsCatalog::standard();
        let highlights = portfolio_highlights(
            catalog.cards(),
            catalog.loyalty_accounts(),
            &AlertThresholds::default(),
        );

        assert_eq!(highlights.total_rewards_value_cents, 175_500);
        // Only Hilton (45 days) sits inside the 120-day window.
        assert_eq!(highlights.expiring_value_cents, 29_000);
        assert!((highlights.utilization_pct - 22.4).abs() < 0.1);
    }
}
