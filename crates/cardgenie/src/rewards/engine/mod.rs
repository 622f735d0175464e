mod table;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::RewardsCatalog;
use super::domain::{CardId, SpendCategory};
use table::RateEntry;

/// Stateless selector that resolves a purchase against the static
/// per-category rate table. Same category and amount always produce the
/// same result; there is no randomness and no external state.
pub struct RecommendationEngine {
    catalog: Arc<RewardsCatalog>,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<RewardsCatalog>) -> Self {
        Self { catalog }
    }

    /// Total function: unrecognized categories fall back to the `other`
    /// bucket and every well-typed input yields a recommendation.
    pub fn recommend(&self, raw_category: &str, amount_cents: u32) -> Recommendation {
        let category = SpendCategory::resolve(raw_category);
        let ranking = table::ranking(category);

        let best = self.ranked(&ranking[0], category, amount_cents, true);
        let alternatives = ranking[1..]
            .iter()
            .map(|entry| self.ranked(entry, category, amount_cents, false))
            .collect();

        Recommendation {
            category,
            amount_cents,
            best,
            alternatives,
        }
    }

    fn ranked(
        &self,
        entry: &RateEntry,
        category: SpendCategory,
        amount_cents: u32,
        top_pick: bool,
    ) -> RankedCard {
        // Ranking slots only name cards present in the standard catalog.
        let card = self
            .catalog
            .card(&CardId::new(entry.card))
            .expect("ranking slots reference catalog cards");

        let reasoning = if top_pick {
            format!(
                "{} {}, making it your best option for {} spending.",
                card.name,
                entry.pitch,
                category.spend_phrase()
            )
        } else {
            format!("{} {}.", card.name, entry.pitch)
        };

        RankedCard {
            card_id: card.id.clone(),
            card_name: card.name.clone(),
            rewards_program: card.rewards_program.clone(),
            multiplier: entry.multiplier,
            estimated_reward_cents: estimate_reward_cents(amount_cents, entry.multiplier),
            reasoning,
        }
    }
}

/// Reward estimate in cents: floor(amount x multiplier / 100). The
/// multiplier is applied directly to spend as a percentage equivalent;
/// there is no separate points-to-cash conversion step.
pub fn estimate_reward_cents(amount_cents: u32, multiplier: f32) -> u32 {
    ((amount_cents as f64) * (multiplier as f64) / 100.0).floor() as u32
}

/// One ranked card slot with its estimated payoff and justification copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCard {
    pub card_id: CardId,
    pub card_name: String,
    pub rewards_program: String,
    pub multiplier: f32,
    pub estimated_reward_cents: u32,
    pub reasoning: String,
}

/// Result of a recommendation query: the top pick plus exactly two
/// alternatives from the fixed secondary ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: SpendCategory,
    pub amount_cents: u32,
    pub best: RankedCard,
    pub alternatives: Vec<RankedCard>,
}
