use std::sync::{Arc, Mutex};

use crate::rewards::alerts::AlertThresholds;
use crate::rewards::catalog::RewardsCatalog;
use crate::rewards::domain::{CardId, LoyaltyId};
use crate::rewards::portfolio::PortfolioRepository;
use crate::rewards::service::RewardsService;

/// In-memory store used by the unit suites, mirroring the one the API
/// service wires up in production.
#[derive(Default, Clone)]
pub(super) struct MemoryPortfolio {
    cards: Arc<Mutex<Vec<CardId>>>,
    loyalty: Arc<Mutex<Vec<LoyaltyId>>>,
}

impl PortfolioRepository for MemoryPortfolio {
    fn connect_cards(&self, ids: &[CardId]) {
        let mut guard = self.cards.lock().expect("portfolio mutex poisoned");
        for id in ids {
            if !guard.contains(id) {
                guard.push(id.clone());
            }
        }
    }

    fn disconnect_card(&self, id: &CardId) {
        let mut guard = self.cards.lock().expect("portfolio mutex poisoned");
        guard.retain(|connected| connected != id);
    }

    fn connected_card_ids(&self) -> Vec<CardId> {
        self.cards.lock().expect("portfolio mutex poisoned").clone()
    }

    fn connect_loyalty_accounts(&self, ids: &[LoyaltyId]) {
        let mut guard = self.loyalty.lock().expect("portfolio mutex poisoned");
        for id in ids {
            if !guard.contains(id) {
                guard.push(id.clone());
            }
        }
    }

    fn disconnect_loyalty_account(&self, id: &LoyaltyId) {
        let mut guard = self.loyalty.lock().expect("portfolio mutex poisoned");
        guard.retain(|connected| connected != id);
    }

    fn connected_loyalty_ids(&self) -> Vec<LoyaltyId> {
        self.loyalty
            .lock()
            .expect("portfolio mutex poisoned")
            .clone()
    }
}

pub(super) fn build_service() -> (RewardsService<MemoryPortfolio>, Arc<MemoryPortfolio>) {
    let portfolio = Arc::new(MemoryPortfolio::default());
    let service = RewardsService::new(
        Arc::new(RewardsCatalog::standard()),
        portfolio.clone(),
        AlertThresholds::default(),
    );
    (service, portfolio)
}

pub(super) fn card_ids(ids: &[&str]) -> Vec<CardId> {
    ids.iter().map(|id| CardId::new(*id)).collect()
}

pub(super) fn loyalty_ids(ids: &[&str]) -> Vec<LoyaltyId> {
    ids.iter().map(|id| LoyaltyId::new(*id)).collect()
}
