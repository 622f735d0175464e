use cardgenie::rewards::{CardId, LoyaltyId, PortfolioRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory connected-id store. Connection order is preserved; duplicate
/// connects and absent disconnects are no-ops per the repository contract.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPortfolio {
    cards: Arc<Mutex<Vec<CardId>>>,
    loyalty: Arc<Mutex<Vec<LoyaltyId>>>,
}

impl PortfolioRepository for InMemoryPortfolio {
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

/// Parses a CLI dollar amount ("84.50", "$120", "9") into cents.
pub(crate) fn parse_amount_cents(raw: &str) -> Result<u32, String> {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    if cleaned.is_empty() {
        return Err(format!("'{raw}' is not a dollar amount"));
    }

    let cents = match cleaned.split_once('.') {
        Some((dollars, fraction)) => {
            let dollars: u32 = dollars
                .parse()
                .map_err(|_| format!("'{raw}' is not a dollar amount"))?;
            let fraction: u32 = match fraction.len() {
                1 => fraction
                    .parse::<u32>()
                    .map(|tenths| tenths * 10)
                    .map_err(|_| format!("'{raw}' is not a dollar amount"))?,
                2 => fraction
                    .parse()
                    .map_err(|_| format!("'{raw}' is not a dollar amount"))?,
                _ => return Err(format!("'{raw}' has too many decimal places")),
            };
            dollars
                .checked_mul(100)
                .and_then(|total| total.checked_add(fraction))
        }
        None => cleaned
            .parse::<u32>()
            .ok()
            .and_then(|dollars| dollars.checked_mul(100)),
    };

    cents.ok_or_else(|| format!("'{raw}' is out of range"))
}

pub(crate) fn format_cents(cents: u32) -> String {
    format!("${:.2}", cents as f64 / 100.0)
}
