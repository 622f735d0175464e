use super::domain::{CardId, LoyaltyId};

/// Storage seam for the connected-identifier sets so the service can be
/// exercised in isolation. Implementations keep connection order.
///
/// Every operation is total: connecting an already-connected id is a no-op,
/// disconnecting an absent id is a no-op, and listing never fails. Unknown
/// ids may be stored; they are dropped when resolved against the catalog.
pub trait PortfolioRepository: Send + Sync {
    fn connect_cards(&self, ids: &[CardId]);
    fn disconnect_card(&self, id: &CardId);
    fn connected_card_ids(&self) -> Vec<CardId>;

    fn connect_loyalty_accounts(&self, ids: &[LoyaltyId]);
    fn disconnect_loyalty_account(&self, id: &LoyaltyId);
    fn connected_loyalty_ids(&self) -> Vec<LoyaltyId>;
}
