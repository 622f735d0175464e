use super::super::domain::SpendCategory;

/// One slot in the per-category ranking: which catalog card to surface, the
/// percentage-equivalent multiplier applied to spend, and the pitch fragment
/// appended to the card name when assembling recommendation copy.
pub(crate) struct RateEntry {
    pub(crate) card: &'static str,
    pub(crate) multiplier: f32,
    pub(crate) pitch: &'static str,
}

const fn entry(card: &'static str, multiplier: f32, pitch: &'static str) -> RateEntry {
    RateEntry {
        card,
        multiplier,
        pitch,
    }
}

/// Fixed ranking per category: top pick first, then exactly two
/// alternatives. Rankings are ordered by descending multiplier so the top
/// pick always earns at least as much as either alternative.
pub(crate) fn ranking(category: SpendCategory) -> [RateEntry; 3] {
    match category {
        SpendCategory::Dining => [
            entry(
                "freedom-flex",
                3.0,
                "earns 3% back on dining purchases, from restaurants to food delivery",
            ),
            entry("double-cash", 2.0, "gives 2% flat cashback on all purchases"),
            entry(
                "sound-cashback",
                1.5,
                "provides 1.5% flat cashback with no annual fee",
            ),
        ],
        SpendCategory::Groceries => [
            entry(
                "freedom-flex",
                3.0,
                "earns 3% back at grocery stores, with rotating 5% quarters on top",
            ),
            entry(
                "sound-cashback",
                1.5,
                "provides 1.5% flat cashback with no annual fee",
            ),
            entry("sound-rewards", 1.0, "offers 1% back on all purchases"),
        ],
        SpendCategory::Travel => [
            entry(
                "freedom-flex",
                5.0,
                "earns 5% back on travel and transfers points to United and Hyatt",
            ),
            entry("double-cash", 2.0, "gives 2% flat cashback on all purchases"),
            entry(
                "sound-cashback",
                1.5,
                "provides 1.5% flat cashback with no annual fee",
            ),
        ],
        SpendCategory::Gas
        | SpendCategory::Shopping
        | SpendCategory::Entertainment
        | SpendCategory::Other => [
            entry("double-cash", 2.0, "gives 2% flat cashback on all purchases"),
            entry(
                "sound-cashback",
                1.5,
                "provides 1.5% flat cashback with no annual fee",
            ),
            entry("sound-rewards", 1.0, "offers 1% back on all purchases"),
        ],
    }
}
