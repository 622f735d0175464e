use serde::Serialize;

/// Reply returned for an assistant message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistantReply {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
    /// False when the fallback reply was used.
    pub matched: bool,
}

struct CannedReply {
    triggers: &'static [&'static str],
    reply: &'static str,
    follow_up: Option<&'static str>,
}

/// Finite mapping from trigger phrases to canned replies. The lowercased
/// message is scanned against each entry in order and the first entry with
/// a matching substring wins; everything else gets the fixed fallback.
/// This is a lookup table, not language understanding.
pub struct AssistantResponder {
    entries: &'static [CannedReply],
}

impl AssistantResponder {
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_REPLIES,
        }
    }

    pub fn reply(&self, message: &str) -> AssistantReply {
        let normalized = message.trim().to_ascii_lowercase();

        for entry in self.entries {
            if entry
                .triggers
                .iter()
                .any(|trigger| normalized.contains(trigger))
            {
                return AssistantReply {
                    reply: entry.reply.to_string(),
                    follow_up: entry.follow_up.map(str::to_string),
                    matched: true,
                };
            }
        }

        AssistantReply {
            reply: FALLBACK_REPLY.to_string(),
            follow_up: Some(FALLBACK_FOLLOW_UP.to_string()),
            matched: false,
        }
    }
}

const FALLBACK_REPLY: &str = "I can help you optimize your credit card rewards. Ask me which \
    card to use for a purchase, about expiring points, or how to maximize travel value.";

const FALLBACK_FOLLOW_UP: &str = "What would you like to know about your rewards?";

// Entry order matters: more specific triggers sit above broader ones so
// "grocery" wins before a generic "tips" match.
static STANDARD_REPLIES: &[CannedReply] = &[
    CannedReply {
        triggers: &["groceries", "grocery"],
        reply: "For groceries, Chase Freedom Flex is your best option at 3% back, with \
            rotating 5% quarters that often cover grocery stores. Sound Cashback is a solid \
            1.5% fallback when a merchant codes outside the bonus category.",
        follow_up: Some("Want to see which card is best for dining purchases?"),
    },
    CannedReply {
        triggers: &["expiring", "expire"],
        reply: "You have rewards expiring soon: 58,000 Hilton Honors points worth about $290 \
            expire in 45 days. Book a stay or transfer the balance to keep them active.",
        follow_up: Some("Want ideas for using your Hilton points before they expire?"),
    },
    CannedReply {
        triggers: &["travel"],
        reply: "For travel you are well positioned: 45,000 United miles (about $675) plus \
            32,000 World of Hyatt points (about $640). Put new travel spend on Chase Freedom \
            Flex at 5% back and redeem flights through United and hotels through Hyatt.",
        follow_up: Some("Want help planning a trip with your points?"),
    },
    CannedReply {
        triggers: &["cashback", "cash back"],
        reply: "Your best flat-rate card is Citi Double Cash at 2% on every purchase. Use it \
            for anything outside a bonus category; Sound Cashback covers the rest at 1.5% \
            with no annual fee.",
        follow_up: Some("Want tips on splitting spend across your cards?"),
    },
    CannedReply {
        triggers: &["dining", "restaurant"],
        reply: "For dining, Chase Freedom Flex earns 3% back at restaurants, cafes, and food \
            delivery, the highest rate in your wallet for that category.",
        follow_up: None,
    },
    CannedReply {
        triggers: &["hilton", "hotel"],
        reply: "Your 58,000 Hilton Honors points are worth roughly $290 and expire in 45 \
            days. Mid-tier properties around 12,000 to 15,000 points per night stretch the \
            balance to three or four free nights.",
        follow_up: None,
    },
    CannedReply {
        triggers: &["tips", "help", "optimize"],
        reply: "Quick wins: use Chase Freedom Flex for dining and groceries (3%), Citi \
            Double Cash everywhere else (2%), and burn the Hilton balance within 45 days so \
            nothing expires.",
        follow_up: Some("Want a breakdown of your monthly rewards potential?"),
    },
    CannedReply {
        triggers: &["breakdown", "potential"],
        reply: "Monthly picture from recent spending: about $736 across five purchases \
            earning roughly 2,200 points. Shifting grocery and dining spend onto Chase \
            Freedom Flex lifts the blended rate toward 3%.",
        follow_up: None,
    },
];
