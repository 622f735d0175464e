use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Alert, AlertKind, Card, LoyaltyAccount, Severity};

/// Thresholds governing derived alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Loyalty balances expiring in fewer days than this get an alert.
    pub expiration_window_days: u32,
    /// Below this many days the expiration alert escalates to urgent.
    pub urgent_expiration_days: u32,
    /// Utilization ratio above which a limit warning is emitted.
    pub utilization_warning_ratio: f32,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            expiration_window_days: 120,
            urgent_expiration_days: 60,
            utilization_warning_ratio: 0.30,
        }
    }
}

/// Scan the connected portfolio and produce the ordered alert feed:
/// derived expiration notices, derived utilization warnings, then the seed
/// bonus/recommendation entries, stably sorted urgent before warning before
/// info. Empty input yields an empty feed; the function never fails.
pub fn derive_alerts(
    cards: &[Card],
    loyalty_accounts: &[LoyaltyAccount],
    seed: &[Alert],
    thresholds: &AlertThresholds,
    now: DateTime<Utc>,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for account in loyalty_accounts {
        let Some(days) = account.days_until_expiration else {
            continue;
        };
        if days >= thresholds.expiration_window_days {
            continue;
        }

        let severity = if days < thresholds.urgent_expiration_days {
            Severity::Urgent
        } else {
            Severity::Warning
        };

        alerts.push(Alert {
            id: format!("expiration-{}", account.id.0),
            kind: AlertKind::Expiration,
            severity,
            title: format!("{} {} points expiring soon", account.point_balance, account.program),
            message: format!(
                "Your {} balance (${:.2} value) expires in {} days. Redeem or transfer to \
                 partners to keep it active.",
                account.program,
                account.value_cents as f64 / 100.0,
                days
            ),
            value_at_risk_cents: Some(account.value_cents),
            action: Some("View Options".to_string()),
            created_at: now,
        });
    }

    for card in cards {
        let utilization = card.utilization();
        if utilization <= thresholds.utilization_warning_ratio {
            continue;
        }

        alerts.push(Alert {
            id: format!("utilization-{}", card.id.0),
            kind: AlertKind::Limit,
            severity: Severity::Warning,
            title: format!(
                "Utilization above {:.0}%",
                thresholds.utilization_warning_ratio * 100.0
            ),
            message: format!(
                "{} is at {:.0}% utilization. Consider paying down the balance to maintain \
                 an optimal credit score.",
                card.name,
                utilization * 100.0
            ),
            value_at_risk_cents: None,
            action: Some("View Details".to_string()),
            created_at: now,
        });
    }

    alerts.extend(seed.iter().cloned());

    // Stable: ties keep their insertion order.
    alerts.sort_by_key(|alert| alert.severity.rank());
    alerts
}

/// Per-severity tallies used for feed tab badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub urgent: usize,
    pub warning: usize,
    pub info: usize,
}

pub fn severity_counts(alerts: &[Alert]) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for alert in alerts {
        match alert.severity {
            Severity::Urgent => counts.urgent += 1,
            Severity::Warning => counts.warning += 1,
            Severity::Info => counts.info += 1,
        }
    }
    counts
}
