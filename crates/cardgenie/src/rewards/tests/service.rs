use super::common::{build_service, card_ids};
use crate::rewards::domain::{AlertKind, CardId, Severity, SpendCategory};
use chrono::{TimeZone, Utc};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 5, 8, 0, 0)
        .single()
        .expect("valid test timestamp")
}

#[test]
fn recommendation_is_deterministic_for_same_input() {
    let (service, _) = build_service();
    let first = service.recommend("travel", 45_890);
    let second = service.recommend("travel", 45_890);
    assert_eq!(first, second);
    assert_eq!(first.best.card_id, CardId::new("freedom-flex"));
    assert_eq!(first.best.estimated_reward_cents, 2_294);
}

#[test]
fn alert_feed_covers_the_full_connected_catalog() {
    let (service, _) = build_service();
    service.connect_full_catalog();
    let feed = service.alerts(now());

    // Hilton at 45 days is the only derived alert for the standard catalog;
    // the two seed notices fill out the feed.
    assert_eq!(feed.alerts.len(), 3);
    assert_eq!(feed.counts.urgent, 1);
    assert_eq!(feed.counts.warning, 1);
    assert_eq!(feed.counts.info, 1);
    assert_eq!(feed.alerts[0].kind, AlertKind::Expiration);
    assert_eq!(feed.alerts[0].severity, Severity::Urgent);
    assert_eq!(feed.alerts[0].value_at_risk_cents, Some(29_000));
}

#[test]
fn alert_feed_shrinks_with_the_connected_set() {
    let (service, _) = build_service();
    service.connect_cards(&card_ids(&["sound-rewards"]));
    let feed = service.alerts(now());

    // No loyalty connected: only the seed notices remain.
    assert_eq!(feed.counts.urgent, 0);
    assert_eq!(feed.alerts.len(), 2);
}

#[test]
fn empty_portfolio_still_reports_seed_notices_and_zeroed_summary() {
    let (service, _) = build_service();
    let view = service.portfolio_view();
    assert!(view.cards.is_empty());
    assert_eq!(view.summary.total_rewards_value_cents, 0);
    assert_eq!(view.summary.utilization_pct, 0.0);

    let feed = service.alerts(now());
    assert_eq!(feed.alerts.len(), 2);
}

#[test]
fn portfolio_summary_matches_connected_catalog() {
    let (service, _) = build_service();
    service.connect_full_catalog();
    let view = service.portfolio_view();

    assert_eq!(view.cards.len(), 4);
    assert_eq!(view.loyalty_accounts.len(), 4);
    assert_eq!(view.summary.total_rewards_value_cents, 175_500);
    assert_eq!(view.summary.expiring_value_cents, 29_000);
}

#[test]
fn spending_and_goals_are_read_only_views_over_the_catalog() {
    let (service, _) = build_service();
    let summary = service.spending(None);
    assert_eq!(summary.transaction_count, 5);
    assert_eq!(
        summary.by_category[0].category,
        SpendCategory::Groceries
    );

    let goals = service.goals();
    assert_eq!(goals.len(), 2);
}

#[test]
fn assistant_reply_routes_through_the_lookup_table() {
    let (service, _) = build_service();
    let reply = service.assistant_reply("how do I maximize travel rewards?");
    assert!(reply.matched);
    assert!(reply.reply.contains("United"));
}
