//! Integration specifications for the rewards portfolio, recommendation,
//! and alerting workflow, driven through the public service facade and the
//! HTTP router without reaching into private modules.

mod common {
    use std::sync::{Arc, Mutex};

    use cardgenie::rewards::{
        AlertThresholds, CardId, LoyaltyId, PortfolioRepository, RewardsCatalog, RewardsService,
    };

    #[derive(Default, Clone)]
    pub(super) struct MemoryPortfolio {
        cards: Arc<Mutex<Vec<CardId>>>,
        loyalty: Arc<Mutex<Vec<LoyaltyId>>>,
    }

    impl PortfolioRepository for MemoryPortfolio {
        fn connect_cards(&self, ids: &[CardId]) {
            let mut guard = self.cards.lock().expect("lock");
            for id in ids {
                if !guard.contains(id) {
                    guard.push(id.clone());
                }
            }
        }

        fn disconnect_card(&self, id: &CardId) {
            self.cards
                .lock()
                .expect("lock")
                .retain(|connected| connected != id);
        }

        fn connected_card_ids(&self) -> Vec<CardId> {
            self.cards.lock().expect("lock").clone()
        }

        fn connect_loyalty_accounts(&self, ids: &[LoyaltyId]) {
            let mut guard = self.loyalty.lock().expect("lock");
            for id in ids {
                if !guard.contains(id) {
                    guard.push(id.clone());
                }
            }
        }

        fn disconnect_loyalty_account(&self, id: &LoyaltyId) {
            self.loyalty
                .lock()
                .expect("lock")
                .retain(|connected| connected != id);
        }

        fn connected_loyalty_ids(&self) -> Vec<LoyaltyId> {
            self.loyalty.lock().expect("lock").clone()
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
}

mod recommendations {
    use super::common::build_service;
    use cardgenie::rewards::{CardId, SpendCategory};

    #[test]
    fn every_category_ranks_the_top_pick_at_or_above_alternatives() {
        let (service, _) = build_service();
        for category in SpendCategory::ALL {
            let recommendation = service.recommend(category.label(), 12_345);
            assert_eq!(recommendation.alternatives.len(), 2);
            for alternative in &recommendation.alternatives {
                assert!(recommendation.best.multiplier >= alternative.multiplier);
            }
        }
    }

    #[test]
    fn zero_spend_earns_zero_everywhere() {
        let (service, _) = build_service();
        for category in SpendCategory::ALL {
            assert_eq!(
                service.recommend(category.label(), 0).best.estimated_reward_cents,
                0
            );
        }
    }

    #[test]
    fn dining_scenario_matches_the_documented_fixture() {
        let (service, _) = build_service();
        let recommendation = service.recommend("dining", 10_000);
        assert_eq!(recommendation.best.card_id, CardId::new("freedom-flex"));
        assert_eq!(recommendation.best.estimated_reward_cents, 300);
        assert!(recommendation.best.reasoning.contains("Chase Freedom Flex"));
    }

    #[test]
    fn yoga_resolves_to_the_other_bucket() {
        let (service, _) = build_service();
        let yoga = service.recommend("yoga", 5_000);
        assert_eq!(yoga.category, SpendCategory::Other);
        assert_eq!(yoga.best.card_id, CardId::new("double-cash"));
    }
}

mod alerts {
    use super::common::build_service;
    use cardgenie::rewards::{AlertKind, LoyaltyId, Severity};
    use chrono::{TimeZone, Utc};

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 5, 8, 0, 0)
            .single()
            .expect("valid test timestamp")
    }

    #[test]
    fn feed_is_sorted_by_severity_rank() {
        let (service, _) = build_service();
        service.connect_full_catalog();
        let feed = service.alerts(now());

        let ranks: Vec<u8> = feed
            .alerts
            .iter()
            .map(|alert| alert.severity.rank())
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn hilton_fixture_produces_one_urgent_expiration() {
        let (service, _) = build_service();
        service.connect_loyalty_accounts(&[LoyaltyId::new("hilton")]);
        let feed = service.alerts(now());

        let expirations: Vec<_> = feed
            .alerts
            .iter()
            .filter(|alert| alert.kind == AlertKind::Expiration)
            .collect();
        assert_eq!(expirations.len(), 1);
        assert_eq!(expirations[0].severity, Severity::Urgent);
        assert_eq!(expirations[0].value_at_risk_cents, Some(29_000));
    }
}

mod routing {
    use super::common::build_service;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use cardgenie::rewards::rewards_router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        let (service, _) = build_service();
        service.connect_full_catalog();
        rewards_router(Arc::new(service))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    #[tokio::test]
    async fn post_recommendations_returns_ranked_result() {
        let router = build_router();
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/recommendations")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&json!({ "category": "dining", "amount_cents": 10000 }))
                    .expect("serialize request"),
            ))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = json_body(response).await;
        assert_eq!(
            payload.pointer("/best/card_id").and_then(Value::as_str),
            Some("freedom-flex")
        );
        assert_eq!(
            payload
                .pointer("/best/estimated_reward_cents")
                .and_then(Value::as_u64),
            Some(300)
        );
        assert_eq!(
            payload
                .get("alternatives")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(2)
        );
    }

    #[tokio::test]
    async fn get_portfolio_lists_connected_records() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/portfolio")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(
            payload.get("cards").and_then(Value::as_array).map(Vec::len),
            Some(4)
        );
        assert_eq!(
            payload
                .pointer("/summary/total_rewards_value_cents")
                .and_then(Value::as_u64),
            Some(175_500)
        );
    }

    #[tokio::test]
    async fn delete_card_returns_updated_portfolio() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/portfolio/cards/double-cash")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        let cards = payload
            .get("cards")
            .and_then(Value::as_array)
            .expect("cards array");
        assert_eq!(cards.len(), 3);
        assert!(cards
            .iter()
            .all(|card| card.get("id").and_then(Value::as_str) != Some("double-cash")));
    }

    #[tokio::test]
    async fn post_cards_with_unknown_id_is_silently_dropped() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/portfolio/cards")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({ "ids": ["no-such-card"] }))
                            .expect("serialize request"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(
            payload.get("cards").and_then(Value::as_array).map(Vec::len),
            Some(4)
        );
    }

    #[tokio::test]
    async fn get_alerts_returns_counts_and_ordered_feed() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/alerts")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(
            payload.pointer("/counts/urgent").and_then(Value::as_u64),
            Some(1)
        );
        assert_eq!(
            payload
                .pointer("/alerts/0/severity")
                .and_then(Value::as_str),
            Some("urgent")
        );
    }

    #[tokio::test]
    async fn post_assistant_message_returns_canned_reply() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/assistant/messages")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({ "message": "show me my expiring points" }))
                            .expect("serialize request"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload.get("matched"), Some(&json!(true)));
        assert!(payload
            .get("reply")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .contains("Hilton"));
    }

    #[tokio::test]
    async fn get_card_spending_scopes_the_summary() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/insights/spending/sound-cashback")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(
            payload.get("transaction_count").and_then(Value::as_u64),
            Some(2)
        );
        assert_eq!(
            payload.get("total_spend_cents").and_then(Value::as_u64),
            Some(13_300)
        );
    }
}
