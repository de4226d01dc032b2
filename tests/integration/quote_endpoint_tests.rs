//! Quote endpoint integration tests
//!
//! Each test builds the full actix-web app with a recording email sender
//! and a hand-driven clock for the rate limiter.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{CONSTRUCTION, FALLBACK, LANDSCAPING};
    use crate::common::{QuotePayloadFactory, RecordingSender, TestApp, test_config};
    use actix_web::http::{StatusCode, header};
    use actix_web::{test, web};
    use quote_intake::core::notify::{Delivery, EmailError};
    use quote_intake::server::HttpServer;
    use serde_json::{Value, json};
    use std::time::Duration;

    fn post(payload: &Value, ip: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/quote")
            .insert_header(("X-Forwarded-For", ip.to_string()))
            .set_json(payload)
    }

    macro_rules! app {
        ($test_app:expr) => {
            test::init_service(HttpServer::create_app(web::Data::new(
                $test_app.state.clone(),
            )))
            .await
        };
    }

    // ==================== Success path ====================

    #[actix_web::test]
    async fn test_valid_submission_sends_both_emails() {
        let ctx = TestApp::new(test_config(&[]));
        let app = app!(ctx);

        let resp = test::call_service(&app, post(&QuotePayloadFactory::valid(), "203.0.113.1").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "ok": true }));

        let sent = ctx.sender.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, vec![LANDSCAPING.to_string()]);
        assert_eq!(sent[0].subject, "New Quote Request: Landscaping Services");
        assert_eq!(sent[0].reply_to.as_deref(), Some("jane.doe@example.com"));
        assert!(sent[0].text.contains("🌐 Client IP:  203.0.113.1"));
        assert_eq!(sent[1].to, vec!["jane.doe@example.com".to_string()]);
        assert_eq!(sent[1].subject, "Quote Request Received - SplitRock New York");
    }

    #[actix_web::test]
    async fn test_identical_submissions_are_not_deduplicated() {
        let ctx = TestApp::new(test_config(&[]));
        let app = app!(ctx);

        for _ in 0..2 {
            let resp =
                test::call_service(&app, post(&QuotePayloadFactory::valid(), "203.0.113.2").to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
        assert_eq!(ctx.sender.sent_count(), 4);
    }

    // ==================== Bot filter ====================

    #[actix_web::test]
    async fn test_honeypot_is_absorbed_silently() {
        let ctx = TestApp::new(test_config(&[("QUOTE_RATE_LIMIT_PER_MIN", "1")]));
        let app = app!(ctx);

        let bot = QuotePayloadFactory::with("_gotcha", json!("http://spam.example"));
        for _ in 0..3 {
            let resp = test::call_service(&app, post(&bot, "198.51.100.9").to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "ok": true }));
        }
        assert_eq!(ctx.sender.sent_count(), 0);

        // No quota was consumed, so a real submission still goes through.
        let resp = test::call_service(&app, post(&QuotePayloadFactory::valid(), "198.51.100.9").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(ctx.sender.sent_count(), 2);
    }

    #[actix_web::test]
    async fn test_honeypot_alias_and_custom_field() {
        let ctx = TestApp::new(test_config(&[("QUOTE_HONEYPOT_FIELD", "website")]));
        let app = app!(ctx);

        for bot in [
            QuotePayloadFactory::with("website", json!("x")),
            QuotePayloadFactory::with("honeypot", json!(true)),
            json!({ "honeypot": "x" }),
        ] {
            let resp = test::call_service(&app, post(&bot, "198.51.100.10").to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
        assert_eq!(ctx.sender.sent_count(), 0);
    }

    #[actix_web::test]
    async fn test_empty_honeypot_is_not_a_bot() {
        let ctx = TestApp::new(test_config(&[]));
        let app = app!(ctx);

        let payload = QuotePayloadFactory::with("_gotcha", json!(""));
        let resp = test::call_service(&app, post(&payload, "198.51.100.11").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(ctx.sender.sent_count(), 2);
    }

    // ==================== Validation ====================

    #[actix_web::test]
    async fn test_validation_failure_names_fields() {
        let ctx = TestApp::new(test_config(&[]));
        let app = app!(ctx);

        let mut payload = QuotePayloadFactory::with_services(false, false);
        payload["email"] = json!("nope");
        let resp = test::call_service(&app, post(&payload, "198.51.100.12").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "validation");
        assert_eq!(
            body["fieldErrors"]["email"],
            json!(["Please enter a valid email address"])
        );
        assert_eq!(
            body["fieldErrors"]["landscaping"],
            json!(["Please select at least one service"])
        );
        assert_eq!(ctx.sender.sent_count(), 0);
    }

    #[actix_web::test]
    async fn test_non_object_body_is_validation_error() {
        let ctx = TestApp::new(test_config(&[]));
        let app = app!(ctx);

        let resp = test::call_service(&app, post(&json!("hello"), "198.51.100.13").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["fieldErrors"][""].is_array());
    }

    // ==================== Rate limiting ====================

    #[actix_web::test]
    async fn test_rate_limit_and_recovery() {
        let ctx = TestApp::new(test_config(&[("QUOTE_RATE_LIMIT_PER_MIN", "2")]));
        let app = app!(ctx);
        let payload = QuotePayloadFactory::valid();

        for _ in 0..2 {
            let resp = test::call_service(&app, post(&payload, "192.0.2.1").to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
            ctx.clock.advance(Duration::from_secs(10));
        }

        let resp = test::call_service(&app, post(&payload, "192.0.2.1").to_request()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(resp.headers().get(header::RETRY_AFTER).unwrap(), "40");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "ok": false, "error": "rate_limited", "retryAfterSeconds": 40 })
        );

        // Other clients are unaffected.
        let resp = test::call_service(&app, post(&payload, "192.0.2.2").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        ctx.clock.advance(Duration::from_secs(40));
        let resp = test::call_service(&app, post(&payload, "192.0.2.1").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_invalid_submissions_do_not_consume_quota() {
        let ctx = TestApp::new(test_config(&[("QUOTE_RATE_LIMIT_PER_MIN", "1")]));
        let app = app!(ctx);

        let invalid = QuotePayloadFactory::with("details", json!("short"));
        for _ in 0..3 {
            let resp = test::call_service(&app, post(&invalid, "192.0.2.3").to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        let resp = test::call_service(&app, post(&QuotePayloadFactory::valid(), "192.0.2.3").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_client_without_proxy_headers_uses_loopback() {
        let ctx = TestApp::new(test_config(&[("QUOTE_RATE_LIMIT_PER_MIN", "1")]));
        let app = app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/quote")
            .set_json(QuotePayloadFactory::valid())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        assert_eq!(
            ctx.state
                .pipeline
                .rate_limiter()
                .stats("127.0.0.1")
                .await
                .request_count,
            1
        );
    }

    // ==================== Routing ====================

    #[actix_web::test]
    async fn test_both_services_route_to_both_addresses() {
        let ctx = TestApp::new(test_config(&[]));
        let app = app!(ctx);

        let payload = QuotePayloadFactory::with_services(true, true);
        test::call_service(&app, post(&payload, "192.0.2.20").to_request()).await;

        let sent = ctx.sender.sent();
        assert_eq!(
            sent[0].to,
            vec![LANDSCAPING.to_string(), CONSTRUCTION.to_string()]
        );
        assert_eq!(
            sent[0].subject,
            "New Quote Request: Landscaping Services & Outdoor Construction"
        );
    }

    #[actix_web::test]
    async fn test_unconfigured_services_use_fallback() {
        let ctx = TestApp::new(test_config(&[
            ("QUOTE_TO_EMAIL_LANDSCAPING", ""),
            ("QUOTE_TO_EMAIL_CONSTRUCTION", ""),
        ]));
        let app = app!(ctx);

        test::call_service(&app, post(&QuotePayloadFactory::valid(), "192.0.2.21").to_request()).await;

        let sent = ctx.sender.sent();
        assert_eq!(sent[0].to, vec![FALLBACK.to_string()]);
        assert!(sent[1].text.contains(FALLBACK));
    }

    #[actix_web::test]
    async fn test_dev_override_redirects_everything() {
        let ctx = TestApp::new(test_config(&[("QUOTE_DEV_EMAIL", "dev@example.com")]));
        let app = app!(ctx);

        let payload = QuotePayloadFactory::with_services(true, true);
        test::call_service(&app, post(&payload, "192.0.2.22").to_request()).await;

        let sent = ctx.sender.sent();
        assert_eq!(sent[0].to, vec!["dev@example.com".to_string()]);
        assert!(sent[0].subject.starts_with("[DEV] "));
        assert!(sent[0].text.contains(LANDSCAPING));
        assert!(sent[0].text.contains(CONSTRUCTION));
        assert!(sent[0].text.starts_with("⚠️ DEVELOPMENT MODE"));
    }

    #[actix_web::test]
    async fn test_reply_to_override() {
        let ctx = TestApp::new(test_config(&[("QUOTE_REPLY_TO", "office@example.com")]));
        let app = app!(ctx);

        test::call_service(&app, post(&QuotePayloadFactory::valid(), "192.0.2.23").to_request()).await;
        assert_eq!(
            ctx.sender.sent()[0].reply_to.as_deref(),
            Some("office@example.com")
        );
    }

    // ==================== Dispatch failures ====================

    #[actix_web::test]
    async fn test_internal_rejection_fails_without_confirmation() {
        let sender = RecordingSender::with_script([Err(EmailError::rejected(
            Some(403),
            "validation_error",
            "You can only send testing emails to your own address",
        ))]);
        let ctx = TestApp::with_sender(test_config(&[]), sender);
        let app = app!(ctx);

        let resp = test::call_service(&app, post(&QuotePayloadFactory::valid(), "192.0.2.30").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "email_send_failed");
        assert!(body["message"].is_string());
        assert!(!body.to_string().contains("own address"));

        assert_eq!(ctx.sender.sent_count(), 1);
    }

    #[actix_web::test]
    async fn test_confirmation_rejection_is_still_success() {
        let sender = RecordingSender::with_script([
            Ok(Delivery::default()),
            Err(EmailError::rejected(Some(422), "validation_error", "bad to")),
        ]);
        let ctx = TestApp::with_sender(test_config(&[]), sender);
        let app = app!(ctx);

        let resp = test::call_service(&app, post(&QuotePayloadFactory::valid(), "192.0.2.31").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(ctx.sender.sent_count(), 2);
    }

    #[actix_web::test]
    async fn test_transport_failure_is_opaque_server_error() {
        let sender = RecordingSender::with_script([Err(EmailError::transport("connection refused"))]);
        let ctx = TestApp::with_sender(test_config(&[]), sender);
        let app = app!(ctx);

        let resp = test::call_service(&app, post(&QuotePayloadFactory::valid(), "192.0.2.32").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "ok": false, "error": "server_error" }));
    }

    // ==================== Method handling ====================

    #[actix_web::test]
    async fn test_other_methods_are_rejected() {
        let ctx = TestApp::new(test_config(&[]));
        let app = app!(ctx);

        for req in [
            test::TestRequest::get().uri("/api/quote").to_request(),
            test::TestRequest::put().uri("/api/quote").to_request(),
            test::TestRequest::delete().uri("/api/quote").to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(resp.headers().get(header::ALLOW).unwrap(), "POST");
        }
        assert_eq!(ctx.sender.sent_count(), 0);
    }
}
