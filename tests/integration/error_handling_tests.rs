//! Error handling integration tests
//!
//! Every unexpected failure must reach clients as the same opaque body.

#[cfg(test)]
mod tests {
    use crate::common::{QuotePayloadFactory, RecordingSender, TestApp, test_config};
    use actix_web::body::to_bytes;
    use actix_web::http::{StatusCode, header};
    use actix_web::{ResponseError, test, web};
    use quote_intake::core::notify::EmailError;
    use quote_intake::server::HttpServer;
    use quote_intake::utils::error::QuoteError;
    use serde_json::{Value, json};

    async fn body_of(err: QuoteError) -> (u16, Value) {
        let response = err.error_response();
        let status = response.status().as_u16();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_all_variants_are_opaque() {
        let errors = vec![
            QuoteError::config("RESEND_API_KEY missing"),
            QuoteError::storage("disk full at /var/secret"),
            QuoteError::internal("boom"),
            QuoteError::from(EmailError::rejected(Some(401), "missing_api_key", "key re_123")),
            QuoteError::from(std::io::Error::other("io")),
        ];

        for err in errors {
            let (status, body) = body_of(err).await;
            assert_eq!(status, 500);
            assert_eq!(body, json!({ "ok": false, "error": "server_error" }));
        }
    }

    #[actix_web::test]
    async fn test_malformed_json_never_echoes_parser_details() {
        let ctx = TestApp::new(test_config(&[]));
        let app = test::init_service(HttpServer::create_app(web::Data::new(ctx.state.clone()))).await;

        let req = test::TestRequest::post()
            .uri("/api/quote")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"name": "Jane", "secret-token-xyz""#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = test::read_body(resp).await;
        assert!(!String::from_utf8_lossy(&bytes).contains("secret-token-xyz"));
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "ok": false, "error": "server_error" }));
        assert_eq!(ctx.sender.sent_count(), 0);
    }

    #[actix_web::test]
    async fn test_transport_failure_hides_provider_message() {
        let sender =
            RecordingSender::with_script([Err(EmailError::transport("tls handshake with re_123"))]);
        let ctx = TestApp::with_sender(test_config(&[]), sender);
        let app = test::init_service(HttpServer::create_app(web::Data::new(ctx.state.clone()))).await;

        let req = test::TestRequest::post()
            .uri("/api/quote")
            .set_json(QuotePayloadFactory::valid())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = test::read_body(resp).await;
        assert!(!String::from_utf8_lossy(&bytes).contains("re_123"));
    }
}
