//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use quote_intake::config::Config;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> quote_intake::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.routing.fallback, "quotes@splitrocknewyork.com");
        assert_eq!(config.email.from, "onboarding@resend.dev");
        assert_eq!(config.rate_limit.requests_per_minute, 3);
        assert_eq!(config.intake.honeypot_field, "_gotcha");
        assert_eq!(config.intake.business_name, "SplitRock New York");
        assert_eq!(config.server.port, 8000);
        assert!(!config.email.has_api_key());
    }

    #[test]
    fn test_full_environment() {
        let config = load(&[
            ("RESEND_API_KEY", "re_abc"),
            ("QUOTE_TO_EMAIL_LANDSCAPING", "land@example.com"),
            ("QUOTE_TO_EMAIL_CONSTRUCTION", "build@example.com"),
            ("QUOTE_FROM_EMAIL", "Quotes <quotes@example.com>"),
            ("QUOTE_RATE_LIMIT_PER_MIN", "10"),
            ("QUOTE_CORS_ORIGINS", "https://a.example, https://b.example"),
        ])
        .unwrap();

        assert_eq!(config.email.api_key.as_deref(), Some("re_abc"));
        assert_eq!(config.rate_limit.requests_per_minute, 10);
        assert_eq!(config.email.from, "Quotes <quotes@example.com>");
        assert_eq!(
            config.server.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.warn_incomplete(), 0);
    }

    #[test]
    fn test_missing_credentials_only_warn() {
        let config = load(&[]).unwrap();
        assert_eq!(config.warn_incomplete(), 2);
    }

    #[test]
    fn test_unparseable_number_is_error() {
        let err = load(&[("QUOTE_RATE_LIMIT_PER_MIN", "three")]).unwrap_err();
        assert!(err.to_string().contains("QUOTE_RATE_LIMIT_PER_MIN"));
    }

    #[test]
    fn test_zero_limit_is_error() {
        assert!(load(&[("QUOTE_RATE_LIMIT_PER_MIN", "0")]).is_err());
    }

    #[test]
    fn test_bad_api_base_is_error() {
        assert!(load(&[("QUOTE_EMAIL_API_BASE", "ftp://example.com")]).is_err());
    }
}
