//! CurrencyService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use converter_types::{
        AmountInput, ConversionRequest, ExchangeError, ExchangeRateProvider, PairConversion,
        ServiceError,
    };

    use crate::CurrencyService;
    use crate::service::{failure_summary, round_to_cents};

    /// In-memory provider returning a canned outcome and recording calls.
    pub struct MockProvider {
        outcome: Result<PairConversion, ExchangeError>,
        calls: Mutex<Vec<(String, String, f64)>>,
    }

    impl MockProvider {
        pub fn returning(pair: PairConversion) -> Self {
            Self {
                outcome: Ok(pair),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(err: ExchangeError) -> Self {
            Self {
                outcome: Err(err),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<(String, String, f64)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ExchangeRateProvider for MockProvider {
        async fn pair_conversion(
            &self,
            from: &str,
            to: &str,
            amount: f64,
        ) -> Result<PairConversion, ExchangeError> {
            self.calls
                .lock()
                .unwrap()
                .push((from.to_string(), to.to_string(), amount));
            self.outcome.clone()
        }
    }

    pub fn usd_eur_pair() -> PairConversion {
        PairConversion {
            result: "success".into(),
            base_code: Some("USD".into()),
            target_code: Some("EUR".into()),
            conversion_rate: Some(0.9123),
            conversion_result: Some(91.23456),
            time_last_update_utc: Some("T1".into()),
            time_next_update_utc: Some("T2".into()),
            error_type: None,
        }
    }

    fn provider_error(error_type: &str) -> ExchangeError {
        ExchangeError::Provider {
            status: 400,
            error_type: error_type.into(),
        }
    }

    async fn convert_with_error(error_type: &str) -> Result<(), ServiceError> {
        let service = CurrencyService::new(MockProvider::failing(provider_error(error_type)));
        service
            .convert(ConversionRequest::new("USD", "EUR", 100.0))
            .await
            .map(|_| ())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Success
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_convert_success() {
        let service = CurrencyService::new(MockProvider::returning(usd_eur_pair()));

        let result = service
            .convert(ConversionRequest::new("usd", "eur", 100.0))
            .await
            .unwrap();

        assert_eq!(result.from_currency, "USD");
        assert_eq!(result.to_currency, "EUR");
        assert_eq!(result.amount, 100.0);
        assert_eq!(result.converted_amount, 91.23);
        assert_eq!(result.conversion_rate, 0.9123);
        assert_eq!(result.last_updated.as_deref(), Some("T1"));
        assert_eq!(result.next_update.as_deref(), Some("T2"));
    }

    #[tokio::test]
    async fn test_convert_uppercases_codes_for_provider() {
        let service = CurrencyService::new(MockProvider::returning(usd_eur_pair()));

        service
            .convert(ConversionRequest::new("usd", "eUr", "100"))
            .await
            .unwrap();

        assert_eq!(
            service.provider().calls(),
            vec![("USD".to_string(), "EUR".to_string(), 100.0)]
        );
    }

    #[tokio::test]
    async fn test_convert_string_amount_is_parsed() {
        let service = CurrencyService::new(MockProvider::returning(usd_eur_pair()));

        let result = service
            .convert(ConversionRequest::new("USD", "EUR", "12.5"))
            .await
            .unwrap();

        // The requested amount is echoed, not the provider's.
        assert_eq!(result.amount, 12.5);
    }

    #[tokio::test]
    async fn test_convert_result_codes_come_from_provider() {
        let mut pair = usd_eur_pair();
        pair.base_code = Some("GBP".into());
        pair.target_code = Some("INR".into());
        let service = CurrencyService::new(MockProvider::returning(pair));

        let result = service
            .convert(ConversionRequest::new("USD", "EUR", 1.0))
            .await
            .unwrap();

        assert_eq!(result.from_currency, "GBP");
        assert_eq!(result.to_currency, "INR");
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(91.23456), 91.23);
        assert_eq!(round_to_cents(10.0), 10.0);
        assert_eq!(round_to_cents(0.004), 0.0);
        assert_eq!(round_to_cents(-3.14159), -3.14);
    }

    #[test]
    fn test_round_to_cents_uses_stored_value() {
        // These literals are stored slightly below the visible half.
        assert_eq!(round_to_cents(91.235), 91.23);
        assert_eq!(round_to_cents(2.675), 2.67);
        assert_eq!(round_to_cents(1.115), 1.11);
    }

    #[test]
    fn test_round_to_cents_exact_halves_go_up() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(10.625), 10.63);
        assert_eq!(round_to_cents(-0.125), -0.13);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_invalid_input_never_calls_provider() {
        let cases = vec![
            ConversionRequest {
                from_currency: None,
                ..ConversionRequest::new("USD", "EUR", 100.0)
            },
            ConversionRequest {
                from_currency: Some(String::new()),
                ..ConversionRequest::new("USD", "EUR", 100.0)
            },
            ConversionRequest {
                to_currency: None,
                ..ConversionRequest::new("USD", "EUR", 100.0)
            },
            ConversionRequest {
                to_currency: Some(String::new()),
                ..ConversionRequest::new("USD", "EUR", 100.0)
            },
            ConversionRequest {
                amount: None,
                ..ConversionRequest::new("USD", "EUR", 100.0)
            },
            ConversionRequest::new("USD", "EUR", 0.0),
            ConversionRequest::new("USD", "EUR", ""),
            ConversionRequest::new("USD", "EUR", "abc"),
            ConversionRequest {
                amount: Some(AmountInput::Other(serde_json::Value::Bool(true))),
                ..ConversionRequest::new("USD", "EUR", 100.0)
            },
        ];

        for req in cases {
            let service = CurrencyService::new(MockProvider::returning(usd_eur_pair()));
            let result = service.convert(req.clone()).await;

            assert!(
                matches!(result, Err(ServiceError::BadRequest(_))),
                "expected BadRequest for {:?}",
                req
            );
            assert!(service.provider().calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_zero_string_amount_is_forwarded() {
        let mut pair = usd_eur_pair();
        pair.conversion_result = Some(0.0);
        let service = CurrencyService::new(MockProvider::returning(pair));

        let result = service
            .convert(ConversionRequest::new("USD", "EUR", "0"))
            .await
            .unwrap();

        assert_eq!(result.amount, 0.0);
        assert_eq!(service.provider().calls().len(), 1);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Provider Failures
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_non_success_result_is_not_found() {
        let pair = PairConversion {
            result: "error".into(),
            error_type: Some("unsupported-code".into()),
            ..Default::default()
        };
        let service = CurrencyService::new(MockProvider::returning(pair));

        let result = service
            .convert(ConversionRequest::new("USD", "XXX", 1.0))
            .await;

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_incomplete_success_payload_is_internal() {
        let mut pair = usd_eur_pair();
        pair.conversion_result = None;
        let service = CurrencyService::new(MockProvider::returning(pair));

        let result = service
            .convert(ConversionRequest::new("USD", "EUR", 1.0))
            .await;

        assert_eq!(
            result,
            Err(ServiceError::InternalServer(
                "Currency conversion failed. Please try again.".into()
            ))
        );
    }

    #[tokio::test]
    async fn test_unsupported_code_is_not_found() {
        assert_eq!(
            convert_with_error("unsupported-code").await,
            Err(ServiceError::NotFound(
                "Unsupported currency code provided.".into()
            ))
        );
    }

    #[tokio::test]
    async fn test_malformed_request_is_bad_request() {
        assert!(matches!(
            convert_with_error("malformed-request").await,
            Err(ServiceError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_key_and_account_errors_are_unauthorized() {
        let invalid_key = convert_with_error("invalid-key").await.unwrap_err();
        assert!(matches!(invalid_key, ServiceError::Unauthorized(_)));
        assert!(invalid_key.message().contains("Invalid API key"));

        assert!(matches!(
            convert_with_error("inactive-account").await,
            Err(ServiceError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_quota_and_unknown_errors_are_internal() {
        assert!(matches!(
            convert_with_error("quota-reached").await,
            Err(ServiceError::InternalServer(_))
        ));
        assert_eq!(
            convert_with_error("base-code-missing").await,
            Err(ServiceError::InternalServer(
                "Unknown error occurred while processing the request.".into()
            ))
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_generic_internal() {
        let service = CurrencyService::new(MockProvider::failing(ExchangeError::Transport(
            "connection refused".into(),
        )));

        let err = service
            .convert(ConversionRequest::new("USD", "EUR", 1.0))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::InternalServer("Currency conversion failed. Please try again.".into())
        );
        assert!(!err.message().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_status_without_error_type_is_generic_internal() {
        let service = CurrencyService::new(MockProvider::failing(ExchangeError::Status {
            status: 503,
            body: "unavailable".into(),
        }));

        let result = service
            .convert(ConversionRequest::new("USD", "EUR", 1.0))
            .await;

        assert!(matches!(result, Err(ServiceError::InternalServer(_))));
    }

    #[tokio::test]
    async fn test_invalid_payload_is_generic_internal() {
        let service = CurrencyService::new(MockProvider::failing(ExchangeError::InvalidPayload(
            "expected value at line 1 column 1".into(),
        )));

        let result = service
            .convert(ConversionRequest::new("USD", "EUR", 1.0))
            .await;

        assert_eq!(
            result,
            Err(ServiceError::InternalServer(
                "Currency conversion failed. Please try again.".into()
            ))
        );
    }

    #[test]
    fn test_failure_summary_truncates_large_body() {
        let err = ExchangeError::Status {
            status: 500,
            body: "é".repeat(5_000),
        };

        let summary = failure_summary(&err);

        assert!(summary.starts_with("Provider returned status 500: "));
        assert!(summary.ends_with("... (10000 bytes)"));
        assert!(summary.len() < 400);
    }

    #[test]
    fn test_failure_summary_keeps_short_body() {
        let err = ExchangeError::Status {
            status: 502,
            body: "bad gateway".into(),
        };

        assert_eq!(
            failure_summary(&err),
            "Provider returned status 502: bad gateway"
        );
    }
}
