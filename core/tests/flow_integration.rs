//! Integration tests running configuration resolution and the verification flow together

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;

    use pl_core::domain::entities::Stage;
    use pl_core::errors::RemoteError;
    use pl_core::services::resolver::{ConfigResolver, LandingPageClient, ResolveDomainResponse};
    use pl_core::services::verification::{
        PinApiResponse, PinGenerationRequest, PinServiceTrait, PinVerificationRequest,
        SubmitOutcome, VerificationFlow, VerificationFlowConfig, VerifyOutcome,
    };
    use pl_shared::LandingConfig;

    // Landing page lookup answering from a fixed body
    struct FixedLandingPageClient {
        body: serde_json::Value,
    }

    #[async_trait]
    impl LandingPageClient for FixedLandingPageClient {
        async fn resolve_domain(&self, _domain: &str) -> Result<ResolveDomainResponse, RemoteError> {
            serde_json::from_value(self.body.clone()).map_err(|e| RemoteError::Decode {
                message: e.to_string(),
            })
        }
    }

    // PIN service accepting a single PIN
    struct SinglePinService {
        expected_pin: String,
        log: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PinServiceTrait for SinglePinService {
        async fn request_pin(
            &self,
            request: &PinGenerationRequest,
        ) -> Result<PinApiResponse, RemoteError> {
            self.log
                .lock()
                .unwrap()
                .push(format!("generate:{}:{}", request.msisdn, request.click_id));
            Ok(PinApiResponse::success())
        }

        async fn verify_pin(
            &self,
            request: &PinVerificationRequest,
        ) -> Result<PinApiResponse, RemoteError> {
            self.log
                .lock()
                .unwrap()
                .push(format!("verify:{}:{}", request.pin, request.click_id));
            if request.pin == self.expected_pin {
                Ok(PinApiResponse::success())
            } else {
                Ok(PinApiResponse::rejected("Invalid PIN"))
            }
        }
    }

    fn landing_body(is_active: bool) -> serde_json::Value {
        json!({
            "landing_page": {
                "id": 11,
                "domain_name": "kuwait-offers.example",
                "country_code": 965,
                "bg_color": "#0a0a0a",
                "language": "en",
                "redirect_url": "https://example.test/welcome",
                "is_active": is_active
            },
            "campaign": {"id": 5, "service_id": "svc-kw", "publisher_id": 77}
        })
    }

    #[tokio::test]
    async fn test_full_journey_with_retry() {
        let resolver = ConfigResolver::new(
            Arc::new(FixedLandingPageClient { body: landing_body(true) }),
            LandingConfig::default(),
        );
        let configuration = resolver.resolve(Some("kuwait-offers.example")).await;
        assert_eq!(configuration.country_codes[0].dial_code, "+965");

        let pins = Arc::new(SinglePinService {
            expected_pin: "2468".to_string(),
            log: Mutex::new(Vec::new()),
        });
        let mut flow = VerificationFlow::new(
            pins.clone(),
            Arc::new(configuration),
            VerificationFlowConfig::default(),
        );
        assert_eq!(flow.session().selected_country().dial_code, "+965");

        flow.input_phone("55512345");
        assert_eq!(flow.submit().await, SubmitOutcome::Invalid);
        flow.input_phone("555123456");
        assert_eq!(flow.submit().await, SubmitOutcome::PinSent);

        flow.input_otp("1357");
        assert_eq!(flow.verify().await, VerifyOutcome::Rejected);
        assert_eq!(flow.session().error_message(), Some("Invalid PIN"));

        flow.input_otp("2468");
        assert_eq!(
            flow.verify().await,
            VerifyOutcome::Navigate("https://example.test/welcome".to_string())
        );
        assert!(flow.session().is_verified());

        let click_id = flow.session().click_id().to_string();
        assert_eq!(
            *pins.log.lock().unwrap(),
            vec![
                format!("generate:555123456:{}", click_id),
                format!("verify:1357:{}", click_id),
                format!("verify:2468:{}", click_id),
            ]
        );
    }

    #[tokio::test]
    async fn test_inactive_landing_page_uses_default_ids() {
        let resolver = ConfigResolver::new(
            Arc::new(FixedLandingPageClient { body: landing_body(false) }),
            LandingConfig::default(),
        );
        let configuration = resolver.resolve(Some("kuwait-offers.example")).await;
        assert_eq!(configuration, resolver.default_configuration());

        let pins = Arc::new(SinglePinService {
            expected_pin: "2468".to_string(),
            log: Mutex::new(Vec::new()),
        });
        let mut flow = VerificationFlow::new(
            pins,
            Arc::new(configuration),
            VerificationFlowConfig::default(),
        );

        flow.input_phone("501234567");
        match flow.begin_submit() {
            pl_core::services::verification::Step::Dispatch(request) => {
                assert_eq!(request.service.as_value(), &json!(37));
                assert_eq!(request.pub_id.as_value(), &json!(13));
            }
            other => panic!("Expected a request to dispatch, got {:?}", other),
        }

        flow.complete_submit(Ok(PinApiResponse::success()));
        flow.input_otp("2468");
        assert_eq!(flow.verify().await, VerifyOutcome::Verified);
        assert!(matches!(flow.session().stage(), Stage::Verified { .. }));
    }
}
