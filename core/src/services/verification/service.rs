//! Two-step PIN verification flow

use std::sync::Arc;

use pl_shared::phone::{is_digits, mask_phone_number};

use crate::domain::entities::{
    default_country, ClickId, Completion, Configuration, Stage, VerificationSession,
};
use crate::errors::{DomainError, DomainResult, RemoteError};

use super::config::VerificationFlowConfig;
use super::traits::PinServiceTrait;
use super::types::{
    PinApiResponse, PinGenerationRequest, PinVerificationRequest, Step, SubmitOutcome,
    VerifyOutcome,
};

/// Drives one verification session against the PIN service.
///
/// The flow is a three-stage machine (`CollectingPhone`, `AwaitingPin`,
/// `Verified`) plus a busy flag. While busy, every input is ignored, so at
/// most one remote call is ever in flight for a session. Each remote
/// operation is split into a `begin_*` half that yields the request to send
/// and a `complete_*` half that applies its result; `submit` and `verify`
/// compose both around the injected PIN service.
pub struct VerificationFlow<P: PinServiceTrait> {
    /// Remote PIN service
    pin_service: Arc<P>,
    /// Configuration resolved for this page load
    configuration: Arc<Configuration>,
    /// Thresholds and messages
    config: VerificationFlowConfig,
    session: VerificationSession,
}

impl<P: PinServiceTrait> VerificationFlow<P> {
    /// Start a fresh session with a new click id.
    ///
    /// The initial country is picked from the configuration's domain, falling
    /// back to the first offered country.
    pub fn new(
        pin_service: Arc<P>,
        configuration: Arc<Configuration>,
        config: VerificationFlowConfig,
    ) -> Self {
        Self::resume(pin_service, configuration, config, ClickId::generate())
    }

    /// Start a session collecting a phone number under an existing click id
    pub fn resume(
        pin_service: Arc<P>,
        configuration: Arc<Configuration>,
        config: VerificationFlowConfig,
        click_id: ClickId,
    ) -> Self {
        let country = default_country(
            &configuration.country_codes,
            configuration.domain.as_deref(),
        );
        let session = VerificationSession::new(country, click_id);

        Self {
            pin_service,
            configuration,
            config,
            session,
        }
    }

    /// Rebuild a session that already requested a PIN for `phone_number`.
    ///
    /// `dial_code` restores the selected country; without it the default
    /// country is kept.
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - if `dial_code` is not one of the offered
    ///   countries, or the phone number could never have been submitted
    pub fn resume_awaiting_pin(
        pin_service: Arc<P>,
        configuration: Arc<Configuration>,
        config: VerificationFlowConfig,
        click_id: ClickId,
        phone_number: &str,
        dial_code: Option<&str>,
    ) -> DomainResult<Self> {
        let mut flow = Self::resume(pin_service, configuration, config, click_id);
        if let Some(dial_code) = dial_code {
            if !flow.select_country(dial_code) {
                return Err(DomainError::Validation {
                    field: "country_code",
                    message: format!("Unsupported country code: {}", dial_code),
                });
            }
        }
        if !is_digits(phone_number) || !flow.is_valid_phone(phone_number) {
            return Err(DomainError::Validation {
                field: "phone",
                message: format!(
                    "Phone number must be at least {} digits",
                    flow.config.min_phone_length
                ),
            });
        }
        flow.session.phone_number = phone_number.to_string();
        flow.session.stage = Stage::AwaitingPin { otp: String::new() };
        Ok(flow)
    }

    pub fn session(&self) -> &VerificationSession {
        &self.session
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Replace the phone number.
    ///
    /// Only digit strings are accepted; anything else is dropped before it
    /// reaches the session. Returns whether the input was accepted.
    pub fn input_phone(&mut self, value: &str) -> bool {
        if self.session.busy || self.session.stage != Stage::CollectingPhone || !is_digits(value) {
            return false;
        }
        self.session.phone_number = value.to_string();
        self.session.error_message = None;
        true
    }

    /// Choose one of the configuration's countries by dial code
    pub fn select_country(&mut self, dial_code: &str) -> bool {
        if self.session.busy || self.session.stage != Stage::CollectingPhone {
            return false;
        }
        match self.configuration.country(dial_code) {
            Some(country) => {
                self.session.selected_country = country.clone();
                self.session.error_message = None;
                true
            }
            None => false,
        }
    }

    /// Replace the OTP; digits only, at most `max_otp_length` of them
    pub fn input_otp(&mut self, value: &str) -> bool {
        if self.session.busy || !is_digits(value) || value.len() > self.config.max_otp_length {
            return false;
        }
        match &mut self.session.stage {
            Stage::AwaitingPin { otp } => {
                *otp = value.to_string();
                self.session.error_message = None;
                true
            }
            _ => false,
        }
    }

    /// Return from `AwaitingPin` to `CollectingPhone`, dropping the OTP and any error
    pub fn back(&mut self) -> bool {
        if self.session.busy || !matches!(self.session.stage, Stage::AwaitingPin { .. }) {
            return false;
        }
        self.session.stage = Stage::CollectingPhone;
        self.session.error_message = None;
        true
    }

    /// Validate the phone number and, if valid, enter the busy state and
    /// yield the PIN generation request to send.
    pub fn begin_submit(&mut self) -> Step<PinGenerationRequest, SubmitOutcome> {
        if self.session.busy || self.session.stage != Stage::CollectingPhone {
            return Step::Settled(SubmitOutcome::Ignored);
        }

        if !self.is_valid_phone(&self.session.phone_number) {
            self.session.error_message = Some(self.configuration.translations.error_message.clone());
            return Step::Settled(SubmitOutcome::Invalid);
        }

        self.session.busy = true;
        self.session.error_message = None;

        tracing::info!(
            phone = %mask_phone_number(&self.session.phone_number),
            click_id = %self.session.click_id,
            country = %self.session.selected_country.dial_code,
            event = "pin_requested",
            "Requesting PIN generation"
        );

        Step::Dispatch(PinGenerationRequest {
            msisdn: self.session.phone_number.clone(),
            service: self.configuration.service_id.clone(),
            pub_id: self.configuration.publisher_id.clone(),
            click_id: self.session.click_id.clone(),
        })
    }

    /// Apply the result of a PIN generation request and leave the busy state
    pub fn complete_submit(&mut self, result: Result<PinApiResponse, RemoteError>) -> SubmitOutcome {
        if !self.session.busy || self.session.stage != Stage::CollectingPhone {
            return SubmitOutcome::Ignored;
        }
        self.session.busy = false;

        match result {
            Ok(response) if response.is_success() => {
                tracing::info!(
                    click_id = %self.session.click_id,
                    event = "pin_sent",
                    "PIN generation succeeded"
                );
                self.session.stage = Stage::AwaitingPin { otp: String::new() };
                self.session.error_message = None;
                SubmitOutcome::PinSent
            }
            Ok(response) => {
                tracing::warn!(
                    click_id = %self.session.click_id,
                    status = %response.status,
                    message = ?response.message(),
                    event = "pin_request_rejected",
                    "PIN generation rejected"
                );
                self.session.error_message = Some(
                    response
                        .message()
                        .map(str::to_string)
                        .unwrap_or_else(|| self.config.messages.pin_request_rejected.clone()),
                );
                SubmitOutcome::Rejected
            }
            Err(e) => {
                tracing::error!(
                    click_id = %self.session.click_id,
                    error = %e,
                    event = "pin_request_failed",
                    "PIN generation request failed"
                );
                self.session.error_message = Some(self.config.messages.network_error.clone());
                SubmitOutcome::TransportFailed
            }
        }
    }

    /// Request a PIN for the current phone number
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.begin_submit() {
            Step::Dispatch(request) => {
                let result = self.pin_service.request_pin(&request).await;
                self.complete_submit(result)
            }
            Step::Settled(outcome) => outcome,
        }
    }

    /// Validate the OTP and, if long enough, enter the busy state and yield
    /// the PIN verification request to send.
    pub fn begin_verify(&mut self) -> Step<PinVerificationRequest, VerifyOutcome> {
        if self.session.busy {
            return Step::Settled(VerifyOutcome::Ignored);
        }
        let otp = match &self.session.stage {
            Stage::AwaitingPin { otp } => otp.clone(),
            _ => return Step::Settled(VerifyOutcome::Ignored),
        };

        if otp.len() < self.config.min_otp_length {
            self.session.error_message = Some(self.config.messages.pin_required.clone());
            return Step::Settled(VerifyOutcome::Invalid);
        }

        self.session.busy = true;
        self.session.error_message = None;

        tracing::info!(
            phone = %mask_phone_number(&self.session.phone_number),
            click_id = %self.session.click_id,
            event = "pin_verification_requested",
            "Requesting PIN verification"
        );

        Step::Dispatch(PinVerificationRequest {
            msisdn: self.session.phone_number.clone(),
            service: self.configuration.service_id.clone(),
            pub_id: self.configuration.publisher_id.clone(),
            click_id: self.session.click_id.clone(),
            pin: otp,
        })
    }

    /// Apply the result of a PIN verification request and leave the busy state
    pub fn complete_verify(&mut self, result: Result<PinApiResponse, RemoteError>) -> VerifyOutcome {
        if !self.session.busy || !matches!(self.session.stage, Stage::AwaitingPin { .. }) {
            return VerifyOutcome::Ignored;
        }
        self.session.busy = false;

        match result {
            Ok(response) if response.is_success() => {
                self.session.error_message = None;
                match self.configuration.redirect_url.clone() {
                    Some(url) => {
                        tracing::info!(
                            click_id = %self.session.click_id,
                            redirect_url = %url,
                            event = "pin_verified",
                            "PIN verified, redirecting"
                        );
                        self.session.stage = Stage::Verified {
                            completion: Completion::Redirected { url: url.clone() },
                        };
                        VerifyOutcome::Navigate(url)
                    }
                    None => {
                        tracing::info!(
                            click_id = %self.session.click_id,
                            event = "pin_verified",
                            "PIN verified, no redirect configured"
                        );
                        self.session.stage = Stage::Verified {
                            completion: Completion::Confirmed {
                                message: self.config.messages.verification_success.clone(),
                            },
                        };
                        VerifyOutcome::Verified
                    }
                }
            }
            Ok(response) => {
                tracing::warn!(
                    click_id = %self.session.click_id,
                    status = %response.status,
                    message = ?response.message(),
                    event = "pin_verification_rejected",
                    "PIN verification rejected"
                );
                self.session.error_message = Some(
                    response
                        .message()
                        .map(str::to_string)
                        .unwrap_or_else(|| self.config.messages.pin_verification_rejected.clone()),
                );
                VerifyOutcome::Rejected
            }
            Err(e) => {
                tracing::error!(
                    click_id = %self.session.click_id,
                    error = %e,
                    event = "pin_verification_failed",
                    "PIN verification request failed"
                );
                self.session.error_message = Some(self.config.messages.network_error.clone());
                VerifyOutcome::TransportFailed
            }
        }
    }

    /// Verify the OTP typed so far
    pub async fn verify(&mut self) -> VerifyOutcome {
        match self.begin_verify() {
            Step::Dispatch(request) => {
                let result = self.pin_service.verify_pin(&request).await;
                self.complete_verify(result)
            }
            Step::Settled(outcome) => outcome,
        }
    }

    fn is_valid_phone(&self, phone: &str) -> bool {
        phone.len() >= self.config.min_phone_length
    }
}
