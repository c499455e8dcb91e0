use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use validator::Validate;

use pl_core::domain::entities::ClickId;
use pl_core::services::resolver::LandingPageClient;
use pl_core::services::verification::{
    PinServiceTrait, SubmitOutcome, VerificationFlow, VerifyOutcome,
};
use pl_shared::phone::{bare_dial_code, mask_phone_number};
use pl_shared::ApiResponse;

use crate::dto::pin::{submit_outcome_code, verify_outcome_code};
use crate::dto::{PinRequestBody, PinRequestResponse, PinVerifyBody, PinVerifyResponse};
use crate::handlers::ApiError;

use super::AppState;

/// Handler for POST /api/v1/pin/request
///
/// Runs phone entry and submit on a session for the request's host.
///
/// # Request Body
///
/// ```json
/// {
///     "phone": "501234567",
///     "country_code": "+971",
///     "click_id": "optional, generated when absent"
/// }
/// ```
///
/// # Status
///
/// - 200: PIN sent, the session awaits the PIN
/// - 400: malformed body, phone too short, or PIN request rejected
/// - 502: the PIN service could not be reached
pub async fn request_pin<L, P>(
    req: HttpRequest,
    state: web::Data<AppState<L, P>>,
    body: web::Json<PinRequestBody>,
) -> Result<HttpResponse, ApiError>
where
    L: LandingPageClient + 'static,
    P: PinServiceTrait + 'static,
{
    let body = body.into_inner();
    body.validate().map_err(|e| ApiError::from_validation(&e))?;

    let click_id = body
        .click_id
        .as_deref()
        .and_then(ClickId::parse)
        .unwrap_or_else(ClickId::generate);

    let configuration = state.configuration_for(&req, &click_id).await;
    let mut flow = VerificationFlow::resume(
        state.pin_service.clone(),
        configuration,
        state.flow_config.clone(),
        click_id,
    );

    if let Some(country_code) = body.country_code.as_deref() {
        let dial_code = format!("+{}", bare_dial_code(country_code));
        if !flow.select_country(&dial_code) {
            return Err(ApiError::invalid_field(
                "country_code",
                format!("Unsupported country code: {}", country_code),
            ));
        }
    }

    if !flow.input_phone(&body.phone) {
        return Err(ApiError::invalid_field(
            "phone",
            "Phone number must contain digits only",
        ));
    }

    tracing::info!(
        phone = %mask_phone_number(&body.phone),
        click_id = %flow.session().click_id(),
        "Processing PIN request"
    );

    let outcome = flow.submit().await;
    let status = match outcome {
        SubmitOutcome::PinSent => StatusCode::OK,
        SubmitOutcome::Invalid | SubmitOutcome::Rejected => StatusCode::BAD_REQUEST,
        SubmitOutcome::TransportFailed => StatusCode::BAD_GATEWAY,
        SubmitOutcome::Ignored => StatusCode::CONFLICT,
    };

    let session = flow.session();
    let data = PinRequestResponse {
        outcome: submit_outcome_code(&outcome),
        session: session.clone(),
    };
    let response = match session.error_message() {
        Some(message) => ApiResponse::failure(data, message),
        None => ApiResponse::success(data),
    };

    Ok(HttpResponse::build(status).json(response))
}

/// Handler for POST /api/v1/pin/verify
///
/// Rebuilds the session that requested the PIN and verifies it.
///
/// # Request Body
///
/// ```json
/// {
///     "phone": "501234567",
///     "click_id": "the click id used for the PIN request",
///     "pin": "1234",
///     "country_code": "+971"
/// }
/// ```
///
/// # Status
///
/// - 200: verified; `redirectUrl` is set when the browser should navigate
/// - 400: malformed body, country not offered, PIN too short, or PIN rejected
/// - 502: the PIN service could not be reached
pub async fn verify_pin<L, P>(
    req: HttpRequest,
    state: web::Data<AppState<L, P>>,
    body: web::Json<PinVerifyBody>,
) -> Result<HttpResponse, ApiError>
where
    L: LandingPageClient + 'static,
    P: PinServiceTrait + 'static,
{
    let body = body.into_inner();
    body.validate().map_err(|e| ApiError::from_validation(&e))?;

    let click_id = ClickId::parse(&body.click_id)
        .ok_or_else(|| ApiError::invalid_field("click_id", "Click id must not be blank"))?;
    let dial_code = body
        .country_code
        .as_deref()
        .map(|code| format!("+{}", bare_dial_code(code)));

    let configuration = state.configuration_for(&req, &click_id).await;
    let mut flow = VerificationFlow::resume_awaiting_pin(
        state.pin_service.clone(),
        configuration,
        state.flow_config.clone(),
        click_id,
        &body.phone,
        dial_code.as_deref(),
    )?;

    if !flow.input_otp(&body.pin) {
        return Err(ApiError::invalid_field("pin", "PIN must contain digits only"));
    }

    let outcome = flow.verify().await;
    let status = match outcome {
        VerifyOutcome::Navigate(_) | VerifyOutcome::Verified => StatusCode::OK,
        VerifyOutcome::Invalid | VerifyOutcome::Rejected => StatusCode::BAD_REQUEST,
        VerifyOutcome::TransportFailed => StatusCode::BAD_GATEWAY,
        VerifyOutcome::Ignored => StatusCode::CONFLICT,
    };

    let session = flow.session();
    let data = PinVerifyResponse {
        outcome: verify_outcome_code(&outcome),
        redirect_url: outcome.navigation().map(str::to_string),
        session: session.clone(),
    };
    let response = match session.error_message() {
        Some(message) => ApiResponse::failure(data, message),
        None => ApiResponse::success(data),
    };

    Ok(HttpResponse::build(status).json(response))
}
