use actix_web::{web, HttpRequest, HttpResponse};
use pl_core::domain::entities::ClickId;
use pl_core::services::resolver::LandingPageClient;
use pl_core::services::verification::{PinServiceTrait, VerificationFlow};
use pl_shared::ApiResponse;

use crate::dto::PageResponse;

use super::AppState;

/// Handler for GET /api/v1/page
///
/// Resolves the configuration for the request's host and opens a fresh
/// verification session with a new click id and the default country.
///
/// # Response
///
/// ```json
/// {
///     "success": true,
///     "data": {
///         "title": "OTP Verification",
///         "textDirection": "rtl",
///         "configuration": { "primaryColor": "#00C2E0", "...": "..." },
///         "session": { "stage": { "name": "CollectingPhone" }, "...": "..." }
///     },
///     "timestamp": "2025-08-14T10:00:00Z"
/// }
/// ```
pub async fn page<L, P>(req: HttpRequest, state: web::Data<AppState<L, P>>) -> HttpResponse
where
    L: LandingPageClient + 'static,
    P: PinServiceTrait + 'static,
{
    let click_id = ClickId::generate();
    let configuration = state.open_page(&req, &click_id).await;
    let flow = VerificationFlow::resume(
        state.pin_service.clone(),
        configuration,
        state.flow_config.clone(),
        click_id,
    );

    tracing::info!(
        domain = ?flow.configuration().domain,
        click_id = %flow.session().click_id(),
        event = "page_served",
        "Serving landing page"
    );

    HttpResponse::Ok().json(ApiResponse::success(PageResponse::new(
        flow.configuration(),
        flow.session(),
    )))
}
