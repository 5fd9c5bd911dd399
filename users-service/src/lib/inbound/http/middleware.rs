use axum::extract::Request;
use axum::extract::State;
use axum::http::header::HeaderValue;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use uuid::Uuid;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiErrorData;
use crate::inbound::http::router::AppState;
use crate::user::identity::CorrelationId;
use crate::user::identity::RequestIdentity;

const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Attach the caller's identity to the request.
///
/// A valid bearer token yields an authenticated `RequestIdentity`
/// built from the verified claims; anything else (no header, bad
/// scheme, invalid or expired token) yields the anonymous identity.
/// This middleware never rejects; route-level guards decide what the
/// identity is allowed to do.
pub async fn identify(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let identity = match bearer_token(&req) {
        Some(token) => match state.token_issuer.decode(token) {
            Ok(claims) => RequestIdentity::authenticated(claims.sub, claims.role),
            Err(e) => {
                tracing::warn!(error = %e, "presented token did not validate");
                RequestIdentity::anonymous()
            }
        },
        None => RequestIdentity::anonymous(),
    };

    req.extensions_mut().insert(identity);
    next.run(req).await
}

/// Reject unauthenticated requests with 401.
pub async fn require_authenticated(req: Request, next: Next) -> Result<Response, Response> {
    let identity = req.extensions().get::<RequestIdentity>();

    match identity {
        Some(identity) if identity.user_id().is_some() => Ok(next.run(req).await),
        _ => Err(ApiError::Unauthorized(ApiErrorData::new(
            "authentication.required",
            "A valid bearer token is required.",
        ))
        .into_response()),
    }
}

/// Reject callers that are not administrators.
///
/// Unauthenticated callers get 401; authenticated non-admins get 403.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, Response> {
    let identity = req.extensions().get::<RequestIdentity>();

    match identity {
        Some(identity) if identity.is_admin() => Ok(next.run(req).await),
        Some(identity) if identity.user_id().is_some() => {
            Err(ApiError::Forbidden(ApiErrorData::new(
                "authorization.admin_required",
                "Administrator role is required.",
            ))
            .into_response())
        }
        _ => Err(ApiError::Unauthorized(ApiErrorData::new(
            "authentication.required",
            "A valid bearer token is required.",
        ))
        .into_response()),
    }
}

/// Adopt or generate the per-request correlation id.
///
/// The id from the inbound `X-Correlation-Id` header is reused when
/// present, otherwise a fresh UUID is generated. It is attached to the
/// request (header and extension, so downstream layers and spans see
/// it) and echoed on the response for the caller to trace.
pub async fn correlate(mut req: Request, next: Next) -> Response {
    let correlation_id = req
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        req.headers_mut()
            .insert(http::HeaderName::from_static(CORRELATION_ID_HEADER), value);
    }
    req.extensions_mut()
        .insert(CorrelationId(correlation_id.clone()));

    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        response
            .headers_mut()
            .insert(http::HeaderName::from_static(CORRELATION_ID_HEADER), value);
    }

    response
}

fn bearer_token(req: &Request) -> Option<&str> {
    let auth_header = req.headers().get(http::header::AUTHORIZATION)?;
    let auth_str = auth_header.to_str().ok()?;
    auth_str.strip_prefix("Bearer ")
}
