use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_current_user::get_current_user;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_role::update_role;
use super::middleware::correlate;
use super::middleware::identify;
use super::middleware::require_admin;
use super::middleware::require_authenticated;
use crate::domain::user::identity::CorrelationId;
use crate::domain::user::service::UserService;
use crate::outbound::events::KafkaEventProducer;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository, KafkaEventProducer>>,
    pub token_issuer: Arc<TokenIssuer>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository, KafkaEventProducer>>,
    token_issuer: Arc<TokenIssuer>,
) -> Router {
    let state = AppState {
        user_service,
        token_issuer,
    };

    // Register stays public: the identity attached by `identify` is
    // only consulted when the request asks for an admin account.
    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login));

    let authenticated_routes = Router::new()
        .route("/api/users/me", get(get_current_user))
        .route_layer(middleware::from_fn(require_authenticated));

    let admin_routes = Router::new()
        .route("/api/users/:user_id/role", patch(update_role))
        .route_layer(middleware::from_fn(require_admin));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // `correlate` runs outermost, so the extension is already
            // attached by the time the span is built.
            let correlation_id = request
                .extensions()
                .get::<CorrelationId>()
                .map(|id| id.as_str())
                .unwrap_or_default();
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                correlation_id = %correlation_id,
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn_with_state(state.clone(), identify))
        .layer(middleware::from_fn(correlate))
        .with_state(state)
}
