//! HTTP API Layer
//!
//! This crate exposes the claim document engine over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Document validation, claim checklist and insurer packet
//! - **Middleware**: JWT authentication, audit logging
//! - **DTOs**: Request/Response data transfer objects with input-shape rules
//! - **Error Handling**: Consistent error responses
//!
//! # Routes
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | GET | `/health` | none |
//! | POST | `/api/v1/validation/validate` | none |
//! | POST | `/api/v1/claims/checklist` | bearer, `claim:read` |
//! | POST | `/api/v1/claims/packet` | bearer, `claim:packet` |
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use crate::auth::JwtKeys;
use crate::config::ApiConfig;
use crate::middleware::{auth_middleware, audit_middleware};
use crate::handlers::{claims, health, validation};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub keys: JwtKeys,
}

/// Builds the router with tracing, CORS, audit logging and, on the claims
/// routes, staff token checks
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState {
        keys: JwtKeys::from_config(&config),
        config,
    };

    let public_routes: Router<AppState> = Router::new()
        .route("/health", get(health::health_check));

    // Validation is open to the intake form
    let validation_routes: Router<AppState> = Router::new()
        .route("/validate", post(validation::validate_documents))
        .layer(axum_middleware::from_fn(audit_middleware));

    // Auth is the outer layer so the audit log sees the staff member
    let claims_routes: Router<AppState> = Router::new()
        .route("/checklist", post(claims::get_checklist))
        .route("/packet", post(claims::generate_packet))
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    let api_routes = Router::new()
        .nest("/validation", validation_routes)
        .nest("/claims", claims_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
