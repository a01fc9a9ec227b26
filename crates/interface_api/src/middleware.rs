//! API middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

use crate::auth::{AuthClaims, AuthError};
use crate::error::ApiError;
use crate::AppState;

/// Requires a valid staff bearer token and stores its claims in request
/// extensions for the handlers
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = bearer_token(request.headers())
        .ok_or(AuthError::MissingToken)
        .and_then(|token| state.keys.verify(token))
        .map_err(|e| {
            warn!(path = %request.uri().path(), "Rejected staff request: {}", e);
            ApiError::from(e)
        })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Logs each claim document request with the acting staff member
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let staff = request
        .extensions()
        .get::<AuthClaims>()
        .map_or_else(|| "anonymous".to_string(), |c| c.sub.clone());

    let started = Instant::now();
    let response = next.run(request).await;

    info!(
        %method,
        %path,
        %staff,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Claim document request"
    );

    response
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}
