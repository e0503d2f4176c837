//! Middleware for JWT token validation and authentication
//!
//! Produces the `Unauthenticated` outcome (401) for missing or invalid
//! credentials. Privilege checks happen later, in the handlers, so 401 is
//! never conflated with 403 or 404.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::AppState;
use crate::access::Caller;
use crate::error::ApiError;
use crate::models::Role;

/// Extract and validate the JWT from the Authorization header, placing
/// the resulting [`Caller`] into request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?;

    let claims = state.jwt_service.validate_token(token).map_err(|e| {
        warn!("Failed to validate token: {}", e);
        ApiError::Unauthorized
    })?;

    // A token whose role claim is not a member of the enumeration is an
    // invalid credential, not a privilege failure.
    let role = Role::parse(&claims.role).map_err(|_| ApiError::Unauthorized)?;

    req.extensions_mut().insert(Caller {
        id: claims.sub,
        role,
    });

    Ok(next.run(req).await)
}
