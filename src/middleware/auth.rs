use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::identity::ResolveError;
use crate::state::AppState;

/// Authentication middleware: extracts the bearer credential, resolves it to
/// a `Principal` and injects it into the request. Short-circuits with 401
/// when resolution fails; permission checks happen downstream in the
/// per-route guards.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;
    let principal = state.resolver.resolve(token.as_deref())?;

    tracing::debug!(
        user = %principal.username,
        roles = ?principal.roles,
        "authenticated request"
    );

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
/// A missing header means "no token"; a header that is present but not in
/// bearer format is an invalid credential.
fn bearer_token(headers: &HeaderMap) -> Result<Option<String>, ResolveError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = value.to_str().map_err(|_| ResolveError::InvalidToken)?;
    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(ResolveError::InvalidToken)?;

    Ok(Some(token.to_string()))
}
