//! Per-route role gate.

use crate::error::AppError;
use crate::extractors::{Principal, Role};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Reject the request with 403 unless the caller holds `required` (or a higher role).
/// Attach with `route_layer(from_fn_with_state(role, require_role))`.
pub async fn require_role(
    State(required): State<Role>,
    principal: Principal,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !principal.has_role(required) {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            user = principal.email.as_deref().unwrap_or("anonymous"),
            required = %required,
            "role check failed"
        );
        return Err(AppError::Forbidden);
    }
    Ok(next.run(request).await)
}
