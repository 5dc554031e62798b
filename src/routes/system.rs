//! GET /api/currentUser (USER) and GET /api/systemInfo (public).

use crate::auth::require_role;
use crate::config::SystemInfo;
use crate::extractors::Role;
use crate::handlers::system::{current_user, system_info};
use axum::{middleware::from_fn_with_state, routing::get, Router};

pub fn system_routes(info: SystemInfo) -> Router {
    Router::new()
        .route(
            "/api/currentUser",
            get(current_user).route_layer(from_fn_with_state(Role::User, require_role)),
        )
        .route("/api/systemInfo", get(system_info))
        .with_state(info)
}
