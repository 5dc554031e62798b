//! Router assembly.

mod common;
mod resource;
mod system;

pub use common::common_routes;
pub use resource::resource_routes;
pub use system::system_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

/// Resource routes for every entity plus the user and system info routes, all under `/api`.
pub fn api_routes(state: &AppState) -> Router {
    Router::new()
        .merge(resource_routes(state.menu_item_reviews.clone()))
        .merge(resource_routes(state.dining_commons_menu_items.clone()))
        .merge(resource_routes(state.organizations.clone()))
        .merge(resource_routes(state.recommendation_requests.clone()))
        .merge(resource_routes(state.articles.clone()))
        .merge(resource_routes(state.help_requests.clone()))
        .merge(resource_routes(state.dates.clone()))
        .merge(resource_routes(state.dining_commons.clone()))
        .merge(system_routes(state.system_info.clone()))
}

/// Complete application: common routes plus api routes, with a request body limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(&state))
        .layer(RequestBodyLimitLayer::new(body_limit))
}
