//! Resource routes: one router per entity under its base path, each method behind its role gate.
//! GET `<base>/all` and GET `<base>?<id>` need USER; POST `<base>/post`, PUT and DELETE need ADMIN.

use crate::auth::require_role;
use crate::entities::Entity;
use crate::extractors::Role;
use crate::handlers::resource::{create, delete, get_by_id, list, update, Repo};
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

pub fn resource_routes<E: Entity>(repo: Repo<E>) -> Router {
    let readable = get(get_by_id::<E>).route_layer(from_fn_with_state(Role::User, require_role));
    let writable = put(update::<E>)
        .delete(delete::<E>)
        .route_layer(from_fn_with_state(Role::Admin, require_role));

    Router::new()
        .route(
            &format!("{}/all", E::PATH),
            get(list::<E>).route_layer(from_fn_with_state(Role::User, require_role)),
        )
        .route(
            &format!("{}/post", E::PATH),
            post(create::<E>).route_layer(from_fn_with_state(Role::Admin, require_role)),
        )
        .route(E::PATH, readable.merge(writable))
        .with_state(repo)
}
