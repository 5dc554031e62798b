//! Extract an entity identifier from the resource's id query parameter (`?id=7`, `?code=ORG1`).

use crate::entities::{Entity, Key};
use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;
use std::marker::PhantomData;

pub struct EntityId<E: Entity>(pub E::Id, PhantomData<fn() -> E>);

impl<E: Entity> EntityId<E> {
    pub fn into_inner(self) -> E::Id {
        self.0
    }
}

#[async_trait]
impl<E, S> FromRequestParts<S> for EntityId<E>
where
    E: Entity,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        let raw = params.get(E::ID_PARAM).ok_or_else(|| {
            AppError::BadRequest(format!("required request parameter '{}' is not present", E::ID_PARAM))
        })?;
        let id = E::Id::parse_param(raw).map_err(AppError::BadRequest)?;
        Ok(EntityId(id, PhantomData))
    }
}
