//! Resource CRUD handlers, generic over the entity: list, get, create, update, delete.

use crate::entities::Entity;
use crate::error::AppError;
use crate::extractors::EntityId;
use crate::repository::Repository;
use crate::response::{deleted_message, ok};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// Repository handle each resource router is built with.
pub type Repo<E> = Arc<dyn Repository<E>>;

pub async fn list<E: Entity>(State(repo): State<Repo<E>>) -> Result<impl IntoResponse, AppError> {
    let rows = repo.find_all().await?;
    Ok(ok(rows))
}

pub async fn get_by_id<E: Entity>(
    State(repo): State<Repo<E>>,
    id: EntityId<E>,
) -> Result<impl IntoResponse, AppError> {
    let id = id.into_inner();
    let row = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(E::NAME, &id))?;
    Ok(ok(row))
}

pub async fn create<E: Entity>(
    State(repo): State<Repo<E>>,
    Query(params): Query<E::Params>,
) -> Result<impl IntoResponse, AppError> {
    let entity = E::from_params(params);
    tracing::info!(entity = E::NAME, record = ?entity, "create");
    let saved = repo.save(entity).await?;
    Ok(ok(saved))
}

pub async fn update<E: Entity>(
    State(repo): State<Repo<E>>,
    id: EntityId<E>,
    Json(incoming): Json<E>,
) -> Result<impl IntoResponse, AppError> {
    let id = id.into_inner();
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(E::NAME, &id))?;
    let replacement = incoming.with_id(existing.id());
    tracing::info!(entity = E::NAME, id = %id, record = ?replacement, "update");
    let saved = repo.save(replacement).await?;
    Ok(ok(saved))
}

pub async fn delete<E: Entity>(
    State(repo): State<Repo<E>>,
    id: EntityId<E>,
) -> Result<impl IntoResponse, AppError> {
    let id = id.into_inner();
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(E::NAME, &id))?;
    repo.delete(&existing).await?;
    tracing::info!(entity = E::NAME, id = %id, "delete");
    Ok(deleted_message(E::NAME, &id))
}
