//! Persistence abstraction over one entity's table, with PostgreSQL and in-memory backends.

mod memory;
mod postgres;

pub use memory::InMemoryRepository;
pub use postgres::PgRepository;

use crate::entities::{Entity, Key};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Every row, ordered by identifier.
    async fn find_all(&self) -> Result<Vec<E>, AppError>;

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, AppError>;

    /// Insert when the identifier is unassigned, otherwise insert-or-replace by identifier.
    /// Returns the stored record, including any generated identifier.
    async fn save(&self, entity: E) -> Result<E, AppError>;

    async fn delete(&self, entity: &E) -> Result<(), AppError>;
}

/// Identifier `save` stores the entity under, or None when storage must generate one.
/// Natural keys are never generated, so an unassigned one is rejected.
fn assigned_key<E: Entity>(entity: &E) -> Result<Option<E::Id>, AppError> {
    let id = entity.id();
    if !id.is_unassigned() {
        return Ok(Some(id));
    }
    if E::TABLE.generated_id {
        return Ok(None);
    }
    Err(missing_key::<E>())
}

fn missing_key<E: Entity>() -> AppError {
    AppError::BadRequest(format!("{} requires a caller-supplied identifier", E::NAME))
}
