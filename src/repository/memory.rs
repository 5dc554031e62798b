//! Process-local repository. Rows live for the lifetime of the value.

use super::{assigned_key, missing_key, Repository};
use crate::entities::{Entity, Key};
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

struct Table<E> {
    rows: Vec<E>,
    last_id: i64,
}

pub struct InMemoryRepository<E> {
    table: Mutex<Table<E>>,
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        InMemoryRepository {
            table: Mutex::new(Table {
                rows: Vec::new(),
                last_id: 0,
            }),
        }
    }
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `rows`, stored as given.
    pub fn with_rows(rows: impl IntoIterator<Item = E>) -> Self {
        let repo = Self::new();
        {
            let mut table = repo.lock();
            for row in rows {
                upsert_row(&mut table, row);
            }
        }
        repo
    }

    fn lock(&self) -> MutexGuard<'_, Table<E>> {
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Replace the row with the same identifier, or append. Keeps `last_id` ahead of explicit ids.
fn upsert_row<E: Entity>(table: &mut Table<E>, entity: E) {
    let id = entity.id();
    if let Some(n) = id.sequence() {
        table.last_id = table.last_id.max(n);
    }
    match table.rows.iter_mut().find(|r| r.id() == id) {
        Some(existing) => *existing = entity,
        None => table.rows.push(entity),
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, AppError> {
        Ok(self.lock().rows.clone())
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, AppError> {
        Ok(self.lock().rows.iter().find(|r| &r.id() == id).cloned())
    }

    async fn save(&self, entity: E) -> Result<E, AppError> {
        let mut table = self.lock();
        let entity = match assigned_key(&entity)? {
            Some(_) => entity,
            None => {
                let id = E::Id::generate(table.last_id + 1).ok_or_else(missing_key::<E>)?;
                entity.with_id(id)
            }
        };
        upsert_row(&mut table, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, entity: &E) -> Result<(), AppError> {
        let id = entity.id();
        self.lock().rows.retain(|r| r.id() != id);
        Ok(())
    }
}
