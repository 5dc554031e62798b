//! Repository execution against PostgreSQL.

use super::{assigned_key, Repository};
use crate::entities::{Entity, Key};
use crate::error::AppError;
use crate::sql::{delete_by_id, insert_generated, select_all, select_by_id, upsert, PgBindValue};
use async_trait::async_trait;
use sqlx::PgPool;
use std::marker::PhantomData;

pub struct PgRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PgRepository<E> {
    pub fn new(pool: PgPool) -> Self {
        PgRepository {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> PgRepository<E> {
    async fn fetch_optional(&self, sql: &str, params: Vec<PgBindValue>) -> Result<Option<E>, AppError> {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query(sql);
        for p in params {
            query = query.bind(p);
        }
        let row = query.fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(E::from_row).transpose()?)
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for PgRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, AppError> {
        let sql = select_all(&E::TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let entities = rows.iter().map(E::from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(entities)
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, AppError> {
        let sql = select_by_id(&E::TABLE);
        self.fetch_optional(&sql, vec![id.bind_value()]).await
    }

    async fn save(&self, entity: E) -> Result<E, AppError> {
        let (sql, params) = match assigned_key(&entity)? {
            None => (insert_generated(&E::TABLE), entity.bind_values()),
            Some(id) => {
                let mut params = vec![id.bind_value()];
                params.extend(entity.bind_values());
                (upsert(&E::TABLE), params)
            }
        };
        self.fetch_optional(&sql, params)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    async fn delete(&self, entity: &E) -> Result<(), AppError> {
        let sql = delete_by_id(&E::TABLE);
        tracing::debug!(sql = %sql, id = %entity.id(), "query");
        sqlx::query(&sql)
            .bind(entity.id().bind_value())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{UCSBDiningCommons, UCSBOrganizations};
    use sqlx::postgres::PgPoolOptions;

    /// Pool that never connects unless a query is actually issued.
    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://localhost:1/unreachable")
            .unwrap()
    }

    #[tokio::test]
    async fn empty_natural_key_is_rejected_before_any_query() {
        let repo = PgRepository::<UCSBOrganizations>::new(lazy_pool());
        let org = UCSBOrganizations {
            org_code: String::new(),
            org_translation_short: "O1".into(),
            org_translation: "Organization 1".into(),
            inactive: false,
        };
        let err = repo.save(org).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)), "{:?}", err);
        assert_eq!(err.to_string(), "UCSBOrganizations requires a caller-supplied identifier");
    }

    #[tokio::test]
    async fn empty_dining_commons_code_is_rejected_before_any_query() {
        let repo = PgRepository::<UCSBDiningCommons>::new(lazy_pool());
        let commons = UCSBDiningCommons {
            code: String::new(),
            name: "Ortega".into(),
            has_sack_meal: true,
            has_take_out_meal: true,
            has_dining_cam: true,
            latitude: 34.410987,
            longitude: -119.84709,
        };
        assert!(matches!(repo.save(commons).await, Err(AppError::BadRequest(_))));
    }
}
