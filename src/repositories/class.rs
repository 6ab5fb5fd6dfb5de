//! Class repository for database operations.

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, TransactionTrait,
};

use super::base::{BaseRepository, Repository};
use crate::entities::{class, class_term, term};

/// Repository for class-related database operations.
pub struct ClassRepository<'c, C> {
    base: BaseRepository<'c, C, class::Entity>,
}

impl<'c, C> ClassRepository<'c, C>
where
    C: ConnectionTrait + TransactionTrait + Sync,
{
    /// Create a class repository bound to `conn`.
    pub fn new(conn: &'c C) -> Self {
        Self {
            base: BaseRepository::new(conn),
        }
    }

    /// Get a single class by name.
    pub async fn get_by_class_name(&self, class_name: &str) -> Result<Option<class::Model>> {
        Ok(class::Entity::find()
            .filter(class::Column::ClassName.eq(class_name))
            .one(self.base.conn())
            .await?)
    }

    /// Get the terms filed under a class.
    pub async fn get_terms(&self, class_id: i32) -> Result<Vec<term::Model>> {
        Ok(term::Entity::find()
            .filter(
                term::Column::Id.in_subquery(
                    class_term::Entity::find()
                        .filter(class_term::Column::ClassId.eq(class_id))
                        .select_only()
                        .column(class_term::Column::TermId)
                        .into_query(),
                ),
            )
            .order_by_asc(term::Column::Id)
            .all(self.base.conn())
            .await?)
    }
}

#[async_trait]
impl<'c, C> Repository for ClassRepository<'c, C>
where
    C: ConnectionTrait + TransactionTrait + Sync,
{
    type Entity = class::Entity;

    async fn get_by_id(&self, id: i32) -> Result<Option<class::Model>> {
        self.base.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<class::Model>> {
        self.base.get_all().await
    }

    async fn create(&self, obj: class::ActiveModel) -> Result<class::Model> {
        self.base.create(obj).await
    }

    async fn update(&self, obj: class::ActiveModel) -> Result<Option<class::Model>> {
        self.base.update(obj).await
    }

    async fn delete(&self, obj: &class::ActiveModel) -> Result<bool> {
        self.base.delete(obj).await
    }

    async fn count(&self) -> Result<u64> {
        self.base.count().await
    }
}
