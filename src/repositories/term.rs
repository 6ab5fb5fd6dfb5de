//! Term repository for database operations.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
    TransactionTrait,
};

use super::base::{BaseRepository, Repository};
use crate::entities::{class, class_term, term};

/// Repository for term-related database operations.
pub struct TermRepository<'c, C> {
    base: BaseRepository<'c, C, term::Entity>,
}

impl<'c, C> TermRepository<'c, C>
where
    C: ConnectionTrait + TransactionTrait + Sync,
{
    /// Create a term repository bound to `conn`.
    pub fn new(conn: &'c C) -> Self {
        Self {
            base: BaseRepository::new(conn),
        }
    }

    /// Get a single term by its word.
    pub async fn get_by_term(&self, term: &str) -> Result<Option<term::Model>> {
        Ok(term::Entity::find()
            .filter(term::Column::Term.eq(term))
            .one(self.base.conn())
            .await?)
    }

    /// Get all terms sharing a translation.
    pub async fn get_by_translation(&self, translation: &str) -> Result<Vec<term::Model>> {
        Ok(term::Entity::find()
            .filter(term::Column::Translation.eq(translation))
            .order_by_asc(term::Column::Id)
            .all(self.base.conn())
            .await?)
    }

    /// Get the classes a term belongs to. Empty when it has none.
    pub async fn get_classes(&self, term_id: i32) -> Result<Vec<class::Model>> {
        Ok(class::Entity::find()
            .filter(
                class::Column::Id.in_subquery(
                    class_term::Entity::find()
                        .filter(class_term::Column::TermId.eq(term_id))
                        .select_only()
                        .column(class_term::Column::ClassId)
                        .into_query(),
                ),
            )
            .order_by_asc(class::Column::Id)
            .all(self.base.conn())
            .await?)
    }

    /// Put a term into a class.
    ///
    /// Fails with the storage error when the pair already exists or either id is unknown.
    pub async fn add_class(&self, term_id: i32, class_id: i32) -> Result<()> {
        let link = class_term::ActiveModel {
            term_id: ActiveValue::Set(term_id),
            class_id: ActiveValue::Set(class_id),
        };
        class_term::Entity::insert(link)
            .exec_without_returning(self.base.conn())
            .await?;
        debug!("Linked term {} to class {}", term_id, class_id);
        Ok(())
    }

    /// Take a term out of a class. Returns `false` if it was not in it.
    pub async fn remove_class(&self, term_id: i32, class_id: i32) -> Result<bool> {
        let result = class_term::Entity::delete_by_id((term_id, class_id))
            .exec(self.base.conn())
            .await?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl<'c, C> Repository for TermRepository<'c, C>
where
    C: ConnectionTrait + TransactionTrait + Sync,
{
    type Entity = term::Entity;

    async fn get_by_id(&self, id: i32) -> Result<Option<term::Model>> {
        self.base.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<term::Model>> {
        self.base.get_all().await
    }

    async fn create(&self, obj: term::ActiveModel) -> Result<term::Model> {
        self.base.create(obj).await
    }

    async fn update(&self, obj: term::ActiveModel) -> Result<Option<term::Model>> {
        self.base.update(obj).await
    }

    async fn delete(&self, obj: &term::ActiveModel) -> Result<bool> {
        self.base.delete(obj).await
    }

    async fn count(&self) -> Result<u64> {
        self.base.count().await
    }
}
