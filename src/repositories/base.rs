//! Generic repository shared by every identified entity.
//!
//! [`Repository`] is the CRUD contract. [`BaseRepository`] implements it once
//! for any [`IdentifiedEntity`] and the entity repositories compose it.
//!
//! A missing row is an ordinary outcome: reads return `None`, and `update` /
//! `delete` return `None` / `false` both for an unknown id and for an entity
//! that was never persisted. Storage errors (constraint violations, lost
//! connections) are propagated unchanged.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityName, EntityTrait, IntoActiveModel, Iterable, PaginatorTrait,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, TransactionTrait,
};
use std::marker::PhantomData;

use crate::entities::IdentifiedEntity;

/// Persisted row type of an entity.
pub type ModelOf<E> = <E as EntityTrait>::Model;

/// Active model type of an entity.
pub type ActiveOf<E> = <E as IdentifiedEntity>::Active;

/// Identity-based CRUD over one entity type.
#[async_trait]
pub trait Repository: Send + Sync {
    type Entity: IdentifiedEntity;

    /// Get the row with the given id.
    async fn get_by_id(&self, id: i32) -> Result<Option<ModelOf<Self::Entity>>>;

    /// Get every row, ordered by id.
    async fn get_all(&self) -> Result<Vec<ModelOf<Self::Entity>>>;

    /// Persist a transient entity and return it with its generated id.
    async fn create(&self, obj: ActiveOf<Self::Entity>) -> Result<ModelOf<Self::Entity>>;

    /// Write the fields set on `obj` into the existing row with the same id.
    ///
    /// Returns `None` when `obj` has no id or no such row exists.
    async fn update(&self, obj: ActiveOf<Self::Entity>) -> Result<Option<ModelOf<Self::Entity>>>;

    /// Remove the row with the same id as `obj`.
    ///
    /// Returns `false` when `obj` has no id or no such row exists.
    async fn delete(&self, obj: &ActiveOf<Self::Entity>) -> Result<bool>;

    /// Number of rows.
    async fn count(&self) -> Result<u64>;
}

/// [`Repository`] implementation bound to one borrowed connection.
///
/// `C` is either a `DatabaseConnection` or an open `DatabaseTransaction`.
/// Every mutation runs in its own transaction begun on `C` and committed
/// before returning (a savepoint when `C` is itself a transaction).
pub struct BaseRepository<'c, C, E> {
    conn: &'c C,
    _entity: PhantomData<fn() -> E>,
}

impl<'c, C, E> BaseRepository<'c, C, E> {
    /// Create a repository bound to `conn`.
    pub fn new(conn: &'c C) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    /// The connection this repository issues queries on.
    pub fn conn(&self) -> &'c C {
        self.conn
    }
}

fn table_of<E: EntityName>() -> String {
    E::default().table_name().to_string()
}

#[async_trait]
impl<'c, C, E> Repository for BaseRepository<'c, C, E>
where
    C: ConnectionTrait + TransactionTrait + Sync,
    E: IdentifiedEntity,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::Model: IntoActiveModel<E::Active> + Sync,
{
    type Entity = E;

    async fn get_by_id(&self, id: i32) -> Result<Option<ModelOf<E>>> {
        Ok(E::find_by_id(id).one(self.conn).await?)
    }

    async fn get_all(&self) -> Result<Vec<ModelOf<E>>> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        Ok(query.all(self.conn).await?)
    }

    async fn create(&self, obj: ActiveOf<E>) -> Result<ModelOf<E>> {
        let txn = self.conn.begin().await?;
        let model = obj.insert(&txn).await?;
        txn.commit().await?;
        debug!("Inserted row into {}", table_of::<E>());
        Ok(model)
    }

    async fn update(&self, obj: ActiveOf<E>) -> Result<Option<ModelOf<E>>> {
        let Some(id) = E::identity(&obj) else {
            debug!("Update on {} skipped: entity has no id", table_of::<E>());
            return Ok(None);
        };

        let txn = self.conn.begin().await?;
        if E::find_by_id(id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            debug!("Update on {} skipped: id {} not found", table_of::<E>(), id);
            return Ok(None);
        }

        let model = obj.update(&txn).await?;
        txn.commit().await?;
        debug!("Updated {} id {}", table_of::<E>(), id);
        Ok(Some(model))
    }

    async fn delete(&self, obj: &ActiveOf<E>) -> Result<bool> {
        let Some(id) = E::identity(obj) else {
            debug!("Delete on {} skipped: entity has no id", table_of::<E>());
            return Ok(false);
        };

        let txn = self.conn.begin().await?;
        if E::find_by_id(id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            debug!("Delete on {} skipped: id {} not found", table_of::<E>(), id);
            return Ok(false);
        }

        E::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        debug!("Deleted {} id {}", table_of::<E>(), id);
        Ok(true)
    }

    async fn count(&self) -> Result<u64> {
        Ok(E::find().count(self.conn).await?)
    }
}
