//! Explicit table definitions for the vocabulary store.
//!
//! The layout is spelled out column by column instead of being derived from
//! the entity models, so the storage shape (including the `class` column
//! that backs `Class::class_name`) is visible in one place.

use anyhow::Result;
use log::info;
use sea_orm::sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, Table, TableCreateStatement, TableDropStatement,
};
use sea_orm::{ConnectionTrait, EntityTrait};

use crate::entities::{class, class_term, term};

/// `term` table: surrogate id, unique word, translation.
pub fn term_table() -> TableCreateStatement {
    Table::create()
        .table(term::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(term::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(term::Column::Term).string_len(255).not_null().unique_key())
        .col(ColumnDef::new(term::Column::Translation).string_len(255).not_null())
        .to_owned()
}

/// `class` table: surrogate id and the unique name stored in column `class`.
pub fn class_table() -> TableCreateStatement {
    Table::create()
        .table(class::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(class::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(class::Column::ClassName).string_len(255).not_null().unique_key())
        .to_owned()
}

/// `class_term_association` join table keyed on `(term_id, class_id)`.
///
/// Both foreign keys cascade so removing a term or a class never leaves
/// dangling association rows.
pub fn class_term_table() -> TableCreateStatement {
    Table::create()
        .table(class_term::Entity)
        .if_not_exists()
        .col(ColumnDef::new(class_term::Column::TermId).integer().not_null())
        .col(ColumnDef::new(class_term::Column::ClassId).integer().not_null())
        .primary_key(
            Index::create()
                .col(class_term::Column::TermId)
                .col(class_term::Column::ClassId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_class_term_association_term")
                .from(class_term::Entity, class_term::Column::TermId)
                .to(term::Entity, term::Column::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_class_term_association_class")
                .from(class_term::Entity, class_term::Column::ClassId)
                .to(class::Entity, class::Column::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

/// Create every table that does not exist yet. Parents come before the join table.
pub async fn create_all<C>(conn: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let backend = conn.get_database_backend();
    for stmt in [term_table(), class_table(), class_term_table()] {
        conn.execute(backend.build(&stmt)).await?;
    }
    info!("Schema ready ({:?})", backend);
    Ok(())
}

fn drop_table<T>(table: T) -> TableDropStatement
where
    T: EntityTrait,
{
    Table::drop().table(table).if_exists().to_owned()
}

/// Drop every table, join table first.
pub async fn drop_all<C>(conn: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let backend = conn.get_database_backend();
    for stmt in [
        drop_table(class_term::Entity),
        drop_table(class::Entity),
        drop_table(term::Entity),
    ] {
        conn.execute(backend.build(&stmt)).await?;
    }
    info!("Schema dropped");
    Ok(())
}

/// Delete all rows while keeping the tables.
pub async fn clear_all<C>(conn: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    class_term::Entity::delete_many().exec(conn).await?;
    class::Entity::delete_many().exec(conn).await?;
    term::Entity::delete_many().exec(conn).await?;
    Ok(())
}
