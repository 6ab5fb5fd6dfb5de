//! Term entity: a word and its translation.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use super::{identity_of, IdentifiedEntity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "term")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub term: String,
    pub translation: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_term::Entity")]
    ClassTerm,
}

impl Related<super::class_term::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassTerm.def()
    }
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        super::class_term::Relation::Class.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::class_term::Relation::Term.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Build a transient term that has not been persisted yet.
    pub fn new_term(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id: ActiveValue::NotSet,
            term: ActiveValue::Set(term.into()),
            translation: ActiveValue::Set(translation.into()),
        }
    }
}

impl IdentifiedEntity for Entity {
    type Active = ActiveModel;

    fn identity(active: &ActiveModel) -> Option<i32> {
        identity_of(&active.id)
    }
}
