//! Class entity: a named category of terms.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use super::{identity_of, IdentifiedEntity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "class")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "class", unique)]
    pub class_name: String,
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

impl Related<super::term::Entity> for Entity {
    fn to() -> RelationDef {
        super::class_term::Relation::Term.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::class_term::Relation::Class.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Build a transient class that has not been persisted yet.
    pub fn new_class(class_name: impl Into<String>) -> Self {
        Self {
            id: ActiveValue::NotSet,
            class_name: ActiveValue::Set(class_name.into()),
        }
    }
}

impl IdentifiedEntity for Entity {
    type Active = ActiveModel;

    fn identity(active: &ActiveModel) -> Option<i32> {
        identity_of(&active.id)
    }
}
