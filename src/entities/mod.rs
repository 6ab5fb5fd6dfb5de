//! SeaORM entity models for the vocabulary tables.
//!
//! Each entity is a plain data model; queries live in [`crate::repositories`]
//! and table layout lives in [`crate::schema`].

use sea_orm::{ActiveModelBehavior, ActiveModelTrait, ActiveValue, EntityTrait};

pub mod class;
pub mod class_term;
pub mod term;

pub use class::Entity as Class;
pub use class_term::Entity as ClassTerm;
pub use term::Entity as Term;

/// An entity with a surrogate integer identity.
///
/// The identity is read off the active model so the generic repository can
/// tell a transient instance (no id yet) from a persisted one.
pub trait IdentifiedEntity: EntityTrait {
    /// Active model used to create and update rows of this entity.
    type Active: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + Sync + 'static;

    /// The id carried by `active`, or `None` while it is transient.
    fn identity(active: &Self::Active) -> Option<i32>;
}

/// Reads an integer id out of an active value.
pub(crate) fn identity_of(value: &ActiveValue<i32>) -> Option<i32> {
    match value {
        ActiveValue::Set(id) | ActiveValue::Unchanged(id) => Some(*id),
        ActiveValue::NotSet => None,
    }
}
