//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database queries
//! and operations, following the Data Mapper pattern recommended by SeaORM.
//! Repositories keep entities as pure data models while providing reusable
//! database access methods. The CRUD contract lives in [`Repository`]; the
//! entity repositories add natural-key lookups and class membership.

pub mod base;
pub mod class;
pub mod term;

pub use base::{ActiveOf, BaseRepository, ModelOf, Repository};
pub use class::ClassRepository;
pub use term::TermRepository;
