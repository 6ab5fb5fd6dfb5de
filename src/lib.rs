//! knowledge-reinforce - persistence for a vocabulary-learning domain
//!
//! Terms (a word and its translation) are grouped into classes, related
//! many-to-many. Data access goes through repositories bound to a SeaORM
//! connection supplied by the caller.
//!
//! # Modules
//!
//! * [`entities`] - SeaORM entity models
//! * [`schema`] - Explicit table definitions
//! * [`repositories`] - Generic and entity-specific repositories
//! * [`db`] - Connection provider
//! * [`config`] - Configuration management
//! * [`logger`] - File logging

/// Configuration module for managing application settings
pub mod config;

/// Constants and default values
pub mod constants;

/// Connection provider
pub mod db;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Table definitions and schema management
pub mod schema;

// Re-export entity models for convenient access
pub use entities::{class, class_term, term};
pub use repositories::{ClassRepository, Repository, TermRepository};
