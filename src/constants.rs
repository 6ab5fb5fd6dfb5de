//! Constants used throughout the crate
//!
//! File names, environment variable names and CLI messages live here so the
//! library and the binary agree on them.

// Configuration
pub const LOCAL_CONFIG_FILE: &str = "knowledge_reinforce.toml";
pub const CONFIG_DIR_NAME: &str = "knowledge_reinforce";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "knowledge_reinforce.log";

// Database environment
pub const DB_USER_ENV: &str = "DB_USER";
pub const DB_PASSWORD_ENV: &str = "DB_PASSWORD";
pub const DB_HOST_ENV: &str = "DB_HOST";
pub const DB_NAME_ENV: &str = "DB_NAME";
pub const TEST_DATABASE_SUFFIX: &str = "_test";
pub const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

// CLI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default config";
pub const SCHEMA_CREATED: &str = "✅ Schema created";
pub const TERM_CREATED: &str = "✅ Term created";
pub const TERM_DELETED: &str = "✅ Term deleted";
pub const CLASS_CREATED: &str = "✅ Class created";
pub const TERM_TAGGED: &str = "✅ Term added to class";
pub const TERM_UNTAGGED: &str = "✅ Term removed from class";
pub const TERM_NOT_FOUND: &str = "❌ Term not found";
pub const CLASS_NOT_FOUND: &str = "❌ Class not found";
pub const ASSOCIATION_NOT_FOUND: &str = "❌ Term is not in that class";
