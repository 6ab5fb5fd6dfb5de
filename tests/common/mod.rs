use knowledge_reinforce::config::DatabaseConfig;
use knowledge_reinforce::{db, schema};
use sea_orm::DatabaseConnection;

/// Fresh database with the schema in place.
///
/// With DB_USER, DB_PASSWORD, DB_HOST and DB_NAME set, the tests run against
/// the `<DB_NAME>_test` MySQL database, which is rebuilt on every call (run
/// with `--test-threads=1` in that mode). Otherwise each test gets its own
/// in-memory SQLite database.
pub async fn setup() -> DatabaseConnection {
    match DatabaseConfig::default().resolve_test_url() {
        Ok(url) => {
            let conn = db::connect(&DatabaseConfig::with_url(url))
                .await
                .expect("test database should open");
            schema::drop_all(&conn).await.expect("test schema should drop");
            schema::create_all(&conn).await.expect("test schema should be created");
            conn
        }
        Err(_) => db::connect_memory().await.expect("in-memory database should open"),
    }
}
