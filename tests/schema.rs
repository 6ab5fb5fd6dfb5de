mod common;

use knowledge_reinforce::{class, schema, term, ClassRepository, Repository, TermRepository};
use sea_orm::{ConnectionTrait, DbBackend, Statement};

#[tokio::test]
async fn test_create_all_is_idempotent() {
    let conn = common::setup().await;

    schema::create_all(&conn).await.unwrap();
    schema::create_all(&conn).await.unwrap();

    let repo = TermRepository::new(&conn);
    assert!(repo.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_class_name_is_stored_in_class_column() {
    let conn = common::setup().await;
    ClassRepository::new(&conn)
        .create(class::ActiveModel::new_class("adjectives"))
        .await
        .unwrap();

    let row = conn
        .query_one(Statement::from_string(
            DbBackend::Sqlite,
            r#"SELECT "class" FROM "class""#,
        ))
        .await
        .unwrap()
        .expect("one class row");
    let stored: String = row.try_get("", "class").unwrap();

    assert_eq!(stored, "adjectives");
}

#[tokio::test]
async fn test_clear_all_keeps_tables() {
    let conn = common::setup().await;
    let terms = TermRepository::new(&conn);
    let classes = ClassRepository::new(&conn);
    let apple = terms.create(term::ActiveModel::new_term("apple", "manzana")).await.unwrap();
    let fruit = classes.create(class::ActiveModel::new_class("fruit")).await.unwrap();
    terms.add_class(apple.id, fruit.id).await.unwrap();

    schema::clear_all(&conn).await.unwrap();

    assert_eq!(terms.count().await.unwrap(), 0);
    assert_eq!(classes.count().await.unwrap(), 0);
    terms.create(term::ActiveModel::new_term("apple", "manzana")).await.unwrap();
}

#[tokio::test]
async fn test_drop_all_removes_tables() {
    let conn = common::setup().await;

    schema::drop_all(&conn).await.unwrap();
    assert!(TermRepository::new(&conn).get_all().await.is_err());

    schema::create_all(&conn).await.unwrap();
    assert!(TermRepository::new(&conn).get_all().await.unwrap().is_empty());
}

#[test]
fn test_statements_render_expected_layout() {
    let term_sql = DbBackend::Sqlite.build(&schema::term_table()).to_string();
    assert!(term_sql.contains(r#""term""#));
    assert!(term_sql.contains("AUTOINCREMENT"));
    assert!(term_sql.contains("UNIQUE"));

    let join_sql = DbBackend::Sqlite.build(&schema::class_term_table()).to_string();
    assert!(join_sql.contains("class_term_association"));
    assert!(join_sql.contains("ON DELETE CASCADE"));
    assert!(join_sql.contains("PRIMARY KEY"));
    assert!(join_sql.contains(r#"REFERENCES "class""#));
}
