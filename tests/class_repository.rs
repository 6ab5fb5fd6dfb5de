mod common;

use knowledge_reinforce::{class, term, ClassRepository, Repository, TermRepository};
use sea_orm::{ActiveValue, IntoActiveModel};

#[tokio::test]
async fn test_create_and_get_class() {
    let conn = common::setup().await;
    let repo = ClassRepository::new(&conn);

    let created = repo.create(class::ActiveModel::new_class("verbs")).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.class_name, "verbs");
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn test_get_all_classes() {
    let conn = common::setup().await;
    let repo = ClassRepository::new(&conn);

    assert!(repo.get_all().await.unwrap().is_empty());

    let verbs = repo.create(class::ActiveModel::new_class("verbs")).await.unwrap();
    let nouns = repo.create(class::ActiveModel::new_class("nouns")).await.unwrap();

    assert_eq!(repo.get_all().await.unwrap(), vec![verbs, nouns]);
}

#[tokio::test]
async fn test_get_by_class_name() {
    let conn = common::setup().await;
    let repo = ClassRepository::new(&conn);

    let created = repo.create(class::ActiveModel::new_class("animals")).await.unwrap();

    assert_eq!(repo.get_by_class_name("animals").await.unwrap(), Some(created));
    assert!(repo.get_by_class_name("nonexistent").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_class() {
    let conn = common::setup().await;
    let repo = ClassRepository::new(&conn);

    let created = repo.create(class::ActiveModel::new_class("colours")).await.unwrap();
    let mut active = created.clone().into_active_model();
    active.class_name = ActiveValue::Set("colors".to_string());

    let updated = repo.update(active).await.unwrap().expect("class should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.class_name, "colors");
    assert!(repo.get_by_class_name("colours").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_and_delete_missing_class() {
    let conn = common::setup().await;
    let repo = ClassRepository::new(&conn);

    let ghost = class::ActiveModel {
        id: ActiveValue::Set(7),
        ..class::ActiveModel::new_class("ghost")
    };

    assert!(repo.update(ghost.clone()).await.unwrap().is_none());
    assert!(!repo.delete(&ghost).await.unwrap());
    assert!(repo.update(class::ActiveModel::new_class("ghost")).await.unwrap().is_none());
    assert!(!repo.delete(&class::ActiveModel::new_class("ghost")).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_class() {
    let conn = common::setup().await;
    let repo = ClassRepository::new(&conn);

    let created = repo.create(class::ActiveModel::new_class("food")).await.unwrap();
    let class_id = created.id;

    assert!(repo.delete(&created.into_active_model()).await.unwrap());
    assert!(repo.get_by_id(class_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_class_name_is_propagated() {
    let conn = common::setup().await;
    let repo = ClassRepository::new(&conn);

    repo.create(class::ActiveModel::new_class("food")).await.unwrap();
    let err = repo.create(class::ActiveModel::new_class("food")).await.unwrap_err();

    assert!(err.downcast_ref::<sea_orm::DbErr>().is_some());
}

#[tokio::test]
async fn test_get_terms() {
    let conn = common::setup().await;
    let terms = TermRepository::new(&conn);
    let classes = ClassRepository::new(&conn);

    let fruit = classes.create(class::ActiveModel::new_class("fruit")).await.unwrap();
    let empty = classes.create(class::ActiveModel::new_class("empty")).await.unwrap();
    let apple = terms.create(term::ActiveModel::new_term("apple", "manzana")).await.unwrap();
    let pear = terms.create(term::ActiveModel::new_term("pear", "pera")).await.unwrap();
    terms.create(term::ActiveModel::new_term("bread", "pan")).await.unwrap();
    terms.add_class(apple.id, fruit.id).await.unwrap();
    terms.add_class(pear.id, fruit.id).await.unwrap();

    assert_eq!(classes.get_terms(fruit.id).await.unwrap(), vec![apple, pear]);
    assert!(classes.get_terms(empty.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_class_removes_associations() {
    let conn = common::setup().await;
    let terms = TermRepository::new(&conn);
    let classes = ClassRepository::new(&conn);

    let apple = terms.create(term::ActiveModel::new_term("apple", "manzana")).await.unwrap();
    let fruit = classes.create(class::ActiveModel::new_class("fruit")).await.unwrap();
    terms.add_class(apple.id, fruit.id).await.unwrap();

    assert!(classes.delete(&fruit.into_active_model()).await.unwrap());

    assert!(terms.get_classes(apple.id).await.unwrap().is_empty());
    assert!(terms.get_by_id(apple.id).await.unwrap().is_some());
}
