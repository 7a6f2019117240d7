use items_service::{open_in_memory, ItemFilter, ItemRepository, RepoError, SqliteItemRepository};
use std::collections::HashSet;

async fn repo() -> SqliteItemRepository {
    SqliteItemRepository::new(open_in_memory().await.unwrap())
}

fn names(items: &[items_service::Item]) -> HashSet<String> {
    items.iter().map(|i| i.name.clone()).collect()
}

#[tokio::test]
async fn create_and_get_roundtrip() {
    let repo = repo().await;

    let id = repo.create("Widget", Some("A thing")).await.unwrap();
    let item = repo.get_by_id(id).await.unwrap();

    assert_eq!(item.id, id);
    assert_eq!(item.name, "Widget");
    assert_eq!(item.description.as_deref(), Some("A thing"));
    assert!(!item.created_at.is_empty());
}

#[tokio::test]
async fn create_without_description_stores_null() {
    let repo = repo().await;

    let id = repo.create("Bare", None).await.unwrap();
    assert_eq!(repo.get_by_id(id).await.unwrap().description, None);

    let id = repo.create("Empty", Some("")).await.unwrap();
    assert_eq!(repo.get_by_id(id).await.unwrap().description, None);
}

#[tokio::test]
async fn create_trims_name() {
    let repo = repo().await;
    let id = repo.create("  padded  ", None).await.unwrap();
    assert_eq!(repo.get_by_id(id).await.unwrap().name, "padded");
}

#[tokio::test]
async fn create_rejects_blank_name_without_writing() {
    let repo = repo().await;

    for name in ["", "   "] {
        let err = repo.create(name, Some("ignored")).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }
    assert!(repo.list(&ItemFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn ids_are_unique_and_not_reused() {
    let repo = repo().await;

    let a = repo.create("a", None).await.unwrap();
    let b = repo.create("b", None).await.unwrap();
    assert_ne!(a, b);

    assert_eq!(repo.delete(b).await.unwrap(), 1);
    let c = repo.create("c", None).await.unwrap();
    assert!(c > b, "AUTOINCREMENT must not hand out {b} again (got {c})");
}

#[tokio::test]
async fn get_missing_is_not_found() {
    let repo = repo().await;
    let err = repo.get_by_id(999).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(999)));
}

#[tokio::test]
async fn update_changes_fields_but_not_created_at() {
    let repo = repo().await;
    let id = repo.create("old", Some("before")).await.unwrap();
    let before = repo.get_by_id(id).await.unwrap();

    assert_eq!(repo.update(id, "new", None).await.unwrap(), 1);

    let after = repo.get_by_id(id).await.unwrap();
    assert_eq!(after.id, id);
    assert_eq!(after.name, "new");
    assert_eq!(after.description, None);
    assert_eq!(after.created_at, before.created_at);
}

#[tokio::test]
async fn update_missing_id_changes_nothing() {
    let repo = repo().await;
    repo.create("keep", Some("same")).await.unwrap();

    assert_eq!(repo.update(12345, "other", None).await.unwrap(), 0);

    let all = repo.list(&ItemFilter::default()).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "keep");
}

#[tokio::test]
async fn update_rejects_blank_name() {
    let repo = repo().await;
    let id = repo.create("keep", None).await.unwrap();

    let err = repo.update(id, "  ", None).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.get_by_id(id).await.unwrap().name, "keep");
}

#[tokio::test]
async fn delete_is_idempotent_in_effect() {
    let repo = repo().await;
    let id = repo.create("gone", None).await.unwrap();

    assert_eq!(repo.delete(id).await.unwrap(), 1);
    assert!(matches!(repo.get_by_id(id).await.unwrap_err(), RepoError::NotFound(_)));
    assert_eq!(repo.delete(id).await.unwrap(), 0);
}

#[tokio::test]
async fn list_filters_by_substring() {
    let repo = repo().await;
    repo.create("abc widget", Some("red")).await.unwrap();
    repo.create("xabcx", Some("blue")).await.unwrap();
    repo.create("nothing here", Some("red and blue")).await.unwrap();
    repo.create("ab c", None).await.unwrap();

    let by_name = repo.list(&ItemFilter::by_name("abc")).await.unwrap();
    assert_eq!(names(&by_name), HashSet::from(["abc widget".to_string(), "xabcx".to_string()]));

    let by_description = repo.list(&ItemFilter::by_description("blue")).await.unwrap();
    assert_eq!(
        names(&by_description),
        HashSet::from(["xabcx".to_string(), "nothing here".to_string()])
    );

    let both = ItemFilter {
        name: Some("abc".into()),
        description: Some("red".into()),
    };
    assert_eq!(names(&repo.list(&both).await.unwrap()), HashSet::from(["abc widget".to_string()]));

    assert_eq!(repo.list(&ItemFilter::default()).await.unwrap().len(), 4);
}

#[tokio::test]
async fn list_filter_is_ascii_case_insensitive() {
    let repo = repo().await;
    repo.create("Gadget", None).await.unwrap();

    let found = repo.list(&ItemFilter::by_name("gAD")).await.unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn list_filter_treats_wildcards_literally() {
    let repo = repo().await;
    repo.create("50% off", None).await.unwrap();
    repo.create("500 off", None).await.unwrap();
    repo.create("snake_case", None).await.unwrap();
    repo.create("snakeXcase", None).await.unwrap();

    let percent = repo.list(&ItemFilter::by_name("0%")).await.unwrap();
    assert_eq!(names(&percent), HashSet::from(["50% off".to_string()]));

    let underscore = repo.list(&ItemFilter::by_name("e_c")).await.unwrap();
    assert_eq!(names(&underscore), HashSet::from(["snake_case".to_string()]));
}

#[tokio::test]
async fn description_filter_skips_null_descriptions() {
    let repo = repo().await;
    repo.create("no description", None).await.unwrap();
    repo.create("with description", Some("text")).await.unwrap();

    let found = repo.list(&ItemFilter::by_description("t")).await.unwrap();
    assert_eq!(names(&found), HashSet::from(["with description".to_string()]));
}

#[tokio::test]
async fn closed_pool_surfaces_storage_error() {
    let pool = open_in_memory().await.unwrap();
    let repo = SqliteItemRepository::new(pool.clone());
    pool.close().await;

    let err = repo.create("x", None).await.unwrap_err();
    assert!(matches!(err, RepoError::Storage(_)));
}

#[tokio::test]
async fn check_requires_items_table() {
    let pool = open_in_memory().await.unwrap();
    let repo = SqliteItemRepository::new(pool.clone());
    repo.check().await.unwrap();

    sqlx::query("DROP TABLE items").execute(&pool).await.unwrap();
    assert!(matches!(repo.check().await.unwrap_err(), RepoError::Storage(_)));
}
