use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use uuid::Uuid;

use blog_core::domain::{Post, PostPatch};
use blog_core::ports::{PageRequest, PostRepository};

use super::entity::post;
use super::postgres_repo::PostgresPostRepository;

fn sample_model(title: &str) -> post::Model {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    post::Model {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        author: "Jane".to_owned(),
        body: "...".to_owned(),
        category: vec!["life".to_owned()],
        favorite: false,
        tags: None,
        excerpt: None,
        date: now.into(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn find_by_id_returns_the_mapped_post() {
    let model = sample_model("My First Post");
    let id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.title, "My First Post");
    assert_eq!(found.category, vec!["life".to_owned()]);
}

#[tokio::test]
async fn find_by_id_maps_missing_row_to_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn create_returns_the_inserted_row() {
    let model = sample_model("hello world");
    let post: Post = model.clone().into();

    // Postgres insert goes through RETURNING, so the mock answers a query.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let created = repo.create(post.clone()).await.unwrap();
    assert_eq!(created, post);
}

#[tokio::test]
async fn update_applies_patch_and_saves() {
    let model = sample_model("old title here");
    let id = model.id;
    let mut updated = model.clone();
    updated.title = "a new title".to_owned();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .append_query_results(vec![vec![updated]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let patch = PostPatch {
        title: Some("a new title".to_owned()),
        ..Default::default()
    };
    let result = repo.update(id, patch).await.unwrap().unwrap();
    assert_eq!(result.title, "a new title");
}

#[tokio::test]
async fn update_of_missing_post_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let result = repo.update(Uuid::new_v4(), PostPatch::default()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_signals_not_found_on_zero_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    assert!(repo.delete(Uuid::new_v4()).await.unwrap());
    assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn count_reads_num_items() {
    let mut row = BTreeMap::new();
    row.insert("num_items", Value::BigInt(Some(3)));

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn find_page_reports_pagination_metadata() {
    let mut count_row = BTreeMap::new();
    count_row.insert("num_items", Value::BigInt(Some(21)));

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![count_row]])
        .append_query_results(vec![vec![sample_model("page two post")]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let (posts, meta) = repo
        .find_page(PageRequest { page: 2, limit: 10 })
        .await
        .unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(meta.total, 21);
    assert_eq!(meta.page, 2);
    assert_eq!(meta.limit, 10);
    assert_eq!(meta.total_pages, 3);
}

#[tokio::test]
async fn search_maps_matches() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![sample_model("Alice in Wonderland")]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let results = repo.search("alice").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Alice in Wonderland");
}
