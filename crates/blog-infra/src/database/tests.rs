use blog_core::domain::{
    CreatePost, ListOptions, NewPost, Post, PostChanges, PostFilter, SortField, SortOrder,
};
use blog_core::ports::{BaseRepository, PostRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(title: &str, author: Option<&str>, tags: &[&str]) -> post::Model {
    let now = chrono::Utc::now();
    post::Model {
        id: uuid::Uuid::new_v4(),
        title: title.to_owned(),
        author: author.map(str::to_owned),
        contents: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let row = model("Test Post", Some("Test Author"), &["test"]);
    let post_id = row.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.tags, vec!["test".to_string()]);
}

#[tokio::test]
async fn test_find_post_by_id_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let row = model("Only a title", None, &[]);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let draft = NewPost::try_from(CreatePost::titled("Only a title")).unwrap();

    let post = repo.insert(draft).await.unwrap();
    assert_eq!(post.id, row.id);
    assert_eq!(post.created_at, post.updated_at);
}

#[tokio::test]
async fn test_find_by_tag_uses_array_membership() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            model("Learn React Hooks", Some("Daniel Bugl"), &["react"]),
            model("Full-Stack React Projects", Some("Teddy Wyatt"), &["react", "nodejs"]),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo
        .find(PostFilter::Tag("react".to_string()), ListOptions::default())
        .await
        .unwrap();
    assert_eq!(posts.len(), 2);

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("ANY"));
    assert!(log.contains("ORDER BY"));
}

#[tokio::test]
async fn test_find_orders_by_requested_column() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model("Learning Redux", None, &[])]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let options = ListOptions::new(SortField::Contents, SortOrder::Ascending);

    repo.find(PostFilter::All, options).await.unwrap();

    let log = format!("{:?}", repo.db.into_transaction_log());
    let order_by = &log[log.find("ORDER BY").unwrap()..];
    assert!(order_by.contains("contents"));
    assert!(order_by.contains("ASC"));
}

#[tokio::test]
async fn test_update_missing_post_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let changes = PostChanges {
        author: Some("Dr. Angel Wyatt".to_string()),
        ..PostChanges::default()
    };

    let result = repo.update(uuid::Uuid::new_v4(), changes).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_reports_removed_count() {
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
    let id = uuid::Uuid::new_v4();

    let removed = BaseRepository::<Post, uuid::Uuid>::delete(&repo, id).await.unwrap();
    assert_eq!(removed, 1);
    let removed = BaseRepository::<Post, uuid::Uuid>::delete(&repo, id).await.unwrap();
    assert_eq!(removed, 0);
}
