use std::sync::Arc;

use cars_core::domain::{Post, User};
use cars_core::error::RepoError;
use cars_core::ports::{BaseRepository, PostRepository, UserRepository};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

use crate::database::entity::{post, user};
use crate::database::{SeaOrmPostRepository, SeaOrmUserRepository};

fn user_model(id: i32, login: &str) -> user::Model {
    user::Model {
        id,
        login: login.to_owned(),
        password: "secret".to_owned(),
    }
}

#[tokio::test]
async fn test_create_user_returns_assigned_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_model(7, "john")]])
        .into_connection();

    let repo = SeaOrmUserRepository::new(Arc::new(db));

    let created = repo.create(User::new("john", "secret")).await.unwrap();

    assert_eq!(created.id, 7);
    assert_eq!(created.login, "john");
}

#[tokio::test]
async fn test_find_user_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_model(3, "jane")]])
        .into_connection();

    let repo = SeaOrmUserRepository::new(Arc::new(db));

    let result: Option<User> = repo.find_by_id(3).await.unwrap();

    let user = result.unwrap();
    assert_eq!(user.id, 3);
    assert_eq!(user.login, "jane");
}

#[tokio::test]
async fn test_find_by_login_absent_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<user::Model>::new()])
        .into_connection();

    let repo = SeaOrmUserRepository::new(Arc::new(db));

    assert!(repo.find_by_login("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_keeps_store_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            user_model(1, "john"),
            user_model(2, "jane"),
            user_model(5, "bigjohn"),
        ]])
        .into_connection();

    let repo = SeaOrmUserRepository::new(Arc::new(db));

    let ids: Vec<i32> = repo
        .find_all_order_by_id()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, [1, 2, 5]);
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    // No row comes back from UPDATE ... RETURNING.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<user::Model>::new()])
        .into_connection();

    let repo = SeaOrmUserRepository::new(Arc::new(db));

    let user = User {
        id: 99,
        ..User::new("nobody", "secret")
    };
    let err = repo.update(user).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SeaOrmUserRepository::new(Arc::new(db));

    let err = repo.delete(99).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_user_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = SeaOrmUserRepository::new(Arc::new(db));

    assert!(repo.delete(4).await.is_ok());
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Custom("connection reset by peer".to_owned())])
        .into_connection();

    let repo = SeaOrmUserRepository::new(Arc::new(db));

    match repo.find_by_like_login("ohn").await {
        Err(RepoError::Query(msg)) => assert!(msg.contains("connection reset by peer")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_find_posts_by_user_id() {
    let now = chrono::Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: 11,
            description: "Sedan, low mileage".to_owned(),
            created: now,
            user_id: 3,
            price_history_id: None,
        }]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(Arc::new(db));

    let posts: Vec<Post> = repo.find_by_user_id(3).await.unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 11);
    assert_eq!(posts[0].user_id, 3);
    assert_eq!(posts[0].created, now);
}
