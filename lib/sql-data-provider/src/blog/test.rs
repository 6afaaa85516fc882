use blog_core::model::blog::{Blog, BlogListQuery, UpdateBlogRequest};
use blog_core::repository::blog_repository::BlogRepository;
use blog_core::repository::error::DataLayerError;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait};
use shared_types::BlogId;
use time::Duration;

use super::BlogProvider;
use crate::entity::blog;
use crate::test_utilities::{
    get_dummy_date, insert_blog_to_database, setup_test_data_layer_and_connection,
};

struct TestSetup {
    pub db: DatabaseConnection,
    pub provider: BlogProvider,
}

async fn setup() -> TestSetup {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db;

    TestSetup {
        provider: BlogProvider { db: db.clone() },
        db,
    }
}

fn dummy_blog(title: &str) -> Blog {
    Blog {
        id: BlogId::new_v4(),
        title: title.to_owned(),
        content: "Some content".to_owned(),
        created_at: get_dummy_date(),
        updated_at: get_dummy_date(),
    }
}

#[tokio::test]
async fn test_create_blog_success() {
    let TestSetup { db, provider } = setup().await;
    let blog = dummy_blog("Hello");

    let id = provider.create(blog.clone()).await.unwrap();
    assert_eq!(id, blog.id);

    let stored = blog::Entity::find_by_id(id).one(&db).await.unwrap().unwrap();
    assert_eq!(stored.title, "Hello");
    assert_eq!(stored.content, "Some content");
    assert_eq!(stored.created_at, get_dummy_date());
}

#[tokio::test]
async fn test_create_blog_duplicate_title() {
    let TestSetup { provider, .. } = setup().await;

    provider.create(dummy_blog("Hello")).await.unwrap();
    let result = provider.create(dummy_blog("Hello")).await;

    assert!(matches!(result, Err(DataLayerError::AlreadyExists)));
}

#[tokio::test]
async fn test_get_blog() {
    let TestSetup { db, provider } = setup().await;
    let id = insert_blog_to_database(&db, "Hello", get_dummy_date())
        .await
        .unwrap();

    let blog = provider.get(&id).await.unwrap().unwrap();
    assert_eq!(blog.id, id);
    assert_eq!(blog.title, "Hello");
    assert_eq!(blog.content, "Hello content");
    assert_eq!(blog.created_at, get_dummy_date());
    assert_eq!(blog.updated_at, get_dummy_date());

    let missing = provider.get(&BlogId::new_v4()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_list_blogs_is_ordered_and_paginated() {
    let TestSetup { db, provider } = setup().await;
    let start = get_dummy_date();
    for (offset, title) in ["First", "Second", "Third"].into_iter().enumerate() {
        insert_blog_to_database(&db, title, start + Duration::minutes(offset as i64))
            .await
            .unwrap();
    }

    let all = provider
        .list(BlogListQuery { skip: 0, take: 10 })
        .await
        .unwrap();
    let titles: Vec<_> = all.iter().map(|blog| blog.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second", "Third"]);

    let page = provider
        .list(BlogListQuery { skip: 1, take: 1 })
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].title, "Second");

    let empty = provider
        .list(BlogListQuery { skip: 5, take: 10 })
        .await
        .unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_update_blog_partial() {
    let TestSetup { db, provider } = setup().await;
    let id = insert_blog_to_database(&db, "Hello", get_dummy_date())
        .await
        .unwrap();
    let modified = get_dummy_date() + Duration::hours(1);

    provider
        .update(UpdateBlogRequest {
            id,
            title: None,
            content: Some("Updated".to_owned()),
            updated_at: modified,
        })
        .await
        .unwrap();

    let stored = provider.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Hello");
    assert_eq!(stored.content, "Updated");
    assert_eq!(stored.created_at, get_dummy_date());
    assert_eq!(stored.updated_at, modified);
}

#[tokio::test]
async fn test_update_blog_missing() {
    let TestSetup { provider, .. } = setup().await;

    let result = provider
        .update(UpdateBlogRequest {
            id: BlogId::new_v4(),
            title: Some("Hello".to_owned()),
            content: None,
            updated_at: get_dummy_date(),
        })
        .await;

    assert!(matches!(result, Err(DataLayerError::RecordNotUpdated)));
}

#[tokio::test]
async fn test_update_blog_to_taken_title() {
    let TestSetup { db, provider } = setup().await;
    insert_blog_to_database(&db, "Hello", get_dummy_date())
        .await
        .unwrap();
    let id = insert_blog_to_database(&db, "World", get_dummy_date())
        .await
        .unwrap();

    let result = provider
        .update(UpdateBlogRequest {
            id,
            title: Some("Hello".to_owned()),
            content: None,
            updated_at: get_dummy_date(),
        })
        .await;

    assert!(matches!(result, Err(DataLayerError::AlreadyExists)));
    assert_eq!(provider.get(&id).await.unwrap().unwrap().title, "World");
}

#[tokio::test]
async fn test_delete_blog() {
    let TestSetup { db, provider } = setup().await;
    let id = insert_blog_to_database(&db, "Hello", get_dummy_date())
        .await
        .unwrap();

    provider.delete(&id).await.unwrap();
    assert!(provider.get(&id).await.unwrap().is_none());

    let again = provider.delete(&id).await;
    assert!(matches!(again, Err(DataLayerError::RecordNotUpdated)));
}

#[tokio::test]
async fn test_count_by_title_is_exact() {
    let TestSetup { db, provider } = setup().await;
    insert_blog_to_database(&db, "Hello", get_dummy_date())
        .await
        .unwrap();

    assert_eq!(provider.count_by_title("Hello").await.unwrap(), 1);
    assert_eq!(provider.count_by_title("hello").await.unwrap(), 0);
    assert_eq!(provider.count_by_title("Hello ").await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_with_undecodable_row_fails_with_mapping_error() {
    let TestSetup { db, provider } = setup().await;
    db.execute_unprepared(
        "INSERT INTO blog (id, title, content, created_date, last_modified) \
         VALUES ('broken', 'Broken', 'x', '2005-04-02 20:37:00', '2005-04-02 20:37:00')",
    )
    .await
    .unwrap();

    let result = provider.list(BlogListQuery { skip: 0, take: 10 }).await;
    assert!(matches!(result, Err(DataLayerError::MappingError)));
}
