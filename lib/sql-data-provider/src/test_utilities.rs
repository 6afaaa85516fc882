use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use shared_types::BlogId;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::entity::blog;
use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub async fn insert_blog_to_database(
    database: &DatabaseConnection,
    title: &str,
    created_at: OffsetDateTime,
) -> Result<BlogId, DbErr> {
    let blog = blog::ActiveModel {
        id: Set(BlogId::new_v4()),
        title: Set(title.to_owned()),
        content: Set(format!("{title} content")),
        created_at: Set(created_at),
        updated_at: Set(created_at),
    }
    .insert(database)
    .await?;

    Ok(blog.id)
}

pub async fn setup_test_data_layer_and_connection_with_custom_url(database_url: &str) -> DataLayer {
    let db_conn = db_conn(database_url).await.unwrap();
    DataLayer::build(db_conn)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    setup_test_data_layer_and_connection_with_custom_url("sqlite::memory:").await
}
