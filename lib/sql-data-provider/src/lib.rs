use std::sync::Arc;

use blog::BlogProvider;
use blog_core::repository::DataRepository;
use blog_core::repository::blog_repository::BlogRepository;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};

pub mod blog;
mod entity;
mod mapper;

#[cfg(test)]
mod test_utilities;

pub type DbConn = DatabaseConnection;

#[derive(Clone)]
pub struct DataLayer {
    // used by tests to inspect the raw tables
    #[allow(unused)]
    db: DbConn,
    blog_repository: Arc<dyn BlogRepository>,
}

impl DataLayer {
    pub fn build(db: DbConn) -> Self {
        let blog_repository = Arc::new(BlogProvider { db: db.clone() });

        Self {
            db,
            blog_repository,
        }
    }
}

impl DataRepository for DataLayer {
    fn get_blog_repository(&self) -> Arc<dyn BlogRepository> {
        self.blog_repository.clone()
    }
}

/// Connects to `database_url` and brings the schema up to date
pub async fn db_conn(database_url: &str) -> Result<DbConn, DbErr> {
    let db = sea_orm::Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;

    tracing::info!("Database schema up to date");
    Ok(db)
}
