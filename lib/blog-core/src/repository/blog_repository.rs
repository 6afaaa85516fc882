use shared_types::BlogId;

use super::error::DataLayerError;
use crate::model::blog::{Blog, BlogListQuery, UpdateBlogRequest};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait BlogRepository: Send + Sync {
    async fn create(&self, request: Blog) -> Result<BlogId, DataLayerError>;

    async fn get(&self, id: &BlogId) -> Result<Option<Blog>, DataLayerError>;

    async fn list(&self, query: BlogListQuery) -> Result<Vec<Blog>, DataLayerError>;

    /// Fails with [`DataLayerError::RecordNotUpdated`] if no blog with the given id exists
    async fn update(&self, request: UpdateBlogRequest) -> Result<(), DataLayerError>;

    /// Fails with [`DataLayerError::RecordNotUpdated`] if no row was removed
    async fn delete(&self, id: &BlogId) -> Result<(), DataLayerError>;

    async fn count_by_title(&self, title: &str) -> Result<u64, DataLayerError>;
}
