use futures::StreamExt;
use futures::stream::BoxStream;
use shared_types::BlogId;

use super::BlogResolver;
use super::error::ResolverError;
use crate::model::blog::Blog;
use crate::provider::notification::{BLOG_ADDED, NotificationPayload};
use crate::service::blog::dto::{
    BlogResponseDTO, CreateBlogRequestDTO, DeleteBlogResultDTO, GetBlogListQueryDTO,
    UpdateBlogRequestDTO,
};

impl BlogResolver {
    pub async fn get_blogs(&self, query: GetBlogListQueryDTO) -> Result<Vec<Blog>, ResolverError> {
        Ok(self.blog_service.find_all(query).await?)
    }

    /// Ids that are not well-formed resolve to not found
    pub async fn get_blog_by_id(&self, id: &str) -> Result<BlogResponseDTO, ResolverError> {
        let Ok(blog_id) = id.parse::<BlogId>() else {
            return Ok(BlogResponseDTO::not_found(id));
        };

        Ok(match self.blog_service.find_one(&blog_id).await? {
            Some(blog) => BlogResponseDTO::Blog(blog),
            None => BlogResponseDTO::not_found(id),
        })
    }

    /// Creates a blog and announces it on [`BLOG_ADDED`]
    pub async fn create_blog(
        &self,
        request: CreateBlogRequestDTO,
    ) -> Result<BlogResponseDTO, ResolverError> {
        let response = self.blog_service.create(request).await?;

        if let BlogResponseDTO::Blog(blog) = &response {
            let payload = NotificationPayload::BlogAdded(blog.clone());
            if let Err(source) = self.notification_channel.publish(BLOG_ADDED, payload).await {
                tracing::warn!("Blog {} created, publishing {BLOG_ADDED} failed: {source}", blog.id);
                return Err(ResolverError::PublishFailed {
                    blog: Box::new(blog.clone()),
                    source,
                });
            }
        }

        Ok(response)
    }

    pub async fn update_blog(
        &self,
        request: UpdateBlogRequestDTO,
    ) -> Result<BlogResponseDTO, ResolverError> {
        let Some(existing) = self.blog_service.find_one(&request.id).await? else {
            return Ok(BlogResponseDTO::not_found(request.id));
        };

        Ok(self.blog_service.update(existing, request).await?)
    }

    /// Returns the record as it was before removal
    pub async fn delete_blog(&self, id: &str) -> Result<BlogResponseDTO, ResolverError> {
        let Ok(blog_id) = id.parse::<BlogId>() else {
            return Ok(BlogResponseDTO::not_found(id));
        };

        let Some(existing) = self.blog_service.find_one(&blog_id).await? else {
            return Ok(BlogResponseDTO::not_found(id));
        };

        Ok(match self.blog_service.remove(&blog_id).await? {
            DeleteBlogResultDTO::Deleted => BlogResponseDTO::Blog(existing),
            DeleteBlogResultDTO::NotFound(error) => BlogResponseDTO::NotFound(error),
        })
    }

    /// Live stream of blogs created after this call, nothing earlier is replayed
    pub fn blog_added(&self) -> Result<BoxStream<'static, Blog>, ResolverError> {
        let stream = self
            .notification_channel
            .subscribe(BLOG_ADDED)
            .map_err(ResolverError::SubscriptionFailed)?;

        Ok(stream
            .map(|payload| match payload {
                NotificationPayload::BlogAdded(blog) => blog,
            })
            .boxed())
    }
}
