use shared_types::BlogId;

use super::BlogService;
use super::dto::{
    BlogNotFoundErrorDTO, BlogResponseDTO, CreateBlogRequestDTO, DeleteBlogResultDTO, GetBlogListQueryDTO,
    UpdateBlogRequestDTO,
};
use super::mapper::{
    blog_from_create_request, merge_update, now_utc_millis, update_request_from_dto,
};
use crate::model::blog::Blog;
use crate::repository::error::DataLayerError;
use crate::service::error::ServiceError;

impl BlogService {
    /// Returns a page of blogs in storage order
    pub async fn find_all(&self, query: GetBlogListQueryDTO) -> Result<Vec<Blog>, ServiceError> {
        Ok(self.blog_repository.list(query.into()).await?)
    }

    pub async fn find_one(&self, id: &BlogId) -> Result<Option<Blog>, ServiceError> {
        tracing::debug!("Fetching blog {id}");
        Ok(self.blog_repository.get(id).await?)
    }

    /// Creates a new blog
    ///
    /// # Arguments
    ///
    /// * `request` - title and content of the new blog
    ///
    /// Returns [`BlogResponseDTO::TitleExists`] if the title is already taken.
    pub async fn create(
        &self,
        request: CreateBlogRequestDTO,
    ) -> Result<BlogResponseDTO, ServiceError> {
        if self.title_exists(&request.title).await? {
            tracing::info!("Blog with title \"{}\" already exists", request.title);
            return Ok(BlogResponseDTO::title_exists(request.title));
        }

        let blog = blog_from_create_request(request, now_utc_millis());

        match self.blog_repository.create(blog.clone()).await {
            Ok(id) => {
                tracing::info!("Created blog {id}");
                Ok(BlogResponseDTO::Blog(blog))
            }
            // another request claimed the title between the check and the insert
            Err(DataLayerError::AlreadyExists) => Ok(BlogResponseDTO::title_exists(blog.title)),
            Err(error) => Err(error.into()),
        }
    }

    /// Applies a partial update to `existing`
    ///
    /// The title uniqueness check only runs if the title actually changes.
    pub async fn update(
        &self,
        existing: Blog,
        request: UpdateBlogRequestDTO,
    ) -> Result<BlogResponseDTO, ServiceError> {
        if let Some(title) = request.title.as_deref() {
            if title != existing.title && self.title_exists(title).await? {
                tracing::info!("Blog with title \"{title}\" already exists");
                return Ok(BlogResponseDTO::title_exists(title));
            }
        }

        let update = update_request_from_dto(request, now_utc_millis());

        match self.blog_repository.update(update.clone()).await {
            Ok(()) => {}
            Err(DataLayerError::AlreadyExists) => {
                let title = update.title.unwrap_or(existing.title);
                tracing::info!("Blog with title \"{title}\" already exists");
                return Ok(BlogResponseDTO::title_exists(title));
            }
            Err(DataLayerError::RecordNotUpdated) => {
                return Ok(BlogResponseDTO::not_found(existing.id));
            }
            Err(error) => return Err(error.into()),
        }

        tracing::info!("Updated blog {}", existing.id);
        Ok(BlogResponseDTO::Blog(merge_update(existing, update)))
    }

    pub async fn remove(&self, id: &BlogId) -> Result<DeleteBlogResultDTO, ServiceError> {
        match self.blog_repository.delete(id).await {
            Ok(()) => {
                tracing::info!("Deleted blog {id}");
                Ok(DeleteBlogResultDTO::Deleted)
            }
            Err(DataLayerError::RecordNotUpdated) => {
                Ok(DeleteBlogResultDTO::NotFound(BlogNotFoundErrorDTO {
                    id: id.to_string(),
                }))
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Exact, case-sensitive title lookup
    pub async fn title_exists(&self, title: &str) -> Result<bool, ServiceError> {
        let count = self
            .blog_repository
            .count_by_title(title)
            .await
            .map_err(ServiceError::TitleCheckFailed)?;

        tracing::debug!("Found {count} blog(s) titled \"{title}\"");
        Ok(count > 0)
    }
}
