use autometrics::autometrics;
use blog_core::model::blog::{Blog, BlogListQuery, UpdateBlogRequest};
use blog_core::repository::blog_repository::BlogRepository;
use blog_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use shared_types::BlogId;

use super::BlogProvider;
use crate::entity::blog;
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

#[autometrics]
#[async_trait::async_trait]
impl BlogRepository for BlogProvider {
    async fn create(&self, request: Blog) -> Result<BlogId, DataLayerError> {
        let blog = blog::Entity::insert(blog::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(blog.last_insert_id)
    }

    async fn get(&self, id: &BlogId) -> Result<Option<Blog>, DataLayerError> {
        let blog = blog::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(blog))
    }

    async fn list(&self, query: BlogListQuery) -> Result<Vec<Blog>, DataLayerError> {
        let blogs: Vec<blog::Model> = blog::Entity::find()
            .order_by_asc(blog::Column::CreatedAt)
            .order_by_asc(blog::Column::Id)
            .offset(query.skip)
            .limit(query.take)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(blogs))
    }

    async fn update(&self, request: UpdateBlogRequest) -> Result<(), DataLayerError> {
        blog::Entity::update(blog::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }

    async fn delete(&self, id: &BlogId) -> Result<(), DataLayerError> {
        let result = blog::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }

    async fn count_by_title(&self, title: &str) -> Result<u64, DataLayerError> {
        blog::Entity::find()
            .filter(blog::Column::Title.eq(title))
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)
    }
}
