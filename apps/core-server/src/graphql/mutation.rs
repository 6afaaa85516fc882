use async_graphql::{Context, ID, Object};
use blog_core::service::blog::dto::{CreateBlogRequestDTO, UpdateBlogRequestDTO};

use super::AppState;
use super::dto::{BlogResponseGraphQLDTO, CreateBlogInputGraphQLDTO, UpdateBlogInputGraphQLDTO};
use super::error::to_graphql_error;

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a blog and notifies `blogAdded` subscribers
    async fn create_blog(
        &self,
        ctx: &Context<'_>,
        input: CreateBlogInputGraphQLDTO,
    ) -> async_graphql::Result<BlogResponseGraphQLDTO> {
        let request: CreateBlogRequestDTO = input.try_into()?;
        let state = ctx.data::<AppState>()?;

        let response = state
            .core
            .blog_resolver
            .create_blog(request)
            .await
            .map_err(|error| to_graphql_error(error, state, "creating blog"))?;

        Ok(response.into())
    }

    async fn update_blog(
        &self,
        ctx: &Context<'_>,
        input: UpdateBlogInputGraphQLDTO,
    ) -> async_graphql::Result<BlogResponseGraphQLDTO> {
        let request: UpdateBlogRequestDTO = input.try_into()?;
        let state = ctx.data::<AppState>()?;

        let response = state
            .core
            .blog_resolver
            .update_blog(request)
            .await
            .map_err(|error| to_graphql_error(error, state, "updating blog"))?;

        Ok(response.into())
    }

    /// Returns the deleted blog
    async fn delete_blog(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<BlogResponseGraphQLDTO> {
        let state = ctx.data::<AppState>()?;

        let response = state
            .core
            .blog_resolver
            .delete_blog(&id)
            .await
            .map_err(|error| to_graphql_error(error, state, "deleting blog"))?;

        Ok(response.into())
    }
}
