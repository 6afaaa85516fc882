use async_graphql::{Context, ID, Object};
use one_dto_mapper::convert_inner;

use super::AppState;
use super::dto::{BlogGraphQLDTO, BlogResponseGraphQLDTO};
use super::error::to_graphql_error;
use super::mapper::list_query_from_args;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Page of blogs ordered by creation date
    async fn blogs(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 0)] skip: i32,
        #[graphql(default = 10)] take: i32,
    ) -> async_graphql::Result<Vec<BlogGraphQLDTO>> {
        let query = list_query_from_args(skip, take)?;
        let state = ctx.data::<AppState>()?;

        let blogs = state
            .core
            .blog_resolver
            .get_blogs(query)
            .await
            .map_err(|error| to_graphql_error(error, state, "listing blogs"))?;

        Ok(convert_inner(blogs))
    }

    async fn blog(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<BlogResponseGraphQLDTO> {
        let state = ctx.data::<AppState>()?;

        let response = state
            .core
            .blog_resolver
            .get_blog_by_id(&id)
            .await
            .map_err(|error| to_graphql_error(error, state, "fetching blog"))?;

        Ok(response.into())
    }
}
