use async_graphql::{Context, Subscription};
use futures::StreamExt;
use futures::stream::BoxStream;

use super::AppState;
use super::dto::BlogGraphQLDTO;
use super::error::to_graphql_error;

#[derive(Default)]
pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Blogs created after the subscription was established
    async fn blog_added(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<BoxStream<'static, BlogGraphQLDTO>> {
        let state = ctx.data::<AppState>()?;

        let stream = state
            .core
            .blog_resolver
            .blog_added()
            .map_err(|error| to_graphql_error(error, state, "subscribing to blogAdded"))?;

        Ok(stream.map(BlogGraphQLDTO::from).boxed())
    }
}
