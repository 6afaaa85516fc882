use async_graphql::{ID, InputObject, SimpleObject, Union};
use blog_core::model::blog::Blog;
use one_dto_mapper::From;
use time::OffsetDateTime;
use validator::Validate;

use super::mapper::blog_id_to_graphql;

#[derive(Clone, Debug, SimpleObject, From)]
#[graphql(name = "Blog")]
#[from(Blog)]
pub struct BlogGraphQLDTO {
    #[from(with_fn = blog_id_to_graphql)]
    pub id: ID,
    pub title: String,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "BlogNotFoundError")]
pub struct BlogNotFoundErrorGraphQLDTO {
    pub id: ID,
    pub message: String,
    pub code: String,
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "BlogTitleExistsError")]
pub struct BlogTitleExistsErrorGraphQLDTO {
    pub title: String,
    pub message: String,
    pub code: String,
}

#[derive(Clone, Debug, Union)]
#[graphql(name = "BlogResponse")]
pub enum BlogResponseGraphQLDTO {
    Blog(BlogGraphQLDTO),
    BlogNotFoundError(BlogNotFoundErrorGraphQLDTO),
    BlogTitleExistsError(BlogTitleExistsErrorGraphQLDTO),
}

#[derive(Clone, Debug, InputObject, Validate)]
#[graphql(name = "CreateBlogInput")]
pub struct CreateBlogInputGraphQLDTO {
    #[validate(length(min = 3, max = 100))]
    pub title: String,
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
}

/// Absent fields are left unchanged
#[derive(Clone, Debug, InputObject, Validate)]
#[graphql(name = "UpdateBlogInput")]
pub struct UpdateBlogInputGraphQLDTO {
    pub id: ID,
    #[validate(length(min = 3, max = 100))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub content: Option<String>,
}
