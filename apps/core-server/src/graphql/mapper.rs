use async_graphql::ID;
use blog_core::service::blog::dto::{
    BlogNotFoundErrorDTO, BlogResponseDTO, BlogTitleExistsErrorDTO, CreateBlogRequestDTO,
    GetBlogListQueryDTO, UpdateBlogRequestDTO,
};
use shared_types::BlogId;
use validator::Validate;

use super::dto::{
    BlogNotFoundErrorGraphQLDTO, BlogResponseGraphQLDTO, BlogTitleExistsErrorGraphQLDTO,
    CreateBlogInputGraphQLDTO, UpdateBlogInputGraphQLDTO,
};
use super::error::{ValidationError, validation_error};

pub(super) fn blog_id_to_graphql(id: BlogId) -> ID {
    ID(id.to_string())
}

impl From<BlogResponseDTO> for BlogResponseGraphQLDTO {
    fn from(value: BlogResponseDTO) -> Self {
        match value {
            BlogResponseDTO::Blog(blog) => Self::Blog(blog.into()),
            BlogResponseDTO::NotFound(error) => Self::BlogNotFoundError(error.into()),
            BlogResponseDTO::TitleExists(error) => Self::BlogTitleExistsError(error.into()),
        }
    }
}

impl From<BlogNotFoundErrorDTO> for BlogNotFoundErrorGraphQLDTO {
    fn from(value: BlogNotFoundErrorDTO) -> Self {
        Self {
            message: value.message(),
            code: value.code().as_str().to_owned(),
            id: ID(value.id),
        }
    }
}

impl From<BlogTitleExistsErrorDTO> for BlogTitleExistsErrorGraphQLDTO {
    fn from(value: BlogTitleExistsErrorDTO) -> Self {
        Self {
            message: value.message(),
            code: value.code().as_str().to_owned(),
            title: value.title,
        }
    }
}

impl TryFrom<CreateBlogInputGraphQLDTO> for CreateBlogRequestDTO {
    type Error = async_graphql::Error;

    fn try_from(value: CreateBlogInputGraphQLDTO) -> Result<Self, Self::Error> {
        value
            .validate()
            .map_err(|errors| validation_error(ValidationError::Input(errors)))?;

        Ok(Self {
            title: value.title,
            content: value.content,
        })
    }
}

impl TryFrom<UpdateBlogInputGraphQLDTO> for UpdateBlogRequestDTO {
    type Error = async_graphql::Error;

    fn try_from(value: UpdateBlogInputGraphQLDTO) -> Result<Self, Self::Error> {
        value
            .validate()
            .map_err(|errors| validation_error(ValidationError::Input(errors)))?;

        let id = value
            .id
            .parse::<BlogId>()
            .map_err(|_| validation_error(ValidationError::InvalidId(value.id.to_string())))?;

        Ok(Self {
            id,
            title: value.title,
            content: value.content,
        })
    }
}

pub(super) fn list_query_from_args(
    skip: i32,
    take: i32,
) -> Result<GetBlogListQueryDTO, async_graphql::Error> {
    let skip = u64::try_from(skip)
        .map_err(|_| validation_error(ValidationError::Negative { name: "skip", value: skip }))?;
    let take = u64::try_from(take)
        .map_err(|_| validation_error(ValidationError::Negative { name: "take", value: take }))?;

    Ok(GetBlogListQueryDTO { skip, take })
}
