use shared_types::BlogId;
use time::{Duration, OffsetDateTime};

use super::dto::{
    BlogNotFoundErrorDTO, BlogResponseDTO, BlogTitleExistsErrorDTO, CreateBlogRequestDTO,
    GetBlogListQueryDTO, UpdateBlogRequestDTO,
};
use crate::model::blog::{Blog, BlogListQuery, UpdateBlogRequest};

/// Current time truncated to the millisecond precision the store keeps
pub(super) fn now_utc_millis() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now - Duration::nanoseconds(i64::from(now.nanosecond() % 1_000_000))
}

pub(super) fn blog_from_create_request(request: CreateBlogRequestDTO, now: OffsetDateTime) -> Blog {
    Blog {
        id: BlogId::new_v4(),
        title: request.title,
        content: request.content,
        created_at: now,
        updated_at: now,
    }
}

pub(super) fn update_request_from_dto(
    request: UpdateBlogRequestDTO,
    now: OffsetDateTime,
) -> UpdateBlogRequest {
    UpdateBlogRequest {
        id: request.id,
        title: request.title,
        content: request.content,
        updated_at: now,
    }
}

pub(super) fn merge_update(existing: Blog, update: UpdateBlogRequest) -> Blog {
    Blog {
        title: update.title.unwrap_or(existing.title),
        content: update.content.unwrap_or(existing.content),
        updated_at: update.updated_at,
        ..existing
    }
}

impl From<GetBlogListQueryDTO> for BlogListQuery {
    fn from(value: GetBlogListQueryDTO) -> Self {
        Self {
            skip: value.skip,
            take: value.take,
        }
    }
}

impl BlogResponseDTO {
    pub(crate) fn not_found(id: impl ToString) -> Self {
        Self::NotFound(BlogNotFoundErrorDTO { id: id.to_string() })
    }

    pub(crate) fn title_exists(title: impl Into<String>) -> Self {
        Self::TitleExists(BlogTitleExistsErrorDTO {
            title: title.into(),
        })
    }
}
