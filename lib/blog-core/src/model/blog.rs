use serde::Serialize;
use shared_types::BlogId;
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Partial update of a stored blog, `None` fields are left untouched
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateBlogRequest {
    pub id: BlogId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlogListQuery {
    pub skip: u64,
    pub take: u64,
}
