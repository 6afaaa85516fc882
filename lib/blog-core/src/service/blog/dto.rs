use shared_types::BlogId;

use crate::model::blog::Blog;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateBlogRequestDTO {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateBlogRequestDTO {
    pub id: BlogId,
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetBlogListQueryDTO {
    pub skip: u64,
    pub take: u64,
}

/// Outcome of a blog operation; expected domain failures are values, not errors
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BlogResponseDTO {
    Blog(Blog),
    NotFound(BlogNotFoundErrorDTO),
    TitleExists(BlogTitleExistsErrorDTO),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeleteBlogResultDTO {
    Deleted,
    NotFound(BlogNotFoundErrorDTO),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlogErrorCode {
    BlogNotFound,
    BlogTitleExists,
}

impl BlogErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BlogNotFound => "BLOG_NOT_FOUND",
            Self::BlogTitleExists => "BLOG_TITLE_EXISTS",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlogNotFoundErrorDTO {
    /// As supplied by the caller, may not be a well-formed id
    pub id: String,
}

impl BlogNotFoundErrorDTO {
    pub fn code(&self) -> BlogErrorCode {
        BlogErrorCode::BlogNotFound
    }

    pub fn message(&self) -> String {
        format!("Blog with ID {} not found", self.id)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlogTitleExistsErrorDTO {
    pub title: String,
}

impl BlogTitleExistsErrorDTO {
    pub fn code(&self) -> BlogErrorCode {
        BlogErrorCode::BlogTitleExists
    }

    pub fn message(&self) -> String {
        format!("Blog with title \"{}\" already exists", self.title)
    }
}
