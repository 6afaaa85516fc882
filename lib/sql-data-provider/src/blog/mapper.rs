use blog_core::model::blog::{Blog, UpdateBlogRequest};
use sea_orm::{NotSet, Set};

use crate::entity::blog;

impl From<Blog> for blog::ActiveModel {
    fn from(value: Blog) -> Self {
        Self {
            id: Set(value.id),
            title: Set(value.title),
            content: Set(value.content),
            created_at: Set(value.created_at),
            updated_at: Set(value.updated_at),
        }
    }
}

impl From<UpdateBlogRequest> for blog::ActiveModel {
    fn from(value: UpdateBlogRequest) -> Self {
        Self {
            id: Set(value.id),
            title: value.title.map(Set).unwrap_or(NotSet),
            content: value.content.map(Set).unwrap_or(NotSet),
            updated_at: Set(value.updated_at),
            ..Default::default()
        }
    }
}
