use std::sync::Arc;

use crate::repository::blog_repository::BlogRepository;

pub mod dto;
mod mapper;
pub mod service;

#[derive(Clone)]
pub struct BlogService {
    blog_repository: Arc<dyn BlogRepository>,
}

impl BlogService {
    pub fn new(blog_repository: Arc<dyn BlogRepository>) -> Self {
        Self { blog_repository }
    }
}
