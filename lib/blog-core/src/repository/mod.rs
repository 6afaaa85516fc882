use std::sync::Arc;

use blog_repository::BlogRepository;

pub mod blog_repository;
pub mod error;

pub trait DataRepository: Send + Sync {
    fn get_blog_repository(&self) -> Arc<dyn BlogRepository>;
}
