mod blog_id;

pub use blog_id::BlogId;
