pub mod blog;
pub mod blog_resolver;
pub mod error;

#[cfg(test)]
pub(crate) mod test_utilities;
