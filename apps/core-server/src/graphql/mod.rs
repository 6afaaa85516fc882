//! GraphQL surface of the blog service.
//!
//! Queries and mutations are served over HTTP, `blogAdded` over WebSocket.
//! Expected domain failures (missing blog, taken title) are members of the
//! `BlogResponse` union; everything else is a GraphQL error carrying an
//! `extensions.code`.

use std::sync::Arc;

use async_graphql::Schema;
use blog_core::BlogCore;

use crate::ServerConfig;

pub mod dto;
pub(crate) mod error;
mod mapper;
pub mod mutation;
pub mod query;
pub mod subscription;

#[cfg(test)]
mod test;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use subscription::SubscriptionRoot;

pub type BlogSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub(crate) struct InternalAppState {
    pub core: BlogCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub fn build_schema(core: BlogCore, config: Arc<ServerConfig>) -> BlogSchema {
    let state: AppState = Arc::new(InternalAppState { core, config });

    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(state)
        .finish()
}

/// Schema in SDL form, for client code generation and schema checks
pub fn export_schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .finish()
        .sdl()
}
