use std::net::IpAddr;

use serde::{Deserialize, Serialize};

pub mod dto;
pub mod endpoint;
pub mod graphql;
pub mod metrics;
pub mod router;

mod middleware;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub database_url: String,
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    // when set to true hides the `cause` extension in GraphQL errors
    pub hide_error_response_cause: bool,
    /// whether the GraphiQL page is served on `GET /graphql`
    pub enable_graphiql: bool,
    /// whether endpoint metrics are available
    pub enable_metrics: bool,
    /// whether build-info and health endpoints are available
    pub enable_server_info: bool,
}
