use std::net::TcpListener;

use blog_core::config::core_config::{AppConfig, CoreConfig};
use core_server::ServerConfig;
use core_server::router::start_server;
use serde_json::{Value, json};

pub struct TestServer {
    pub base_url: String,
    client: reqwest::Client,
}

pub fn server_config() -> ServerConfig {
    ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        enable_graphiql: true,
        enable_metrics: true,
        enable_server_info: true,
        ..Default::default()
    }
}

pub async fn start_test_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let config = AppConfig {
        core: CoreConfig::default(),
        app: server_config(),
    };

    let db_conn = sql_data_provider::db_conn(&config.app.database_url)
        .await
        .unwrap();

    tokio::spawn(start_server(listener, config, db_conn));

    TestServer {
        base_url,
        client: reqwest::Client::new(),
    }
}

impl TestServer {
    pub async fn graphql(&self, query: &str, variables: Value) -> Value {
        self.client
            .post(format!("{}/graphql", self.base_url))
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .unwrap()
    }
}
