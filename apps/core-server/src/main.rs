use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener};
use std::path::PathBuf;

use blog_core::config::core_config::{self, AppConfig};
use clap::Parser;
use core_server::router::start_server;
use core_server::{ServerConfig, metrics};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<Vec<PathBuf>>,
}

fn main() {
    let cli = Cli::parse();

    let mut config_files = cli.config.unwrap_or_default();
    config_files.insert(0, "config/config.yml".into());

    let app_config: AppConfig<ServerConfig> =
        core_config::AppConfig::from_files(&config_files).expect("Failed creating config");

    initialize_tracing(&app_config.app);
    metrics::setup();

    let addr = SocketAddr::new(
        app_config
            .app
            .server_ip
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))),
        app_config.app.server_port.unwrap_or(3000),
    );

    let listener = TcpListener::bind(addr).expect("Failed to bind to address");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime")
        .block_on(async {
            let db_conn = sql_data_provider::db_conn(&app_config.app.database_url)
                .await
                .expect("Failed to connect to database");

            start_server(listener, app_config, db_conn).await
        })
}

fn initialize_tracing(config: &ServerConfig) {
    // Create a filter based on the log level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new(
                config.trace_level.as_deref().unwrap_or("debug"),
            )
        })
        .expect("Failed to create env filter");

    let tracing_layer = tracing_subscriber::registry().with(filter);

    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        tracing_layer.with(tracing_subscriber::fmt::layer()).init();
    };
}
