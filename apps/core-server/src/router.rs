use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, GraphQLSubscription};
use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::middleware;
use axum::response::{Html, IntoResponse, Json};
use axum::routing::{get, post};
use blog_core::BlogCore;
use blog_core::config::core_config::AppConfig;
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};

use crate::ServerConfig;
use crate::dto::ErrorResponseRestDTO;
use crate::endpoint::misc;
use crate::graphql::{BlogSchema, build_schema};
use crate::middleware::get_http_request_context;

const GRAPHQL_PATH: &str = "/graphql";
const GRAPHQL_WS_PATH: &str = "/graphql/ws";

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>, db_conn: DbConn) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set listener to non-blocking");

    let core = BlogCore::new(Arc::new(DataLayer::build(db_conn)), config.core, None)
        .expect("Failed to parse config");

    let config = Arc::new(config.app);
    let schema = build_schema(core, config.clone());

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(schema, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("Failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(schema: BlogSchema, config: Arc<ServerConfig>) -> Router {
    let mut graphql = Router::new().route(GRAPHQL_PATH, post(graphql_handler));

    if config.enable_graphiql {
        graphql = graphql.route(GRAPHQL_PATH, get(graphiql));
    }

    let graphql = graphql
        .route_service(GRAPHQL_WS_PATH, GraphQLSubscription::new(schema.clone()))
        .with_state(schema);

    let mut technical_endpoints = Router::new();

    if config.enable_server_info {
        technical_endpoints = technical_endpoints
            .route("/build-info", get(misc::get_build_info))
            .route("/health", get(misc::health_check));
    }

    if config.enable_metrics {
        technical_endpoints = technical_endpoints.route("/metrics", get(misc::get_metrics));
    }

    Router::new()
        .merge(graphql)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "blog-service",
                        RequestId = context.request_id,
                        SessionId = context.session_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn graphql_handler(State(schema): State<BlogSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(
        GraphiQLSource::build()
            .endpoint(GRAPHQL_PATH)
            .subscription_endpoint(GRAPHQL_WS_PATH)
            .finish(),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponseRestDTO::for_panic(message)),
    )
        .into_response()
}
