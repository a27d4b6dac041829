//! 应用层

pub mod products;

use axum::{middleware, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use products::handler::AppState;

/// 组装完整的应用路由及中间件
pub fn build_app(state: AppState, timeout: Duration) -> Router {
    products::routes(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TimeoutLayer::new(timeout))
            .layer(middleware::from_fn(request_logging_middleware)),
    )
}
