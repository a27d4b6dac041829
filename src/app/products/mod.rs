//! 产品目录：模型、存储抽象、处理器

pub mod handler;
pub mod model;
pub mod repository;

use axum::{
    routing::{get, put},
    Router,
};

use handler::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/products/healthcheck", get(handler::health_check))
        .route(
            "/products",
            get(handler::get_all).post(handler::create_product),
        )
        .route("/products/colour/:colour", get(handler::get_by_color))
        .route(
            "/products/:id",
            put(handler::update_product).delete(handler::delete_product),
        )
        .with_state(state)
}
