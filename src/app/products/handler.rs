//! 产品处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::{info, warn};

use super::{model::Product, repository::ProductRepository};
use crate::core::error::CoreError;

const INVALID_PRODUCT: &str = "Invalid product data";
const PRODUCT_NOT_FOUND: &str = "Product not found";

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

/// 请求体无法解析为产品时统一返回 400
fn parse_product(payload: Result<Json<Product>, JsonRejection>) -> Result<Product, CoreError> {
    match payload {
        Ok(Json(product)) => Ok(product),
        Err(rejection) => {
            warn!("无效的产品数据: {}", rejection.body_text());
            Err(CoreError::BadRequest(INVALID_PRODUCT.to_string()))
        }
    }
}

pub async fn health_check() -> &'static str {
    "API is healthy"
}

pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.repository.get_all().await?;
    Ok(Json(products))
}

pub async fn get_by_color(
    State(state): State<AppState>,
    Path(colour): Path<String>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.repository.get_by_color(&colour).await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let product = parse_product(payload)?;

    state.repository.add(product.clone()).await?;
    info!("已创建产品: {} ({})", product.name, product.id);

    let location = format!("/products?id={}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Result<StatusCode, CoreError> {
    let product = parse_product(payload)?;

    if !state.repository.update(id, product).await? {
        return Err(CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()));
    }

    info!("已更新产品: {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, CoreError> {
    if !state.repository.delete(id).await? {
        return Err(CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()));
    }

    info!("已删除产品: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
