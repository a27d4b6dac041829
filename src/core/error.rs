//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::error;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("读取产品文件失败 {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("写入产品文件失败 {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("产品文件内容损坏 {path}: {source}")]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("产品序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        error!("存储层错误: {}", err);
        CoreError::InternalServerError("Internal server error".to_string())
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error_message, user_message) = match self {
            CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            CoreError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                msg,
            ),
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}
