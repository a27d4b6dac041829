//! # 产品目录服务
//!
//! 基于 Axum 的产品 CRUD 服务，数据保存在单个 JSON 文件中：
//! - `app`：路由、处理器、产品模型与存储抽象
//! - `core`：配置、错误处理、中间件
//! - `infrastructure`：日志初始化与 JSON 文件存储

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::build_app;
pub use app::products::handler::AppState;
pub use app::products::model::Product;
pub use app::products::repository::{MemoryProductRepository, ProductRepository};
pub use crate::core::config::Config;
pub use crate::core::error::{CoreError, StorageError};
pub use infrastructure::json_file::JsonFileRepository;
