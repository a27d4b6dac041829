//! 核心层：配置、错误处理、中间件

pub mod config;
pub mod error;
pub mod middleware;
