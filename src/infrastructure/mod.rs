//! 基础设施层：日志与文件存储

pub mod json_file;
pub mod logger;
