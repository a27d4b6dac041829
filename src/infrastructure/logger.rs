//! 日志基础设施

use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 设置了 `RUST_LOG` 时以其为准，否则使用配置的级别
    pub fn init(level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        // 已初始化过的订阅者保持不变
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
