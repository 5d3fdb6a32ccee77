//! 日志初始化

use anyhow::Result;
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 人类可读
    #[default]
    Pretty,
    /// 结构化 JSON
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// RUST_LOG 未设置时使用的过滤指令
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// 安装全局 tracing subscriber
///
/// 进程内只能成功一次，之后的调用返回错误。
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer().compact()).try_init()?,
    }

    info!(level = %config.log_level, format = ?config.log_format, "日志已初始化");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_rejected_before_install() {
        let config = ObservabilityConfig {
            log_level: "policy=loud".to_string(),
            log_format: LogFormat::Pretty,
        };

        // RUST_LOG 存在时会优先使用它，此时不检查
        if std::env::var("RUST_LOG").is_err() {
            assert!(init(&config).is_err());
        }
    }

    #[test]
    fn test_init_only_once() {
        let config = ObservabilityConfig {
            log_level: "debug".to_string(),
            log_format: LogFormat::Json,
        };

        assert!(init(&config).is_ok());
        assert!(init(&config).is_err());
    }
}
