//! 共享库
//!
//! 包含规则引擎共用的配置加载与日志初始化代码。

pub mod config;
pub mod observability;

pub use config::{AppConfig, EvaluationConfig, MissingFieldPolicy};
pub use observability::{LogFormat, ObservabilityConfig};
