//! 策略错误

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("策略定义无效: {0}")]
    InvalidPolicy(String),

    #[error("策略 {policy_id} 需要字段 {field}，但记录中缺失")]
    MissingField { policy_id: String, field: String },

    #[error("策略不存在: {0}")]
    PolicyNotFound(String),

    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PolicyError>;
