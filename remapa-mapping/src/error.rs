//! 全局统一错误类型

use thiserror::Error;

/// 校验与反序列化阶段可直接返回 MappingError；
/// 转换引擎本身不产生错误（路径未命中一律归为 Null）
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] crate::validate::ValidationError),
}

/// 项目统一 Result 别名
pub type Result<T> = std::result::Result<T, MappingError>;
