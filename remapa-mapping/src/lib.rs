//! crate 公共入口

// —— 先声明各模块 —— //
pub mod error;
pub mod model;
pub mod resolver;
pub mod engine;
pub mod validate;

// —— 再做公开 re-export —— //
pub use crate::model::{FieldMapping, OutputConfig, OutputMode, TransformRequest};
pub use crate::engine::TransformEngine;
pub use crate::validate::ValidationError;
