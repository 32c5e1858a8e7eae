use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::OutputConfig;
use crate::{error::Result, validate};

/// 请求体：`{ origem, saida }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformRequest {
    /// 单个对象或对象数组
    pub origem: Value,
    pub saida: Vec<OutputConfig>,
}

impl TransformRequest {
    /// 先对原始 body 做结构校验，再反序列化成类型化请求。
    /// 校验在 serde 之前，错误信息是确定的
    pub fn from_body(body: Value) -> Result<Self> {
        validate::validate_body(&body)?;
        Ok(serde_json::from_value(body)?)
    }

    /// `origem` 为单个对象时按单元素数组处理
    pub fn records(&self) -> &[Value] {
        match &self.origem {
            Value::Array(arr) => arr.as_slice(),
            single => std::slice::from_ref(single),
        }
    }
}
