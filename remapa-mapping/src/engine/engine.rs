use serde_json::Value;

use super::assemble;
use crate::model::TransformRequest;

/// 转换引擎门面：纯函数，无共享状态，逐请求调用
pub struct TransformEngine;

impl TransformEngine {
    /// 嵌套形态（`/api/transformar`）
    pub fn nested(req: &TransformRequest) -> Value {
        assemble::assemble_nested(req)
    }

    /// 扁平形态（`/api/transformar/lista` 的 `Lista`）
    pub fn flat(req: &TransformRequest) -> Value {
        assemble::assemble_flat(req)
    }
}
