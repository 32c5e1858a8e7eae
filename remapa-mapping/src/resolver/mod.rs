pub mod constant;
pub mod path;

use serde_json::Value;

use crate::model::FieldMapping;

pub use path::lookup;

/// 按 `Tipo` 分发：`fixo` → 字面量；其余一律按路径解析。
/// 路径位上若放了非字符串的 `Valor`，解析结果为 Null
pub fn resolve(mapping: &FieldMapping, context: &Value) -> Value {
    if mapping.is_fixed() {
        constant::resolve_constant(mapping)
    } else {
        match mapping.valor.as_str() {
            Some(p) => path::lookup(context, p),
            None => Value::Null,
        }
    }
}
