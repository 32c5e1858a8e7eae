use serde_json::Value;

use crate::model::FieldMapping;

/// `fixo`：原样返回 `Valor` 字面量，不做任何解析
pub fn resolve_constant(mapping: &FieldMapping) -> Value {
    mapping.valor.clone()
}
