//! 单条记录 × 单条配置的转换

use serde_json::{Map, Value};

use crate::{model::FieldMapping, resolver};

/// 普通模式：对 `context` 应用整个 `mapa`，按声明顺序写入；
/// 重复 `Campo` 后写覆盖先写
pub fn transform_record(context: &Value, mapa: &[FieldMapping]) -> Map<String, Value> {
    let mut out = Map::new();
    for mapping in mapa {
        out.insert(mapping.campo.clone(), resolver::resolve(mapping, context));
    }
    out
}

/// Itens 模式：对 `shippings[0].items` 逐条展开，路径针对条目本身解析
pub fn transform_items(record: &Value, mapa: &[FieldMapping]) -> Vec<Map<String, Value>> {
    items_of(record)
        .iter()
        .map(|item| transform_record(item, mapa))
        .collect()
}

/// 定位 `record.shippings[0].items`；缺失或类型不符一律得空序列。
/// 只看第一个 shipping，其余刻意忽略
pub fn items_of(record: &Value) -> &[Value] {
    record
        .get("shippings")
        .and_then(Value::as_array)
        .and_then(|shippings| shippings.first())
        .and_then(|first| first.get("items"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
