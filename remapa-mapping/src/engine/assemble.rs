//! 两种响应形态的组装：嵌套（按记录分组）与扁平（逐字段一行）

use serde_json::{json, Value};

use super::transform::{items_of, transform_items, transform_record};
use crate::{
    model::{OutputConfig, OutputMode, TransformRequest},
    resolver,
};

/// 嵌套形态：记录 → 配置，`{ item: [ { desc, saida: { Tabela, Campos } } ] }`
pub fn assemble_nested(req: &TransformRequest) -> Value {
    let dados: Vec<Value> = req
        .records()
        .iter()
        .map(|record| {
            let item: Vec<Value> = req
                .saida
                .iter()
                .map(|config| {
                    json!({
                        "desc": config.desc,
                        "saida": {
                            "Tabela": config.tabela,
                            "Campos": campos_for(record, config),
                        },
                    })
                })
                .collect();
            json!({ "item": item })
        })
        .collect();

    Value::Array(dados)
}

/// 普通模式得单个对象，Itens 模式得对象序列
fn campos_for(record: &Value, config: &OutputConfig) -> Value {
    match config.mode() {
        OutputMode::Ordinary => Value::Object(transform_record(record, &config.mapa)),
        OutputMode::Items => Value::Array(
            transform_items(record, &config.mapa)
                .into_iter()
                .map(Value::Object)
                .collect(),
        ),
    }
}

/// 扁平形态：记录 → 配置 → (条目) → 映射，逐字段一行。
/// Itens 模式下行数 = 条目数 × mapa 长度
pub fn assemble_flat(req: &TransformRequest) -> Value {
    let mut lista = Vec::new();

    for record in req.records() {
        let id = record.get("id").and_then(Value::as_str).unwrap_or_default();

        for config in &req.saida {
            match config.mode() {
                OutputMode::Ordinary => {
                    for mapping in &config.mapa {
                        lista.push(flat_row(id, config, &mapping.campo, resolver::resolve(mapping, record)));
                    }
                }
                OutputMode::Items => {
                    for item in items_of(record) {
                        for mapping in &config.mapa {
                            lista.push(flat_row(id, config, &mapping.campo, resolver::resolve(mapping, item)));
                        }
                    }
                }
            }
        }
    }

    Value::Array(lista)
}

fn flat_row(id: &str, config: &OutputConfig, campo: &str, valor: Value) -> Value {
    json!({
        "id": id,
        "desc": config.desc,
        "tabela": config.tabela,
        "campo": campo,
        "valor": valor,
    })
}
