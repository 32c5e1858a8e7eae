use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 单条字段映射规则（`mapa` 的一项）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMapping {
    /// 输出字段名
    #[serde(rename = "Campo")]
    pub campo: String,

    /// `Tipo == "fixo"` 时为字面量，否则为取值路径字符串
    #[serde(rename = "Valor")]
    pub valor: Value,

    /// 判别符：只有 `"fixo"` 特殊；其余取值（含缺省）一律按路径解析。
    /// 刻意不建成枚举，未知 sentinel 不应被拒收
    #[serde(rename = "Tipo", default)]
    pub tipo: String,
}

impl FieldMapping {
    pub fn is_fixed(&self) -> bool {
        self.tipo == "fixo"
    }
}
