use serde::{Deserialize, Serialize};

use super::rule::FieldMapping;

/// `desc` 等于该值时按行项目逐条展开
pub const ITEMS_SENTINEL: &str = "Itens";

/// 转换模式：普通 / 行项目展开
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Ordinary,
    Items,
}

/// 一条输出配置（`saida` 的一项）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub desc: String,

    /// 不透明标签，原样带入输出
    #[serde(default)]
    pub tabela: String,

    pub mapa: Vec<FieldMapping>,
}

impl OutputConfig {
    pub fn mode(&self) -> OutputMode {
        if self.desc == ITEMS_SENTINEL {
            OutputMode::Items
        } else {
            OutputMode::Ordinary
        }
    }
}
