use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// 统一响应包装：`{ erro, mensagem, dados }`
#[derive(Serialize, ToSchema)]
pub struct ApiResponse {
    pub erro: bool,
    pub mensagem: String,
    pub dados: Value,
}

impl ApiResponse {
    fn ok(mensagem: &str, dados: Value) -> Self {
        Self {
            erro: false,
            mensagem: mensagem.into(),
            dados,
        }
    }

    /// 嵌套形态的成功响应
    pub fn transformado(dados: Value) -> Self {
        Self::ok("Transformação realizada com sucesso", dados)
    }

    /// 扁平形态（Lista）的成功响应
    pub fn lista(dados: Value) -> Self {
        Self::ok("Lista gerada com sucesso", dados)
    }
}

/// 转换请求体骨架（文档用；handler 按原始 Value 接收后再校验）
#[derive(Deserialize, ToSchema)]
pub struct TransformBody {
    /// 单个对象或对象数组
    pub origem: Value,
    /// 输出配置数组，每项含 desc / tabela / mapa
    pub saida: Value,
}

#[derive(Serialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
