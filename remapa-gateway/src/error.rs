use axum::{response::IntoResponse, Json};
use http::StatusCode;
use serde_json::json;

use remapa_mapping::{error::MappingError, ValidationError};

pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// 请求体结构不合法 → 400，消息即校验错误文本
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// body 解析失败等处理期错误 → 500
    #[error("Erro ao processar a requisição: {0}")]
    Processing(String),
}

impl From<MappingError> for AppError {
    fn from(e: MappingError) -> Self {
        match e {
            MappingError::Validation(v) => AppError::Validation(v),
            MappingError::SerdeJson(e) => AppError::Processing(e.to_string()),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = json!({
            "erro": true,
            "mensagem": self.to_string(),
            "dados": null,
        });
        (self.status_code(), Json(body)).into_response()
    }
}
