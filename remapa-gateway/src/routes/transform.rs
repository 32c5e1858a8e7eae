use axum::{
    extract::rejection::JsonRejection,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use remapa_mapping::{TransformEngine, TransformRequest};

use crate::{
    dto::{ApiResponse, TransformBody},
    error::{AppError, AppResult},
};

pub fn router() -> Router {
    Router::new()
        .route("/", post(transformar))
        .route("/lista", post(transformar_lista))
}

/// 嵌套形态转换：按记录 → 配置分组
#[utoipa::path(
    post,
    path = "/api/transformar",
    request_body = TransformBody,
    responses(
        (status = 200, description = "转换成功", body = ApiResponse),
        (status = 400, description = "请求结构不合法", body = ApiResponse),
        (status = 500, description = "服务器内部错误", body = ApiResponse)
    ),
    tag = "transformar"
)]
pub async fn transformar(body: Result<Json<Value>, JsonRejection>) -> AppResult<Json<ApiResponse>> {
    let req = parse_request(body)?;
    let dados = TransformEngine::nested(&req);
    Ok(Json(ApiResponse::transformado(dados)))
}

/// 扁平形态转换：逐字段一行，包在 `{ Lista: [...] }` 里
#[utoipa::path(
    post,
    path = "/api/transformar/lista",
    request_body = TransformBody,
    responses(
        (status = 200, description = "转换成功", body = ApiResponse),
        (status = 400, description = "请求结构不合法", body = ApiResponse),
        (status = 500, description = "服务器内部错误", body = ApiResponse)
    ),
    tag = "transformar"
)]
pub async fn transformar_lista(body: Result<Json<Value>, JsonRejection>) -> AppResult<Json<ApiResponse>> {
    let req = parse_request(body)?;
    let lista = TransformEngine::flat(&req);
    Ok(Json(ApiResponse::lista(json!({ "Lista": lista }))))
}

/// body 解析失败 → 500 envelope；结构校验失败 → 400 envelope
fn parse_request(body: Result<Json<Value>, JsonRejection>) -> AppResult<TransformRequest> {
    let Json(value) = body.map_err(|e| AppError::Processing(e.to_string()))?;
    Ok(TransformRequest::from_body(value)?)
}
