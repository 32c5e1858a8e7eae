use std::time::Duration;

use axum::Router;
use http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 默认中间件栈配置
///
/// 包含:
/// - 请求追踪 (TraceLayer)
/// - CORS 配置（含 OPTIONS 预检）
pub fn default_stack(router: Router) -> Router {
    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// CORS 配置
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        // 允许的源
        .allow_origin(Any)
        // 允许的方法
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        // 允许的头
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        // 预检缓存一天
        .max_age(Duration::from_secs(86400))
}
