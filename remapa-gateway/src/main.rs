use axum::Router;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use remapa_gateway::{config::GatewayConfig, dto, middleware, routes};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::transform::transformar,
        routes::transform::transformar_lista,
    ),
    components(
        schemas(
            dto::TransformBody,
            dto::ApiResponse,
            dto::HealthDto,
        )
    ),
    tags(
        (name = "transformar", description = "声明式 JSON 重塑"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -------- log ----------
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("remapa_gateway=debug".parse()?))
        .init();

    // -------- config -------
    let cfg = GatewayConfig::from_env()?;

    // -------- router -------
    let app = middleware::default_stack(
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .merge(routes::new()),
    );

    tracing::info!("🚀 gateway listen on http://{}", cfg.addr());
    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
