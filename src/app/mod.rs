//! 应用层：路由装配
//!
//! 中间件按声明顺序由外到内执行：
//! HTTP 追踪 → 请求日志 → JSON 解析 → API Key 认证 → panic 兜底 → 路由。
//! 所有路由（包括 `/` 和未匹配的路径）都需要认证。

pub mod product;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::core::{
    error::{handle_panic, AppError},
    middleware::{api_key_middleware, json_body_middleware, request_logging_middleware, ApiKey},
};
use product::handler::{
    create_product, delete_product, get_product, list_products, product_stats, replace_product,
};
pub use product::AppState;

pub fn router(state: AppState, api_key: ApiKey) -> Router {
    Router::new()
        .route("/", get(hello).fallback(route_not_found))
        .route(
            "/api/products",
            get(list_products)
                .post(create_product)
                .fallback(route_not_found),
        )
        .route(
            "/api/products/:id",
            get(get_product)
                .put(replace_product)
                .delete(delete_product)
                .fallback(route_not_found),
        )
        .route(
            "/api/stats/products",
            get(product_stats).fallback(route_not_found),
        )
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(middleware::from_fn(json_body_middleware))
                .layer(middleware::from_fn_with_state(api_key, api_key_middleware))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

async fn hello() -> &'static str {
    "Hello, World!"
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
