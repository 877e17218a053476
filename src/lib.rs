//! # 产品登记服务
//!
//! 基于 Axum 的内存产品 CRUD 服务，包括：
//! - API Key 认证
//! - 分类过滤、名称搜索与分页
//! - 按分类的统计接口
//!
//! 分层结构：`app`（路由与业务）、`core`（错误与中间件）、`infrastructure`（配置、日志、停机）。

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::Router;

use app::{product::ProductService, AppState};
use crate::core::middleware::ApiKey;
use infrastructure::config::AppConfig;

/// 以空的产品序列构建完整应用
pub fn build_app(config: &AppConfig) -> Router {
    let state = AppState {
        product_service: ProductService::new(),
    };

    app::router(state, ApiKey::new(config.api_key.as_str()))
}
