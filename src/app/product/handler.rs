//! 产品处理器

use std::collections::BTreeMap;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::{request::Parts, StatusCode},
    response::Json,
};

use super::{
    model::{Product, ProductInput},
    query::{ListQuery, ProductPage},
    service::ProductService,
};
use crate::core::{error::AppError, middleware::JsonBody};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// 通过校验的产品请求体
///
/// 读取解析阶段放入请求扩展的 JSON；没有 JSON 请求体同样视为校验失败。
pub struct ValidProduct(pub ProductInput);

#[async_trait]
impl<S> FromRequestParts<S> for ValidProduct
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(body) = parts
            .extensions
            .get::<JsonBody>()
            .ok_or(AppError::ValidationFailed)?;

        Ok(Self(ProductInput::from_json(body)?))
    }
}

/// 以原始键值对接收查询串，重复的键由 [`ListQuery`] 处理
pub async fn list_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ProductPage> {
    let query = ListQuery::from_pairs(pairs);
    Json(state.product_service.list(&query).await)
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state.product_service.get(&id).await?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    ValidProduct(input): ValidProduct,
) -> (StatusCode, Json<Product>) {
    let product = state.product_service.create(input).await;
    (StatusCode::CREATED, Json(product))
}

pub async fn replace_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidProduct(input): ValidProduct,
) -> Result<Json<Product>, AppError> {
    let product = state.product_service.replace(&id, input).await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.product_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn product_stats(State(state): State<AppState>) -> Json<BTreeMap<String, usize>> {
    Json(state.product_service.stats().await)
}
