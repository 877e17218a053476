//! 核心中间件模块
//!
//! 请求依次经过：日志 → JSON 请求体解析 → API Key 认证 → 路由。
//! 每个阶段要么继续调用 `next`，要么返回 [`AppError`] 直接结束请求。

use std::{sync::Arc, time::Instant};

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    middleware::Next,
    response::Response,
};
use http_body_util::LengthLimitError;
use serde_json::Value;
use tracing::info;

use super::error::AppError;

/// JSON 请求体的大小上限 (100 KiB)
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// 携带 API Key 的请求头
pub const API_KEY_HEADER: &str = "x-api-key";

/// 解析完成的 JSON 请求体，存放在请求扩展中供后续阶段使用
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

/// 进程级共享密钥
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        *self.0 == *candidate
    }
}

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let received_at = chrono::Utc::now().to_rfc3339();
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    info!(
        "[{}] {} {} - {} - {}ms",
        received_at,
        method,
        uri,
        status,
        duration.as_millis()
    );

    response
}

/// JSON 请求体解析中间件
///
/// 只处理 JSON 类型的请求；空请求体视为没有请求体。
/// 解析失败或超出大小限制时在认证之前结束请求，按内部错误 (500) 处理。
pub async fn json_body_middleware(req: Request, next: Next) -> Result<Response, AppError> {
    if !is_json_content_type(req.headers()) {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, JSON_BODY_LIMIT)
        .await
        .map_err(|err| {
            let err = err.into_inner();
            if err.is::<LengthLimitError>() {
                AppError::Internal(format!("请求体超过 {} 字节上限", JSON_BODY_LIMIT))
            } else {
                AppError::Internal(format!("读取请求体失败: {}", err))
            }
        })?;

    if !bytes.iter().all(u8::is_ascii_whitespace) {
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|err| AppError::Internal(format!("请求体解析失败: {}", err)))?;
        parts.extensions.insert(JsonBody(value));
    }

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}

/// API Key 认证中间件
pub async fn api_key_middleware(
    State(api_key): State<ApiKey>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok());

    match provided {
        Some(key) if api_key.matches(key) => Ok(next.run(req).await),
        _ => Err(AppError::Unauthorized),
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
