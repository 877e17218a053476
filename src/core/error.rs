//! 核心错误处理模块
//!
//! 所有请求阶段与处理器产生的错误最终都汇聚为 [`AppError`]，
//! 在这里统一记录日志并转换为 `{"error": "..."}` 形式的 JSON 响应。

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// 核心错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized: Invalid or missing API key")]
    Unauthorized,

    #[error("Validation failed: Missing or invalid product fields")]
    ValidationFailed,

    #[error("{0}")]
    NotFound(String),

    /// 其余所有故障（包括请求体无法解析或超出大小限制），内部字段仅用于日志
    #[error("Internal Server Error")]
    Internal(String),
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::ValidationFailed => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Internal(detail) => error!("内部错误: {}", detail),
            other => warn!("请求失败 ({}): {}", status.as_u16(), other),
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// 处理器 panic 时的兜底响应，供 `CatchPanicLayer` 使用
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "未知 panic".to_string()
    };

    AppError::Internal(detail).into_response()
}
