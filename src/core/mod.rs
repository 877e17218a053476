//! 核心层：错误处理与请求中间件

pub mod error;
pub mod middleware;
