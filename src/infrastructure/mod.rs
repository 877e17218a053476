//! 基础设施层：配置、日志与进程生命周期

pub mod config;
pub mod logger;
pub mod shutdown;
