//! 产品管理

pub mod error;
pub mod handler;
pub mod model;
pub mod query;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handler::AppState;
pub use model::{Product, ProductInput};
pub use query::{ListQuery, ProductPage};
pub use service::ProductService;
