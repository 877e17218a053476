//! 产品业务服务
//!
//! `ProductService` 持有进程内的产品序列，所有操作都是线性扫描。
//! 序列由一把读写锁保护：读操作共享，写操作独占。

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::error::{ProductError, ProductResult};
use super::model::{Product, ProductInput};
use super::query::{ListQuery, ProductPage};

#[derive(Clone, Default)]
pub struct ProductService {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self, query: &ListQuery) -> ProductPage {
        let products = self.products.read().await;
        query.apply(&products)
    }

    pub async fn get(&self, id: &str) -> ProductResult<Product> {
        let id = parse_id(id)?;
        let products = self.products.read().await;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ProductError::NotFound)
    }

    /// 分配新 id 并追加到序列末尾
    pub async fn create(&self, input: ProductInput) -> Product {
        let mut products = self.products.write().await;

        let mut id = Uuid::new_v4();
        while products.iter().any(|p| p.id == id) {
            id = Uuid::new_v4();
        }

        let product = input.into_product(id);
        products.push(product.clone());
        debug!("产品已创建: {} (共 {} 个)", product.id, products.len());
        product
    }

    /// 整体替换：保留 id 与原位置，其余字段全部使用新值
    pub async fn replace(&self, id: &str, input: ProductInput) -> ProductResult<Product> {
        let id = parse_id(id)?;
        let mut products = self.products.write().await;
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProductError::NotFound)?;

        *slot = input.into_product(id);
        debug!("产品已更新: {}", id);
        Ok(slot.clone())
    }

    pub async fn delete(&self, id: &str) -> ProductResult<()> {
        let id = parse_id(id)?;
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductError::NotFound)?;

        products.remove(index);
        debug!("产品已删除: {} (剩余 {} 个)", id, products.len());
        Ok(())
    }

    /// 按分类统计当前产品数量
    pub async fn stats(&self) -> BTreeMap<String, usize> {
        let products = self.products.read().await;
        products.iter().fold(BTreeMap::new(), |mut acc, p| {
            *acc.entry(p.category.clone()).or_insert(0) += 1;
            acc
        })
    }
}

/// 非法的 UUID 不可能匹配任何已存储的产品
fn parse_id(id: &str) -> ProductResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ProductError::NotFound)
}
