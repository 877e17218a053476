//! 产品数据模型

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use uuid::Uuid;

use super::error::{ProductError, ProductResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// 保留请求中的数字形式，`20` 与 `20.0` 原样返回
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

/// 创建或整体替换产品时提交的字段（不含 id）
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

impl ProductInput {
    /// 从已解析的 JSON 请求体中校验并提取字段
    ///
    /// `name`、`description`、`category` 必须是非空字符串，
    /// `price` 必须是数字，`inStock` 必须是布尔值。其余字段（包括 `id`）被忽略。
    pub fn from_json(value: &Value) -> ProductResult<Self> {
        let obj = value.as_object().ok_or(ProductError::Validation)?;

        let text = |key: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .ok_or(ProductError::Validation)
        };

        Ok(Self {
            name: text("name")?,
            description: text("description")?,
            price: match obj.get("price") {
                Some(Value::Number(n)) => n.clone(),
                _ => return Err(ProductError::Validation),
            },
            category: text("category")?,
            in_stock: obj
                .get("inStock")
                .and_then(Value::as_bool)
                .ok_or(ProductError::Validation)?,
        })
    }

    pub fn into_product(self, id: Uuid) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
        }
    }
}
