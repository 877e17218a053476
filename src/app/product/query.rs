//! 产品列表查询：分类过滤 → 名称搜索 → 分页
//!
//! 每次请求都在完整的内存序列上重新计算，不做索引或缓存。

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::model::Product;

pub const DEFAULT_PAGE: f64 = 1.0;
pub const DEFAULT_LIMIT: f64 = 10.0;

/// 单个查询参数的取值
#[derive(Debug, Default, Clone, PartialEq)]
pub enum QueryParam {
    #[default]
    Absent,
    Single(String),
    /// 同一个键出现了多次
    Repeated(Vec<String>),
}

impl QueryParam {
    fn push(&mut self, value: String) {
        *self = match std::mem::take(self) {
            QueryParam::Absent => QueryParam::Single(value),
            QueryParam::Single(first) => QueryParam::Repeated(vec![first, value]),
            QueryParam::Repeated(mut values) => {
                values.push(value);
                QueryParam::Repeated(values)
            }
        };
    }
}

/// 列表接口的查询参数
///
/// 由原始键值对构建，未知的键被忽略。
#[derive(Debug, Default, Clone)]
pub struct ListQuery {
    pub category: QueryParam,
    pub search: QueryParam,
    pub page: QueryParam,
    pub limit: QueryParam,
}

/// 列表接口的响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    /// 分页之前满足过滤条件的记录数
    pub total: usize,
    pub products: Vec<Product>,
}

/// 文本过滤条件
#[derive(Clone, Copy)]
enum TextFilter<'a> {
    Any,
    Term(&'a str),
    /// 重复给出的过滤键不匹配任何记录
    Nothing,
}

impl ListQuery {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut query.category,
                "search" => &mut query.search,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            slot.push(value);
        }
        query
    }

    /// 分页页码；重复给出时为 NaN，得到空页
    pub fn page(&self) -> f64 {
        number_or(&self.page, DEFAULT_PAGE)
    }

    pub fn limit(&self) -> f64 {
        number_or(&self.limit, DEFAULT_LIMIT)
    }

    pub fn apply(&self, products: &[Product]) -> ProductPage {
        let category = text_filter(&self.category);
        let search = text_filter(&self.search);
        let needle = match search {
            TextFilter::Term(term) => term.to_lowercase(),
            _ => String::new(),
        };

        let filtered: Vec<&Product> = products
            .iter()
            .filter(|p| match category {
                TextFilter::Any => true,
                TextFilter::Term(c) => p.category == c,
                TextFilter::Nothing => false,
            })
            .filter(|p| match search {
                TextFilter::Any => true,
                TextFilter::Term(_) => p.name.to_lowercase().contains(&needle),
                TextFilter::Nothing => false,
            })
            .collect();

        let total = filtered.len();
        let window = page_window(self.page(), self.limit(), total);

        ProductPage {
            total,
            products: filtered[window].iter().map(|p| (*p).clone()).collect(),
        }
    }
}

/// 计算 `[(page-1)*limit, (page-1)*limit + limit)` 对应的切片范围
///
/// 边界向零取整（NaN 视为 0），负数边界从序列末尾倒数，
/// 越界边界夹到 `[0, len]`，结束位置不大于起始位置时得到空范围。
/// `page <= 0` 时因此可能得到空页或与其他页重叠的切片。
pub fn page_window(page: f64, limit: f64, len: usize) -> Range<usize> {
    let start = (page - 1.0) * limit;
    let end = start + limit;

    let start = resolve_index(start, len);
    let end = resolve_index(end, len);

    if end <= start {
        0..0
    } else {
        start..end
    }
}

fn resolve_index(index: f64, len: usize) -> usize {
    let len = len as f64;
    let index = if index.is_nan() { 0.0 } else { index.trunc() };
    let resolved = if index < 0.0 {
        (len + index).max(0.0)
    } else {
        index.min(len)
    };
    resolved as usize
}

fn text_filter(param: &QueryParam) -> TextFilter<'_> {
    match param {
        QueryParam::Absent => TextFilter::Any,
        QueryParam::Single(value) if value.is_empty() => TextFilter::Any,
        QueryParam::Single(value) => TextFilter::Term(value),
        QueryParam::Repeated(_) => TextFilter::Nothing,
    }
}

/// 缺省或无法解析为有限数字时使用默认值
fn number_or(param: &QueryParam, default: f64) -> f64 {
    match param {
        QueryParam::Absent => default,
        QueryParam::Single(value) => value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(default),
        QueryParam::Repeated(_) => f64::NAN,
    }
}
