//! 响应形状归一化
//!
//! 后端的列表接口历史上返回过三种形状：裸数组、`{"data":[...]}`、
//! `{"<资源名>":[...]}`。统一在门面边界拆出一种 `ListPage` 序列
//! 类型，界面层不再各自猜形状。

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// 归一化后的一页列表
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    /// 服务端总数；响应没给时等于本页条数
    pub total: u64,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// 从响应体里拆出列表
///
/// 探测顺序与旧实现一致：裸数组 -> 资源名字段 -> `data` 字段；
/// 都不匹配时返回空页。总数取 `meta.total`，退而取顶层 `total`，
/// 再退化为本页条数。
pub fn extract_list<T: DeserializeOwned>(value: Value, resource: &str) -> ApiResult<ListPage<T>> {
    let array = if value.is_array() {
        Some(value.clone())
    } else {
        value
            .get(resource)
            .filter(|v| v.is_array())
            .or_else(|| value.get("data").filter(|v| v.is_array()))
            .cloned()
    };

    let Some(array) = array else {
        return Ok(ListPage::default());
    };

    let items: Vec<T> =
        serde_json::from_value(array).map_err(|e| ApiError::Decode(e.to_string()))?;

    let total = value
        .get("meta")
        .and_then(|m| m.get("total"))
        .or_else(|| value.get("total"))
        .and_then(Value::as_u64)
        .unwrap_or(items.len() as u64);

    Ok(ListPage { items, total })
}

/// 从响应体里拆出单个对象
///
/// 兼容 `{"<key>": {...}}` 包一层与直接返回对象两种形状。
pub fn extract_object<T: DeserializeOwned>(value: Value, key: &str) -> ApiResult<T> {
    let inner = match value.get(key) {
        Some(v) if v.is_object() => v.clone(),
        _ => value,
    };
    serde_json::from_value(inner).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Row {
        id: String,
    }

    fn rows(page: &ListPage<Row>) -> Vec<&str> {
        page.items.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn all_three_shapes_extract_the_same_list() {
        let bare = json!([{"id": "a"}, {"id": "b"}]);
        let keyed = json!({"logs": [{"id": "a"}, {"id": "b"}]});
        let data = json!({"data": [{"id": "a"}, {"id": "b"}]});

        for body in [bare, keyed, data] {
            let page: ListPage<Row> = extract_list(body, "logs").unwrap();
            assert_eq!(rows(&page), vec!["a", "b"]);
            assert_eq!(page.total, 2);
        }
    }

    #[test]
    fn resource_key_wins_over_data_key() {
        let body = json!({"users": [{"id": "u"}], "data": [{"id": "d"}]});
        let page: ListPage<Row> = extract_list(body, "users").unwrap();
        assert_eq!(rows(&page), vec!["u"]);
    }

    #[test]
    fn server_total_is_preferred_over_page_length() {
        let meta = json!({"data": [{"id": "a"}], "meta": {"total": 40}});
        let page: ListPage<Row> = extract_list(meta, "users").unwrap();
        assert_eq!(page.total, 40);

        let flat = json!({"data": [{"id": "a"}], "total": 7});
        let page: ListPage<Row> = extract_list(flat, "users").unwrap();
        assert_eq!(page.total, 7);
    }

    #[test]
    fn unknown_shape_degrades_to_empty_page() {
        let page: ListPage<Row> = extract_list(json!({"weird": true}), "users").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn object_extraction_unwraps_optional_envelope() {
        let wrapped = json!({"admin": {"id": "1"}});
        let row: Row = extract_object(wrapped, "admin").unwrap();
        assert_eq!(row.id, "1");

        let bare = json!({"id": "2"});
        let row: Row = extract_object(bare, "admin").unwrap();
        assert_eq!(row.id, "2");
    }
}
