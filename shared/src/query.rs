//! 列表查询参数
//!
//! 分页 / 搜索 / 日期范围参数统一在这里序列化为查询串键值对，
//! 避免每个界面各拼各的。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 通用分页 + 搜索参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u64,
    pub page_size: u64,
    pub search: Option<String>,
}

impl PageQuery {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page,
            page_size,
            search: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let s = search.into();
        self.search = if s.is_empty() { None } else { Some(s) };
        self
    }

    /// 序列化为查询串键值对
    pub fn params(&self) -> Vec<(String, String)> {
        let mut out = vec![
            ("page".to_string(), self.page.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        if let Some(search) = &self.search {
            out.push(("search".to_string(), search.clone()));
        }
        out
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// 日志查询参数：分页 + 可选日期范围
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogQuery {
    pub page: u64,
    pub page_size: u64,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl LogQuery {
    pub fn new(page: u64) -> Self {
        Self {
            page,
            page_size: 50,
            from: None,
            to: None,
        }
    }

    pub fn with_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn params(&self) -> Vec<(String, String)> {
        let mut out = vec![
            ("page".to_string(), self.page.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        if let Some(from) = self.from {
            out.push(("from".to_string(), from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            out.push(("to".to_string(), to.format("%Y-%m-%d").to_string()));
        }
        out
    }

    /// 导出链接使用的参数：只带日期范围，不带分页
    pub fn export_params(&self) -> Vec<(String, String)> {
        self.params().into_iter().skip(2).collect()
    }
}

impl Default for LogQuery {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_omits_empty_search() {
        let q = PageQuery::new(2, 10).with_search("");
        assert_eq!(
            q.params(),
            vec![
                ("page".into(), "2".into()),
                ("pageSize".into(), "10".into())
            ]
        );
    }

    #[test]
    fn log_query_formats_range_as_iso_dates() {
        let q = LogQuery::new(1).with_range(
            NaiveDate::from_ymd_opt(2024, 3, 1),
            NaiveDate::from_ymd_opt(2024, 3, 31),
        );
        let params = q.params();
        assert!(params.contains(&("from".into(), "2024-03-01".into())));
        assert!(params.contains(&("to".into(), "2024-03-31".into())));
        assert_eq!(q.export_params().len(), 2);
    }
}
