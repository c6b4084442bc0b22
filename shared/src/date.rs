//! 时间显示工具
//!
//! 后端的时间字段是 RFC 3339 字符串；这里只负责把它们安全地
//! 转成表格里展示的格式，解析失败时原样返回。

use chrono::DateTime;

/// 格式化为 `YYYY-MM-DD HH:MM`（日志表格用）
pub fn format_datetime(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// 格式化为 `DD Mon YYYY`（注册日期等粗粒度展示用）
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(
            format_datetime("2024-03-05T14:30:00Z"),
            "2024-03-05 14:30"
        );
        assert_eq!(format_date("2024-03-05T14:30:00Z"), "05 Mar 2024");
    }

    #[test]
    fn passes_through_unparseable_input() {
        assert_eq!(format_datetime("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }
}
