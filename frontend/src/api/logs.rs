//! 活动日志门面
//!
//! 四种日志共用同一组列表 / 导出端点，只有路径段不同。
//! CSV 导出是直接拼 URL 下载的，访问令牌以查询参数内嵌
//! （对外接口约定如此）。

use super::client::{query_string, ApiClient};
use super::extract::{extract_list, ListPage};
use crate::error::ApiResult;
use crate::session::SessionStore;
use crate::web::http::HttpTransport;
use lwsc_admin_shared::{HydrationLog, LogQuery, MedicationLog, MoodLog, PainLog};

/// 日志种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Pain,
    Mood,
    Hydration,
    Medication,
}

impl LogKind {
    /// 端点路径段
    pub fn segment(&self) -> &'static str {
        match self {
            LogKind::Pain => "pain",
            LogKind::Mood => "mood",
            LogKind::Hydration => "hydration",
            LogKind::Medication => "medications",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogKind::Pain => "Pain",
            LogKind::Mood => "Mood",
            LogKind::Hydration => "Hydration",
            LogKind::Medication => "Medication",
        }
    }
}

impl<T: HttpTransport, S: SessionStore> ApiClient<T, S> {
    async fn log_page(&self, kind: LogKind, query: &LogQuery) -> ApiResult<serde_json::Value> {
        self.get_value(&format!("/logs/{}", kind.segment()), &query.params())
            .await
    }

    pub async fn pain_logs(&self, query: &LogQuery) -> ApiResult<ListPage<PainLog>> {
        extract_list(self.log_page(LogKind::Pain, query).await?, "logs")
    }

    pub async fn mood_logs(&self, query: &LogQuery) -> ApiResult<ListPage<MoodLog>> {
        extract_list(self.log_page(LogKind::Mood, query).await?, "logs")
    }

    pub async fn hydration_logs(&self, query: &LogQuery) -> ApiResult<ListPage<HydrationLog>> {
        extract_list(self.log_page(LogKind::Hydration, query).await?, "logs")
    }

    pub async fn medication_logs(&self, query: &LogQuery) -> ApiResult<ListPage<MedicationLog>> {
        extract_list(self.log_page(LogKind::Medication, query).await?, "logs")
    }

    /// CSV 导出链接：日期范围 + 内嵌令牌
    pub fn export_url(&self, kind: LogKind, query: &LogQuery) -> String {
        let mut params = query.export_params();
        if let Some(token) = self.session().access_token() {
            params.push(("token".to_string(), token));
        }
        format!(
            "{}?{}",
            self.admin_url(&format!("/logs/{}/export", kind.segment())),
            query_string(&params)
        )
    }
}
