//! 仪表盘统计门面

use super::client::ApiClient;
use crate::error::ApiResult;
use crate::session::SessionStore;
use crate::web::http::HttpTransport;
use lwsc_admin_shared::DashboardStats;

impl<T: HttpTransport, S: SessionStore> ApiClient<T, S> {
    /// 最近 `days` 天的聚合统计
    pub async fn dashboard_stats(&self, days: u32) -> ApiResult<DashboardStats> {
        let params = [("days".to_string(), days.to_string())];
        self.get_json("/dashboard/stats", &params).await
    }
}
