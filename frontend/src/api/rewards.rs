//! 奖励资源门面：成就与徽章
//!
//! 两种资源共享 `/rewards` 前缀；创建 / 更新带图标文件，
//! 走 multipart，更新用 PATCH。

use super::client::ApiClient;
use super::extract::{extract_list, ListPage};
use crate::error::ApiResult;
use crate::session::SessionStore;
use crate::web::http::{FormField, HttpMethod, HttpTransport};
use lwsc_admin_shared::{Achievement, Badge};

impl<T: HttpTransport, S: SessionStore> ApiClient<T, S> {
    // ---- 成就 (Achievements) ----

    pub async fn achievements(&self) -> ApiResult<ListPage<Achievement>> {
        let value = self.get_value("/rewards/achievements", &[]).await?;
        extract_list(value, "achievements")
    }

    pub async fn create_achievement(&self, fields: Vec<FormField>) -> ApiResult<()> {
        self.send_form(HttpMethod::Post, "/rewards/achievements", fields)
            .await?;
        Ok(())
    }

    pub async fn update_achievement(&self, id: &str, fields: Vec<FormField>) -> ApiResult<()> {
        self.send_form(
            HttpMethod::Patch,
            &format!("/rewards/achievements/{}", id),
            fields,
        )
        .await?;
        Ok(())
    }

    pub async fn delete_achievement(&self, id: &str) -> ApiResult<()> {
        self.delete_path(&format!("/rewards/achievements/{}", id))
            .await?;
        Ok(())
    }

    // ---- 徽章 (Badges) ----

    pub async fn badges(&self) -> ApiResult<ListPage<Badge>> {
        let value = self.get_value("/rewards/badges", &[]).await?;
        extract_list(value, "badges")
    }

    pub async fn create_badge(&self, fields: Vec<FormField>) -> ApiResult<()> {
        self.send_form(HttpMethod::Post, "/rewards/badges", fields)
            .await?;
        Ok(())
    }

    pub async fn update_badge(&self, id: &str, fields: Vec<FormField>) -> ApiResult<()> {
        self.send_form(
            HttpMethod::Patch,
            &format!("/rewards/badges/{}", id),
            fields,
        )
        .await?;
        Ok(())
    }

    pub async fn delete_badge(&self, id: &str) -> ApiResult<()> {
        self.delete_path(&format!("/rewards/badges/{}", id)).await?;
        Ok(())
    }
}
