//! 疼痛部位资源门面
//!
//! 创建 / 更新带 logo 文件，走 multipart。

use super::client::ApiClient;
use super::extract::{extract_list, ListPage};
use crate::error::ApiResult;
use crate::session::SessionStore;
use crate::web::http::{FormField, HttpMethod, HttpTransport};
use lwsc_admin_shared::PainLocation;

impl<T: HttpTransport, S: SessionStore> ApiClient<T, S> {
    pub async fn pain_locations(&self) -> ApiResult<ListPage<PainLocation>> {
        let value = self.get_value("/pain-locations", &[]).await?;
        extract_list(value, "locations")
    }

    pub async fn create_pain_location(&self, fields: Vec<FormField>) -> ApiResult<()> {
        self.send_form(HttpMethod::Post, "/pain-locations", fields)
            .await?;
        Ok(())
    }

    pub async fn update_pain_location(&self, id: &str, fields: Vec<FormField>) -> ApiResult<()> {
        self.send_form(HttpMethod::Put, &format!("/pain-locations/{}", id), fields)
            .await?;
        Ok(())
    }

    pub async fn delete_pain_location(&self, id: &str) -> ApiResult<()> {
        self.delete_path(&format!("/pain-locations/{}", id)).await?;
        Ok(())
    }
}
