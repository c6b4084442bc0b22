//! 设施资源门面

use super::client::ApiClient;
use super::extract::{extract_list, extract_object, ListPage};
use crate::error::ApiResult;
use crate::session::SessionStore;
use crate::web::http::{HttpMethod, HttpTransport};
use lwsc_admin_shared::{Facility, FacilityInput, PageQuery};

impl<T: HttpTransport, S: SessionStore> ApiClient<T, S> {
    pub async fn facilities(&self, query: &PageQuery) -> ApiResult<ListPage<Facility>> {
        let value = self.get_value("/facilities", &query.params()).await?;
        extract_list(value, "facilities")
    }

    #[allow(dead_code)]
    pub async fn facility(&self, id: &str) -> ApiResult<Facility> {
        let value = self.get_value(&format!("/facilities/{}", id), &[]).await?;
        extract_object(value, "facility")
    }

    pub async fn create_facility(&self, input: &FacilityInput) -> ApiResult<()> {
        self.send_json::<_, serde_json::Value>(HttpMethod::Post, "/facilities", input)
            .await?;
        Ok(())
    }

    pub async fn update_facility(&self, id: &str, input: &FacilityInput) -> ApiResult<()> {
        self.send_json::<_, serde_json::Value>(
            HttpMethod::Put,
            &format!("/facilities/{}", id),
            input,
        )
        .await?;
        Ok(())
    }

    pub async fn delete_facility(&self, id: &str) -> ApiResult<()> {
        self.delete_path(&format!("/facilities/{}", id)).await?;
        Ok(())
    }
}
