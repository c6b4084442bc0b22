//! 用户资源门面

use super::client::ApiClient;
use super::extract::{extract_list, extract_object, ListPage};
use crate::error::ApiResult;
use crate::session::SessionStore;
use crate::web::http::HttpTransport;
use lwsc_admin_shared::{PageQuery, User};

impl<T: HttpTransport, S: SessionStore> ApiClient<T, S> {
    pub async fn users(&self, query: &PageQuery) -> ApiResult<ListPage<User>> {
        let value = self.get_value("/users", &query.params()).await?;
        extract_list(value, "users")
    }

    #[allow(dead_code)]
    pub async fn user(&self, id: &str) -> ApiResult<User> {
        let value = self.get_value(&format!("/users/{}", id), &[]).await?;
        extract_object(value, "user")
    }

    pub async fn delete_user(&self, id: &str) -> ApiResult<()> {
        self.delete_path(&format!("/users/{}", id)).await?;
        Ok(())
    }
}
