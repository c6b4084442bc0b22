//! 文章资源门面

use super::client::ApiClient;
use super::extract::{extract_list, extract_object, ListPage};
use crate::error::ApiResult;
use crate::session::SessionStore;
use crate::web::http::{HttpMethod, HttpTransport};
use lwsc_admin_shared::{Article, ArticleInput, PageQuery};

impl<T: HttpTransport, S: SessionStore> ApiClient<T, S> {
    pub async fn articles(&self, query: &PageQuery) -> ApiResult<ListPage<Article>> {
        let value = self.get_value("/articles", &query.params()).await?;
        extract_list(value, "articles")
    }

    #[allow(dead_code)]
    pub async fn article(&self, id: &str) -> ApiResult<Article> {
        let value = self.get_value(&format!("/articles/{}", id), &[]).await?;
        extract_object(value, "article")
    }

    pub async fn create_article(&self, input: &ArticleInput) -> ApiResult<()> {
        self.send_json::<_, serde_json::Value>(HttpMethod::Post, "/articles", input)
            .await?;
        Ok(())
    }

    pub async fn update_article(&self, id: &str, input: &ArticleInput) -> ApiResult<()> {
        self.send_json::<_, serde_json::Value>(
            HttpMethod::Put,
            &format!("/articles/{}", id),
            input,
        )
        .await?;
        Ok(())
    }

    pub async fn delete_article(&self, id: &str) -> ApiResult<()> {
        self.delete_path(&format!("/articles/{}", id)).await?;
        Ok(())
    }
}
