//! 认证 HTTP 客户端
//!
//! 每个出站请求自动携带存储的访问令牌；收到 401 且该请求尚未
//! 重放过时，用刷新令牌换新的访问令牌并把原请求原样重放一次。
//! 重放后的 401 不再触发第二次刷新。并发的 401 各自独立刷新，
//! 不做跨请求排队。

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::error::{ApiError, ApiResult};
use crate::session::{LocalSessionStore, SessionStore};
use crate::web::http::{
    FetchTransport, FormField, HttpBody, HttpMethod, HttpRequest, HttpResponseData, HttpTransport,
};
use lwsc_admin_shared::{RefreshRequest, TokenResponse, API_PREFIX};

const AUTH_HEADER: &str = "Authorization";

/// 刷新端点（相对管理 API 前缀）
const REFRESH_PATH: &str = "/auth/refresh-token";

/// 认证 API 客户端
///
/// 传输通道与令牌存储都走 trait，刷新流程因此可以在宿主环境
/// 用脚本化的 mock 验证。
#[derive(Debug, Clone)]
pub struct ApiClient<T, S> {
    transport: T,
    session: S,
    base_url: String,
}

/// 浏览器环境下的具体客户端类型
pub type AdminApi = ApiClient<FetchTransport, LocalSessionStore>;

impl AdminApi {
    /// 按注入的运行时配置构建客户端
    pub fn from_runtime_config() -> Self {
        Self::new(FetchTransport, LocalSessionStore, config::backend_api())
    }
}

impl<T: HttpTransport, S: SessionStore> ApiClient<T, S> {
    pub fn new(transport: T, session: S, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            session,
            base_url,
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// 拼接管理 API 下的完整 URL
    pub(crate) fn admin_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    pub(crate) fn admin_url_with(&self, path: &str, params: &[(String, String)]) -> String {
        let qs = query_string(params);
        if qs.is_empty() {
            self.admin_url(path)
        } else {
            format!("{}?{}", self.admin_url(path), qs)
        }
    }

    // =========================================================
    // 门面层使用的请求入口
    // =========================================================

    pub(crate) async fn get_value(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> ApiResult<Value> {
        self.request(HttpMethod::Get, self.admin_url_with(path, params), None)
            .await
    }

    pub(crate) async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> ApiResult<R> {
        let value = self.get_value(path, params).await?;
        from_value(value)
    }

    pub(crate) async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = self
            .request(method, self.admin_url(path), Some(HttpBody::Json(json)))
            .await?;
        from_value(value)
    }

    pub(crate) async fn send_form(
        &self,
        method: HttpMethod,
        path: &str,
        fields: Vec<FormField>,
    ) -> ApiResult<Value> {
        self.request(method, self.admin_url(path), Some(HttpBody::Form(fields)))
            .await
    }

    pub(crate) async fn delete_path(&self, path: &str) -> ApiResult<Value> {
        self.request(HttpMethod::Delete, self.admin_url(path), None)
            .await
    }

    // =========================================================
    // 核心流程：挂令牌 -> 发送 -> 401 刷新并重放一次
    // =========================================================

    async fn request(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<HttpBody>,
    ) -> ApiResult<Value> {
        let mut req = HttpRequest::new(method, url);
        if let Some(body) = body {
            req = req.with_body(body);
        }
        if let Some(token) = self.session.access_token() {
            req.set_header(AUTH_HEADER, format!("Bearer {}", token));
        }

        // 原请求的副本，刷新成功后换上新令牌原样重放
        let replay = req.clone();

        let resp = self.transport.send(req).await?;
        let resp = if resp.status == 401 {
            self.refresh_and_replay(replay).await?
        } else {
            resp
        };

        into_value(resp)
    }

    /// 单次刷新 + 单次重放
    ///
    /// 刷新令牌缺失或刷新调用失败 => 清空令牌对并报告未认证；
    /// 重放的响应不论成败都直接交还调用方。
    async fn refresh_and_replay(&self, mut replay: HttpRequest) -> ApiResult<HttpResponseData> {
        let Some(refresh_token) = self.session.refresh_token() else {
            self.session.clear();
            return Err(ApiError::Unauthorized);
        };

        let token = match self.request_refresh(&refresh_token).await {
            Ok(token) => token,
            Err(_) => {
                self.session.clear();
                return Err(ApiError::Unauthorized);
            }
        };

        self.session.set_access_token(&token);
        replay.set_header(AUTH_HEADER, format!("Bearer {}", token));

        Ok(self.transport.send(replay).await?)
    }

    /// 调用刷新端点换取新的访问令牌
    async fn request_refresh(&self, refresh_token: &str) -> ApiResult<String> {
        let body = serde_json::to_string(&RefreshRequest {
            refresh_token: refresh_token.to_string(),
        })
        .map_err(|e| ApiError::Decode(e.to_string()))?;

        let req = HttpRequest::new(HttpMethod::Post, self.admin_url(REFRESH_PATH))
            .with_body(HttpBody::Json(body));
        let resp = self.transport.send(req).await?;

        if !resp.ok() {
            return Err(ApiError::Api {
                status: resp.status,
                message: error_message(&resp.body),
            });
        }

        let tokens: TokenResponse =
            serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        tokens
            .bearer()
            .map(str::to_string)
            .ok_or_else(|| ApiError::Decode("refresh response carries no access token".to_string()))
    }
}

// =========================================================
// 响应转换
// =========================================================

fn into_value(resp: HttpResponseData) -> ApiResult<Value> {
    if resp.status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !resp.ok() {
        return Err(ApiError::Api {
            status: resp.status,
            message: error_message(&resp.body),
        });
    }
    if resp.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn from_value<R: DeserializeOwned>(value: Value) -> ApiResult<R> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// 从错误响应体里尽力取出人类可读的消息
///
/// 兼容 `{"message": ...}` 与 `{"error": {"message": ...}}` 两种形状。
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return String::new();
    };
    value
        .get("message")
        .or_else(|| value.get("error").and_then(|e| e.get("message")))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// 查询串编码
pub(crate) fn query_string(params: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}

#[cfg(test)]
pub mod tests;
