//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 提供简洁的 HTTP 客户端接口。
//! 请求描述（`HttpRequest`）是纯数据，真正的发送动作收敛在
//! `HttpTransport` trait 后面，认证 / 刷新逻辑因此可以脱离
//! 浏览器环境进行测试。

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// HTTP 请求方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// HTTP 错误类型
#[derive(Debug, Clone)]
pub enum HttpError {
    /// 请求构建失败
    RequestBuildFailed(String),
    /// 网络请求失败
    NetworkError(String),
    /// 响应解析失败
    ResponseParseFailed(String),
}

impl core::fmt::Display for HttpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HttpError::RequestBuildFailed(msg) => write!(f, "request build failed: {}", msg),
            HttpError::NetworkError(msg) => write!(f, "network error: {}", msg),
            HttpError::ResponseParseFailed(msg) => write!(f, "response parse failed: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// multipart 表单字段值
#[derive(Debug, Clone)]
pub enum FormValue {
    Text(String),
    File(web_sys::File),
}

/// multipart 表单字段
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub value: FormValue,
}

impl FormField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::Text(value.into()),
        }
    }

    pub fn file(name: impl Into<String>, file: web_sys::File) -> Self {
        Self {
            name: name.into(),
            value: FormValue::File(file),
        }
    }
}

/// 请求体
///
/// JSON 体直接携带序列化好的字符串；multipart 体携带字段列表，
/// 在发送时才转换为 `web_sys::FormData`（Content-Type 由浏览器
/// 生成 boundary，不手动设置）。
#[derive(Debug, Clone)]
pub enum HttpBody {
    Json(String),
    Form(Vec<FormField>),
}

/// HTTP 请求描述（纯数据，可克隆以便重放）
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<HttpBody>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// 设置请求头（同名覆盖）
    pub fn set_header(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(existing) = self.headers.iter_mut().find(|(k, _)| k == key) {
            existing.1 = value;
        } else {
            self.headers.push((key.to_string(), value));
        }
    }

    pub fn with_body(mut self, body: HttpBody) -> Self {
        self.body = Some(body);
        self
    }

    /// 读取请求头
    #[allow(dead_code)]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP 响应（已读出状态码与正文）
#[derive(Debug, Clone)]
pub struct HttpResponseData {
    pub status: u16,
    pub body: String,
}

impl HttpResponseData {
    /// 响应是否成功 (2xx)
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 请求发送通道
///
/// 生产实现是 [`FetchTransport`]；测试里用脚本化的 mock 实现。
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponseData, HttpError>;
}

/// 基于 `window.fetch` 的发送通道
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponseData, HttpError> {
        let headers = Headers::new()
            .map_err(|e| HttpError::RequestBuildFailed(format!("create headers: {:?}", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| HttpError::RequestBuildFailed(format!("set header: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());

        match &req.body {
            Some(HttpBody::Json(json)) => {
                headers
                    .set("Content-Type", "application/json")
                    .map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?;
                opts.set_body(&JsValue::from_str(json));
            }
            Some(HttpBody::Form(fields)) => {
                let form = web_sys::FormData::new()
                    .map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?;
                for field in fields {
                    match &field.value {
                        FormValue::Text(text) => form
                            .append_with_str(&field.name, text)
                            .map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?,
                        FormValue::File(file) => form
                            .append_with_blob(&field.name, file)
                            .map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?,
                    }
                }
                opts.set_body(form.as_ref());
            }
            None => {}
        }

        opts.set_headers(&headers.into());

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?;

        let window = web_sys::window()
            .ok_or_else(|| HttpError::NetworkError("window object unavailable".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| HttpError::NetworkError(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| HttpError::ResponseParseFailed(format!("not a Response: {:?}", e)))?;

        let status = response.status();

        let text_promise = response
            .text()
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

        Ok(HttpResponseData {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_header_replaces_existing_value() {
        let mut req = HttpRequest::new(HttpMethod::Get, "http://x/a");
        req.set_header("Authorization", "Bearer old");
        req.set_header("Authorization", "Bearer new");
        assert_eq!(req.header("Authorization"), Some("Bearer new"));
        assert_eq!(req.headers.len(), 1);
    }
}
