//! 前端错误类型
//!
//! API 调用的统一错误。`Unauthorized` 被单独建模：它是唯一会
//! 触发导航（回登录页）的错误，其余都只落在一条通知上。

use crate::web::http::HttpError;

/// API 调用错误
#[derive(Debug, Clone)]
pub enum ApiError {
    /// 网络层失败（fetch 被拒绝等）
    Network(String),
    /// 响应体无法解析
    Decode(String),
    /// 认证失败且无法静默恢复
    Unauthorized,
    /// 后端返回的业务错误
    Api { status: u16, message: String },
}

impl ApiError {
    /// 面向用户的提示文案；后端没给消息时退回调用方的兜底文案
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Api { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Unauthorized => "Session expired. Please log in again.".to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "decode error: {}", msg),
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::Api { status, message } => write!(f, "api error {}: {}", status, message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::ResponseParseFailed(msg) => ApiError::Decode(msg),
            other => ApiError::Network(other.to_string()),
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
