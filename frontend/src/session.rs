//! 会话令牌模块
//!
//! 管理 LocalStorage 里的访问 / 刷新令牌对，并提供**纯客户端**的
//! 过期判断：只 base64 解码 JWT 载荷读取 `exp`，不做签名校验。
//! 这是一个用户体验层面的检查，不是安全边界：真正的鉴权由
//! 后端在每个 API 调用上重新执行。

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;

use crate::web::LocalStorage;
use lwsc_admin_shared::TokenResponse;

/// 访问令牌的存储键
pub const TOKEN_KEY: &str = "token";
/// 刷新令牌的存储键
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

// =========================================================
// 令牌载荷解码 (Claims)
// =========================================================

/// JWT 载荷里本模块关心的声明
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    /// 过期时间（Unix 秒）
    #[serde(default)]
    pub exp: Option<i64>,
    /// 签发时间（Unix 秒）
    #[serde(default)]
    pub iat: Option<i64>,
    /// 主体标识
    #[serde(default)]
    pub sub: Option<String>,
}

/// 载荷解码错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimsError {
    /// 不是 `header.payload.signature` 形状
    Malformed,
    /// base64url 解码失败
    Base64(String),
    /// JSON 解析失败
    Json(String),
}

impl core::fmt::Display for ClaimsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClaimsError::Malformed => write!(f, "token is not a JWT"),
            ClaimsError::Base64(msg) => write!(f, "payload base64 decode failed: {}", msg),
            ClaimsError::Json(msg) => write!(f, "payload json parse failed: {}", msg),
        }
    }
}

impl std::error::Error for ClaimsError {}

/// 解码 JWT 载荷段
///
/// 只读取中间段；允许带或不带 base64 填充。
pub fn decode_claims(token: &str) -> Result<TokenClaims, ClaimsError> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next()) {
        (Some(_header), Some(payload)) if !payload.is_empty() => payload,
        _ => return Err(ClaimsError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ClaimsError::Base64(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| ClaimsError::Json(e.to_string()))
}

/// **纯函数：令牌是否已过期**
///
/// 没有 `exp` 声明的令牌视为未过期（与 `exp < now` 的原始
/// 比较语义一致）；`exp` 等于当前秒的令牌尚未过期。
pub fn is_expired(claims: &TokenClaims, now_secs: i64) -> bool {
    match claims.exp {
        Some(exp) => exp < now_secs,
        None => false,
    }
}

/// 当前 Unix 秒
pub fn now_secs() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

// =========================================================
// 令牌存取 (Session Store)
// =========================================================

/// 令牌对的存取接口
///
/// 生产实现落在 LocalStorage；测试用内存实现，
/// 让刷新流程可以在宿主环境下验证。
pub trait SessionStore {
    fn access_token(&self) -> Option<String>;
    fn set_access_token(&self, token: &str);
    fn refresh_token(&self) -> Option<String>;
    fn set_refresh_token(&self, token: &str);
    /// 仅移除访问令牌（守卫发现过期时的处理）
    fn clear_access_token(&self);
    /// 移除整个令牌对（登出 / 刷新失败）
    fn clear(&self);
}

/// LocalStorage 实现
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn access_token(&self) -> Option<String> {
        LocalStorage::get(TOKEN_KEY)
    }

    fn set_access_token(&self, token: &str) {
        LocalStorage::set(TOKEN_KEY, token);
    }

    fn refresh_token(&self) -> Option<String> {
        LocalStorage::get(REFRESH_TOKEN_KEY)
    }

    fn set_refresh_token(&self, token: &str) {
        LocalStorage::set(REFRESH_TOKEN_KEY, token);
    }

    fn clear_access_token(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(REFRESH_TOKEN_KEY);
    }
}

/// 登录成功后的令牌落盘
pub fn store_login(store: &impl SessionStore, tokens: &TokenResponse) {
    if let Some(bearer) = tokens.bearer() {
        store.set_access_token(bearer);
    }
    if let Some(refresh) = &tokens.refresh_token {
        store.set_refresh_token(refresh);
    }
}

// =========================================================
// 守卫状态 (Guard State)
// =========================================================

/// 守卫视角下的令牌状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    /// 没有存储令牌
    Missing,
    /// 令牌无法解码或已过期
    Expired,
    /// 令牌存在且未过期
    Valid,
}

/// 读取并评估当前存储的访问令牌
pub fn token_state(store: &impl SessionStore, now_secs: i64) -> TokenState {
    let Some(token) = store.access_token() else {
        return TokenState::Missing;
    };
    match decode_claims(&token) {
        Ok(claims) if !is_expired(&claims, now_secs) => TokenState::Valid,
        // 解码失败与过期同等对待：强制重新登录
        _ => TokenState::Expired,
    }
}

#[cfg(test)]
pub mod tests;
