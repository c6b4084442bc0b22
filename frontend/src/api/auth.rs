//! 认证资源门面

use serde_json::Value;

use super::client::ApiClient;
use super::extract::extract_object;
use crate::error::ApiResult;
use crate::session::SessionStore;
use crate::web::http::{HttpMethod, HttpTransport};
use lwsc_admin_shared::{
    AdminProfile, ChangePasswordRequest, DeleteAccountRequest, ForgotPasswordRequest,
    LoginRequest, ResetPasswordRequest, TokenResponse, UpdateProfileRequest,
};

impl<T: HttpTransport, S: SessionStore> ApiClient<T, S> {
    pub async fn login(&self, req: &LoginRequest) -> ApiResult<TokenResponse> {
        self.send_json(HttpMethod::Post, "/auth/login", req).await
    }

    /// 当前管理员档案；响应可能包在 `admin` 字段下
    pub async fn me(&self) -> ApiResult<AdminProfile> {
        let value = self.get_value("/auth/me", &[]).await?;
        extract_object(value, "admin")
    }

    pub async fn update_profile(&self, req: &UpdateProfileRequest) -> ApiResult<AdminProfile> {
        let value: Value = self.send_json(HttpMethod::Put, "/auth/me", req).await?;
        extract_object(value, "admin")
    }

    // 独立的改密端点；档案页目前走 update_profile 一并改密
    #[allow(dead_code)]
    pub async fn change_password(&self, req: &ChangePasswordRequest) -> ApiResult<()> {
        self.send_json::<_, Value>(HttpMethod::Post, "/auth/change-password", req)
            .await?;
        Ok(())
    }

    pub async fn forgot_password(&self, req: &ForgotPasswordRequest) -> ApiResult<()> {
        self.send_json::<_, Value>(HttpMethod::Post, "/auth/forgot-password", req)
            .await?;
        Ok(())
    }

    // 重置链接落地页在移动端 App 里，后台只负责发起
    #[allow(dead_code)]
    pub async fn reset_password(&self, req: &ResetPasswordRequest) -> ApiResult<()> {
        self.send_json::<_, Value>(HttpMethod::Post, "/auth/reset-password", req)
            .await?;
        Ok(())
    }

    /// 用户自助删号（公开页面，凭证二次确认）
    pub async fn delete_account(&self, req: &DeleteAccountRequest) -> ApiResult<()> {
        self.send_json::<_, Value>(HttpMethod::Post, "/auth/delete-account", req)
            .await?;
        Ok(())
    }
}
