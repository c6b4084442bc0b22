//! 线上数据模型 (Wire Models)
//!
//! 与后端 REST API 交换的全部载荷类型。字段一律使用 camelCase 传输；
//! 记录 id 同时容忍 `id` 与 `_id` 两种字段名（不同接口返回不一致）。
//! 所有响应类型都实现 `Default`，缺字段时退化为空值而不是解析失败。

use serde::{Deserialize, Serialize};

use crate::ELEVATED_ROLES;

// =========================================================
// 管理员与会话 (Admin & Session)
// =========================================================

/// 登录后缓存的管理员档案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
}

impl AdminProfile {
    /// 是否为提权角色（绕过所有权限过滤）
    pub fn is_elevated(&self) -> bool {
        ELEVATED_ROLES.iter().any(|r| *r == self.role)
    }

    /// 是否允许访问带指定权限标记的资源
    pub fn allows(&self, permission: &str) -> bool {
        self.is_elevated() || self.permissions.iter().any(|p| p == permission)
    }
}

/// 登录 / 刷新接口的令牌响应
///
/// 后端在不同版本里把访问令牌放在 `accessToken` 或 `token` 字段，
/// 两者都接受，取先出现的那个。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
}

impl TokenResponse {
    /// 取出访问令牌（`accessToken` 优先于 `token`）
    pub fn bearer(&self) -> Option<&str> {
        self.access_token.as_deref().or(self.token.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// 档案更新；密码留空表示不修改
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// 用户自助删号（公开页面，凭证二次确认）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAccountRequest {
    pub email: String,
    pub password: String,
}

// =========================================================
// 仪表盘统计 (Dashboard Stats)
// =========================================================

/// `_id` 键到计数的聚合点：趋势里 `_id` 是日期串，分布里是类别名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeyedCount {
    #[serde(rename = "_id")]
    pub key: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NamedCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub total: u64,
    pub total_children: u64,
    pub new_last30_days: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogTotals {
    pub pain: u64,
    pub mood: u64,
    pub hydration: u64,
    pub medication: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogTrends {
    pub pain: Vec<KeyedCount>,
    pub mood: Vec<KeyedCount>,
    pub hydration: Vec<KeyedCount>,
    pub medication: Vec<KeyedCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogStats {
    pub total: LogTotals,
    pub trends: LogTrends,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Insights {
    pub top_pain_locations: Vec<NamedCount>,
    pub mood_distribution: Vec<KeyedCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardStats {
    pub users: UserStats,
    pub logs: LogStats,
    pub insights: Insights,
}

// =========================================================
// 资源记录 (Resource Records)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PainLocation {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Facility {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub mobile: String,
    pub email: String,
    pub website: String,
    pub address: String,
    pub state: String,
    pub country: String,
    pub zipcode: String,
    /// GeoJSON 风格坐标对：[经度, 纬度]
    pub coordinates: Vec<f64>,
}

/// 设施创建 / 更新载荷（无 id；坐标由表单的经纬度合成）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FacilityInput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub mobile: String,
    pub email: String,
    pub website: String,
    pub address: String,
    pub state: String,
    pub country: String,
    pub zipcode: String,
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: String,
    pub url: String,
    pub image_url: Option<String>,
    pub published_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleInput {
    pub title: String,
    pub description: String,
    pub source: String,
    pub url: String,
    pub image_url: Option<String>,
    pub published_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub reward_coins: u64,
    pub icon: Option<String>,
    /// 达成条件，后端定义的自由结构
    pub criteria: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Badge {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub coin_cost: u64,
    pub icon: Option<String>,
}

// =========================================================
// 活动日志 (Activity Logs)
// =========================================================

/// 日志记录上内嵌的用户引用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LogUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl LogUser {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PainLog {
    #[serde(alias = "_id")]
    pub id: String,
    pub date: String,
    pub user: Option<LogUser>,
    pub intensity: u8,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MoodLog {
    #[serde(alias = "_id")]
    pub id: String,
    pub date: String,
    pub user: Option<LogUser>,
    pub mood: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HydrationLog {
    #[serde(alias = "_id")]
    pub id: String,
    pub date: String,
    pub user: Option<LogUser>,
    pub amount: f64,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicationLog {
    #[serde(alias = "_id")]
    pub id: String,
    pub date: String,
    pub user: Option<LogUser>,
    pub name: String,
    pub dose: Option<String>,
    pub taken: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_accepts_mongo_style_id() {
        let p: AdminProfile = serde_json::from_str(
            r#"{"_id":"a1","name":"Ada","email":"a@x.io","role":"admin","permissions":["users"]}"#,
        )
        .unwrap();
        assert_eq!(p.id, "a1");
        assert!(p.allows("users"));
        assert!(!p.allows("facilities"));
    }

    #[test]
    fn elevated_role_allows_everything() {
        for role in ELEVATED_ROLES {
            let p = AdminProfile {
                role: role.to_string(),
                ..Default::default()
            };
            assert!(p.allows("anything-at-all"));
        }
    }

    #[test]
    fn token_response_prefers_access_token_field() {
        let both: TokenResponse =
            serde_json::from_str(r#"{"accessToken":"new","token":"old"}"#).unwrap();
        assert_eq!(both.bearer(), Some("new"));

        let legacy: TokenResponse = serde_json::from_str(r#"{"token":"only"}"#).unwrap();
        assert_eq!(legacy.bearer(), Some("only"));

        let neither: TokenResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(neither.bearer(), None);
    }

    #[test]
    fn stats_tolerate_missing_sections() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"users":{"total":7}}"#).unwrap();
        assert_eq!(stats.users.total, 7);
        assert_eq!(stats.logs.total.pain, 0);
        assert!(stats.insights.top_pain_locations.is_empty());
    }

    #[test]
    fn trend_point_reads_underscore_id() {
        let point: KeyedCount =
            serde_json::from_str(r#"{"_id":"2024-03-01","count":4}"#).unwrap();
        assert_eq!(point.key, "2024-03-01");
        assert_eq!(point.count, 4);
    }

    #[test]
    fn facility_kind_maps_to_type_field() {
        let f: Facility = serde_json::from_str(
            r#"{"id":"f1","name":"Clinic","type":"hospital","coordinates":[103.8,1.35]}"#,
        )
        .unwrap();
        assert_eq!(f.kind, "hospital");
        assert_eq!(f.coordinates, vec![103.8, 1.35]);
    }
}
