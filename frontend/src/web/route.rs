//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、各自的守卫属性与所需权限。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面（公开）
    Login,
    /// 用户自助删号页面（公开）
    DeleteAccount,
    /// 仪表盘（默认路由，需要认证）
    #[default]
    Dashboard,
    /// 管理员个人档案
    Profile,
    /// 用户管理
    Users,
    /// 疼痛部位管理
    PainLocations,
    /// 设施管理
    Facilities,
    /// 文章资源管理
    Articles,
    /// 成就管理
    Achievements,
    /// 徽章管理
    Badges,
    /// 疼痛日志
    PainLogs,
    /// 心情日志
    MoodLogs,
    /// 饮水日志
    HydrationLogs,
    /// 用药日志
    MedicationLogs,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 历史遗留：登出后跳转的是大写的 `/Login`，两种写法都接受。
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/dashboard" => Self::Dashboard,
            "/login" | "/Login" => Self::Login,
            "/delete-account" => Self::DeleteAccount,
            "/profile" => Self::Profile,
            "/users" => Self::Users,
            "/pain-locations" => Self::PainLocations,
            "/facilities" => Self::Facilities,
            "/resources/articles" => Self::Articles,
            "/rewards/achievements" => Self::Achievements,
            "/rewards/badges" => Self::Badges,
            "/logs/pain" => Self::PainLogs,
            "/logs/mood" => Self::MoodLogs,
            "/logs/hydration" => Self::HydrationLogs,
            "/logs/medications" => Self::MedicationLogs,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::DeleteAccount => "/delete-account",
            Self::Dashboard => "/dashboard",
            Self::Profile => "/profile",
            Self::Users => "/users",
            Self::PainLocations => "/pain-locations",
            Self::Facilities => "/facilities",
            Self::Articles => "/resources/articles",
            Self::Achievements => "/rewards/achievements",
            Self::Badges => "/rewards/badges",
            Self::PainLogs => "/logs/pain",
            Self::MoodLogs => "/logs/mood",
            Self::HydrationLogs => "/logs/hydration",
            Self::MedicationLogs => "/logs/medications",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::DeleteAccount | Self::NotFound)
    }

    /// 访问该路由所需的权限标记；None 表示对所有已认证管理员开放
    pub fn permission(&self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("dashboard"),
            Self::Users => Some("users"),
            Self::PainLocations => Some("pain-locations"),
            Self::Facilities => Some("facilities"),
            Self::Articles => Some("articles"),
            Self::Achievements => Some("achievements"),
            Self::Badges => Some("badges"),
            Self::PainLogs | Self::MoodLogs | Self::HydrationLogs | Self::MedicationLogs => {
                Some("logs")
            }
            _ => None,
        }
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 页头展示的标题
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::DeleteAccount => "Delete Account",
            Self::Dashboard => "Dashboard",
            Self::Profile => "Profile",
            Self::Users => "User Management",
            Self::PainLocations => "Pain Locations",
            Self::Facilities => "Facilities",
            Self::Articles => "Articles",
            Self::Achievements => "Achievements",
            Self::Badges => "Badges",
            Self::PainLogs => "Pain Logs",
            Self::MoodLogs => "Mood Logs",
            Self::HydrationLogs => "Hydration Logs",
            Self::MedicationLogs => "Medication Logs",
            Self::NotFound => "Not Found",
        }
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取权限不足时的重定向目标
    pub fn permission_denied_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_resolves_to_dashboard() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
    }

    #[test]
    fn unknown_path_resolves_to_not_found() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
    }

    #[test]
    fn login_accepts_both_casings() {
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/Login"), AppRoute::Login);
    }

    #[test]
    fn every_named_route_round_trips() {
        let routes = [
            AppRoute::Login,
            AppRoute::DeleteAccount,
            AppRoute::Dashboard,
            AppRoute::Profile,
            AppRoute::Users,
            AppRoute::PainLocations,
            AppRoute::Facilities,
            AppRoute::Articles,
            AppRoute::Achievements,
            AppRoute::Badges,
            AppRoute::PainLogs,
            AppRoute::MoodLogs,
            AppRoute::HydrationLogs,
            AppRoute::MedicationLogs,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn public_routes_do_not_require_auth() {
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::DeleteAccount.requires_auth());
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::MedicationLogs.requires_auth());
    }
}
