//! 全局 UI 状态模块
//!
//! 用显式的状态容器（Context 注入）承载三个 UI 偏好字段与缓存的
//! 管理员档案。只有两种变更：UI 字段的合并补丁，和档案的整体替换。
//! 状态只存活在内存里，不写回存储。

use leptos::prelude::*;
use lwsc_admin_shared::AdminProfile;

/// 三个 UI 偏好字段
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// 侧边栏是否展示
    pub sidebar_show: bool,
    /// 侧边栏是否处于折叠（仅图标）模式
    pub sidebar_unfoldable: bool,
    /// 颜色主题
    pub theme: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_show: true,
            sidebar_unfoldable: false,
            theme: "light".to_string(),
        }
    }
}

/// UI 字段的合并补丁：`None` 表示该字段保持不变
#[derive(Debug, Clone, Default)]
pub struct UiPatch {
    pub sidebar_show: Option<bool>,
    pub sidebar_unfoldable: Option<bool>,
    pub theme: Option<String>,
}

impl UiPatch {
    pub fn sidebar_show(value: bool) -> Self {
        Self {
            sidebar_show: Some(value),
            ..Default::default()
        }
    }

    pub fn sidebar_unfoldable(value: bool) -> Self {
        Self {
            sidebar_unfoldable: Some(value),
            ..Default::default()
        }
    }

    pub fn theme(value: impl Into<String>) -> Self {
        Self {
            theme: Some(value.into()),
            ..Default::default()
        }
    }
}

impl UiState {
    /// **纯函数：应用合并补丁**
    pub fn merged(&self, patch: &UiPatch) -> UiState {
        UiState {
            sidebar_show: patch.sidebar_show.unwrap_or(self.sidebar_show),
            sidebar_unfoldable: patch.sidebar_unfoldable.unwrap_or(self.sidebar_unfoldable),
            theme: patch.theme.clone().unwrap_or_else(|| self.theme.clone()),
        }
    }
}

/// 应用状态容器
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AppStore {
    /// UI 偏好
    pub ui: RwSignal<UiState>,
    /// 缓存的管理员档案（登录且令牌有效时才会被填充）
    pub profile: RwSignal<Option<AdminProfile>>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            ui: RwSignal::new(UiState::default()),
            profile: RwSignal::new(None),
        }
    }

    /// 变更一：UI 字段合并补丁
    pub fn merge(&self, patch: UiPatch) {
        self.ui.update(|state| *state = state.merged(&patch));
    }

    /// 变更二：档案设置 / 清除
    pub fn set_profile(&self, profile: Option<AdminProfile>) {
        self.profile.set(profile);
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取应用状态容器
pub fn use_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore should be provided")
}

/// 从 `?theme=` 查询参数里提取主题名
///
/// 只接受开头连续的字母 / 数字 / 空白，遇到其他字符截断；
/// 没有合法前缀时返回 None。
pub fn sanitize_theme(raw: &str) -> Option<String> {
    let prefix: String = raw
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    if prefix.is_empty() {
        None
    } else {
        Some(prefix)
    }
}

/// 从地址栏查询串（`?theme=dark&...`）提取主题名
pub fn theme_from_search(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("theme="))
        .and_then(sanitize_theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_state() {
        let state = UiState::default();
        assert!(state.sidebar_show);
        assert!(!state.sidebar_unfoldable);
        assert_eq!(state.theme, "light");
    }

    #[test]
    fn merge_patch_only_touches_set_fields() {
        let state = UiState::default();

        let hidden = state.merged(&UiPatch::sidebar_show(false));
        assert!(!hidden.sidebar_show);
        assert_eq!(hidden.theme, "light");
        assert!(!hidden.sidebar_unfoldable);

        let themed = hidden.merged(&UiPatch::theme("dark"));
        assert_eq!(themed.theme, "dark");
        assert!(!themed.sidebar_show);
    }

    #[test]
    fn empty_patch_is_identity() {
        let state = UiState {
            sidebar_show: false,
            sidebar_unfoldable: true,
            theme: "dark".into(),
        };
        assert_eq!(state.merged(&UiPatch::default()), state);
    }

    #[test]
    fn theme_param_is_sanitized() {
        assert_eq!(sanitize_theme("dark"), Some("dark".to_string()));
        assert_eq!(sanitize_theme("dark&x=1"), Some("dark".to_string()));
        assert_eq!(sanitize_theme("high contrast"), Some("high contrast".to_string()));
        assert_eq!(sanitize_theme("<script>"), None);
        assert_eq!(sanitize_theme(""), None);
    }

    #[test]
    fn theme_is_read_from_the_query_string() {
        assert_eq!(theme_from_search("?theme=dark"), Some("dark".to_string()));
        assert_eq!(
            theme_from_search("?x=1&theme=light&y=2"),
            Some("light".to_string())
        );
        assert_eq!(theme_from_search("?theme="), None);
        assert_eq!(theme_from_search(""), None);
    }
}
