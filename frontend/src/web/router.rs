//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，实现"监听 -> 验证 -> 处理 -> 加载"
//! 的导航流程。守卫在导航时执行：
//! - 受保护路由 + 令牌缺失/过期 => 清除访问令牌并重定向登录页
//! - 受保护路由 + 档案缺少所需权限 => 重定向仪表盘
//! - 已认证用户访问登录页 => 重定向仪表盘
//!
//! 守卫只是体验层面的拦截；服务端在每个 API 调用上重新鉴权。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::route::AppRoute;
use crate::session::{self, LocalSessionStore, SessionStore, TokenState};
use crate::store::AppStore;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 应用状态（守卫读取缓存的档案做权限判断）
    store: AppStore,
}

impl RouterService {
    fn new(store: AppStore) -> Self {
        let (current_route, set_route) = signal(AppRoute::default());
        Self {
            current_route,
            set_route,
            store,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心守卫逻辑：把目标路由解析成实际要渲染的路由**
    fn resolve(&self, target: AppRoute) -> AppRoute {
        let session = LocalSessionStore;
        let token = session::token_state(&session, session::now_secs());

        if target.requires_auth() {
            if token != TokenState::Valid {
                // 过期与无法解码同等对待：清掉访问令牌，回登录页
                session.clear_access_token();
                return AppRoute::auth_failure_redirect();
            }

            // 档案尚未加载时先放行，档案到位后会重新校验
            if let Some(permission) = target.permission() {
                let denied = self
                    .store
                    .profile
                    .with_untracked(|p| p.as_ref().map(|p| !p.allows(permission)))
                    .unwrap_or(false);
                // 仪表盘自身是权限不足时的落点，不再往外跳
                if denied && target != AppRoute::permission_denied_redirect() {
                    return AppRoute::permission_denied_redirect();
                }
            }
        } else if target.should_redirect_when_authenticated() && token == TokenState::Valid {
            return AppRoute::Dashboard;
        }

        target
    }

    /// 导航与守卫入口
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    pub fn navigate_route(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// # Arguments
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let resolved = self.resolve(target);

        if resolved != target {
            web_sys::console::log_1(
                &format!("[Router] {} denied, redirecting to {}", target, resolved).into(),
            );
        }

        if use_push {
            push_history_state(resolved.to_path());
        } else {
            replace_history_state(resolved.to_path());
        }
        self.set_route.set(resolved);
    }

    /// 初始路由：从地址栏解析并过守卫（replaceState，不留历史）
    fn init_current(&self) {
        self.navigate_to_route(AppRoute::from_path(&current_path()), false);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let service = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            // popstate 时也执行守卫逻辑
            let target = AppRoute::from_path(&current_path());
            let resolved = service.resolve(target);
            if resolved != target {
                replace_history_state(resolved.to_path());
            }
            service.set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 档案变化时重新校验当前路由
    ///
    /// 档案是异步加载的：守卫放行后才到位的档案可能否决当前路由，
    /// 登出清空档案时受保护页面也要被赶回登录页。
    fn setup_profile_recheck(&self) {
        let service = *self;

        Effect::new(move |_| {
            // 订阅档案信号
            service.store.profile.track();

            let current = service.current_route.get_untracked();
            let resolved = service.resolve(current);
            if resolved != current {
                replace_history_state(resolved.to_path());
                service.set_route.set(resolved);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
pub fn provide_router(store: AppStore) -> RouterService {
    let router = RouterService::new(store);

    router.init_current();
    router.init_popstate_listener();
    router.setup_profile_recheck();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 应用状态容器
    store: AppStore,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(store);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
