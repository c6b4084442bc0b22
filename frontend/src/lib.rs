//! LWSC 管理后台前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由定义与守卫引擎
//! - `store`: 全局 UI 状态 + 缓存档案
//! - `session`: 令牌存取与纯客户端过期判断
//! - `api`: 认证 HTTP 客户端与资源门面
//! - `nav`: 侧边栏菜单树与可见性过滤
//! - `components` / `views`: UI 层

mod api;
mod config;
mod error;
mod nav;
mod resource;
mod session;
mod store;

mod components {
    pub mod chart;
    pub mod header;
    pub mod icons;
    pub mod layout;
    pub mod pagination;
    pub mod sidebar;
    pub mod toast;
}

mod views {
    pub mod achievements;
    pub mod articles;
    pub mod badges;
    pub mod dashboard;
    pub mod delete_account;
    pub mod facilities;
    pub mod logs;
    pub mod login;
    pub mod pain_locations;
    pub mod profile;
    pub mod users;
}

// 原生 Web API 封装模块
pub(crate) mod web;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AdminApi;
use crate::components::layout::AppLayout;
use crate::error::ApiError;
use crate::session::{LocalSessionStore, SessionStore, TokenState};
use crate::store::{theme_from_search, AppStore, UiPatch};
use crate::views::achievements::AchievementsPage;
use crate::views::articles::ArticlesPage;
use crate::views::badges::BadgesPage;
use crate::views::dashboard::DashboardPage;
use crate::views::delete_account::DeleteAccountPage;
use crate::views::facilities::FacilitiesPage;
use crate::views::login::LoginPage;
use crate::views::logs::{HydrationLogsPage, MedicationLogsPage, MoodLogsPage, PainLogsPage};
use crate::views::pain_locations::PainLocationsPage;
use crate::views::profile::ProfilePage;
use crate::views::users::UsersPage;
use crate::web::route::AppRoute;
use crate::web::router::{use_router, Router, RouterOutlet};

/// 档案加载器
///
/// 检测到有效令牌且档案未缓存时拉取 `me`；401 无法恢复时清掉
/// 令牌对与档案（保证不变量：档案永不脱离有效令牌存在）。
#[component]
fn ProfileWatcher() -> impl IntoView {
    let store = store::use_store();
    let router = use_router();

    Effect::new(move |_| {
        // 路由变化与档案清除都触发复查
        router.current_route().track();
        if store.profile.with(|p| p.is_some()) {
            return;
        }
        if session::token_state(&LocalSessionStore, session::now_secs()) != TokenState::Valid {
            return;
        }

        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            match api.me().await {
                Ok(profile) => store.set_profile(Some(profile)),
                Err(ApiError::Unauthorized) => {
                    LocalSessionStore.clear();
                    store.set_profile(None);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch profile: {}", err).into(),
                    );
                }
            }
        });
    });
}

/// 路由匹配函数
///
/// 公开页面裸渲染；受保护页面包在后台布局里。
fn route_matcher(route: AppRoute) -> AnyView {
    let page: AnyView = match route {
        AppRoute::Login => return view! { <LoginPage /> }.into_any(),
        AppRoute::DeleteAccount => return view! { <DeleteAccountPage /> }.into_any(),
        AppRoute::NotFound => {
            return view! {
                <div class="flex items-center justify-center min-h-screen bg-base-200">
                    <div class="text-center">
                        <h1 class="text-6xl font-bold text-error">"404"</h1>
                        <p class="text-xl mt-4">"Page not found"</p>
                        <a class="btn btn-primary mt-6" href="/dashboard">
                            "Back to dashboard"
                        </a>
                    </div>
                </div>
            }
            .into_any();
        }
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::Users => view! { <UsersPage /> }.into_any(),
        AppRoute::PainLocations => view! { <PainLocationsPage /> }.into_any(),
        AppRoute::Facilities => view! { <FacilitiesPage /> }.into_any(),
        AppRoute::Articles => view! { <ArticlesPage /> }.into_any(),
        AppRoute::Achievements => view! { <AchievementsPage /> }.into_any(),
        AppRoute::Badges => view! { <BadgesPage /> }.into_any(),
        AppRoute::PainLogs => view! { <PainLogsPage /> }.into_any(),
        AppRoute::MoodLogs => view! { <MoodLogsPage /> }.into_any(),
        AppRoute::HydrationLogs => view! { <HydrationLogsPage /> }.into_any(),
        AppRoute::MedicationLogs => view! { <MedicationLogsPage /> }.into_any(),
    };

    view! { <AppLayout>{page}</AppLayout> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建应用状态容器
    let store = AppStore::new();
    provide_context(store);

    // 2. 从 `?theme=` 查询参数播种主题
    if let Some(theme) = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| theme_from_search(&search))
    {
        store.merge(UiPatch::theme(theme));
    }

    view! {
        // 3. 路由器组件：守卫读取状态容器里的档案
        <Router store=store>
            <ProfileWatcher />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
