//! 页头组件
//!
//! 侧边栏开关、当前页标题、主题切换与账户下拉（档案 / 登出）。

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::session::{LocalSessionStore, SessionStore};
use crate::store::{use_store, UiPatch};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn AppHeader() -> impl IntoView {
    let store = use_store();
    let router = use_router();
    let current = router.current_route();

    let toggle_sidebar = move |_| {
        let shown = store.ui.get_untracked().sidebar_show;
        store.merge(UiPatch::sidebar_show(!shown));
    };

    let toggle_theme = move |_| {
        let theme = store.ui.get_untracked().theme;
        let next = if theme == "dark" { "light" } else { "dark" };
        store.merge(UiPatch::theme(next));
    };

    let on_logout = move |_| {
        LocalSessionStore.clear();
        store.set_profile(None);
        // 历史遗留路径写法，见 AppRoute::from_path
        router.navigate("/Login");
    };

    view! {
        <header class="navbar bg-base-100 border-b border-base-300 px-4">
            <div class="flex-1 gap-2">
                <button class="btn btn-ghost btn-square" on:click=toggle_sidebar>
                    <Icon kind=IconKind::Menu class="h-6 w-6" />
                </button>
                <span class="text-lg font-semibold">{move || current.get().title()}</span>
            </div>
            <div class="flex-none gap-1">
                <button class="btn btn-ghost btn-square" on:click=toggle_theme>
                    {move || {
                        if store.ui.get().theme == "dark" {
                            view! { <Icon kind=IconKind::Sun class="h-5 w-5" /> }
                        } else {
                            view! { <Icon kind=IconKind::Moon class="h-5 w-5" /> }
                        }
                    }}
                </button>
                <div class="dropdown dropdown-end">
                    <div
                        tabindex="0"
                        role="button"
                        class="btn btn-ghost btn-circle avatar placeholder"
                    >
                        <div class="bg-primary text-primary-content w-9 rounded-full">
                            <span>
                                {move || {
                                    store
                                        .profile
                                        .get()
                                        .map(|p| {
                                            p.name.chars().next().unwrap_or('A').to_uppercase().to_string()
                                        })
                                        .unwrap_or_else(|| "A".to_string())
                                }}
                            </span>
                        </div>
                    </div>
                    <ul
                        tabindex="0"
                        class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-52"
                    >
                        <li class="menu-title">"Menu"</li>
                        <li>
                            <a on:click=move |_| router.navigate_route(AppRoute::Profile)>
                                <Icon kind=IconKind::User class="h-4 w-4" />
                                "Profile"
                            </a>
                        </li>
                        <li>
                            <a on:click=on_logout>
                                <Icon kind=IconKind::LogOut class="h-4 w-4" />
                                "Logout"
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
        </header>
    }
}
