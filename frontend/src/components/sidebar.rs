//! 侧边栏组件
//!
//! 按缓存的档案推导可见菜单（见 `nav::filter_menu`），
//! 展示 / 折叠两个开关都来自全局 UI 状态。

use leptos::prelude::*;

use super::icons::Icon;
use crate::nav::{filter_menu, menu, NavGroup, NavItem, NavNode};
use crate::store::{use_store, UiPatch};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

fn nav_item(item: &NavItem, current: ReadSignal<AppRoute>) -> impl IntoView {
    let router = use_router();
    let route = item.route;
    let name = item.name;
    let icon = item.icon;

    view! {
        <li>
            <a
                class=move || {
                    if current.get() == route { "active" } else { "" }
                }
                on:click=move |_| router.navigate_route(route)
            >
                {icon.map(|kind| view! { <Icon kind=kind class="h-5 w-5" /> })}
                <span>{name}</span>
            </a>
        </li>
    }
}

fn nav_group(group: &NavGroup, current: ReadSignal<AppRoute>) -> impl IntoView {
    let children = group
        .children
        .iter()
        .map(|item| nav_item(item, current))
        .collect_view();

    view! {
        <li>
            <details open>
                <summary>
                    {group.icon.map(|kind| view! { <Icon kind=kind class="h-5 w-5" /> })}
                    <span>{group.name}</span>
                </summary>
                <ul>{children}</ul>
            </details>
        </li>
    }
}

#[component]
pub fn AppSidebar() -> impl IntoView {
    let store = use_store();
    let router = use_router();
    let current = router.current_route();

    // 档案变化时重算可见菜单
    let visible = Memo::new(move |_| {
        let profile = store.profile.get();
        filter_menu(menu(), profile.as_ref())
    });

    let aside_class = move || {
        let ui = store.ui.get();
        let width = if ui.sidebar_unfoldable { "w-20" } else { "w-64" };
        let shown = if ui.sidebar_show { "" } else { "hidden" };
        format!(
            "bg-base-100 border-r border-base-300 min-h-screen flex flex-col {} {}",
            width, shown
        )
    };

    view! {
        <aside class=aside_class>
            <div class="border-b border-base-300 flex justify-center py-4">
                <a
                    class="text-xl font-bold text-primary cursor-pointer"
                    on:click=move |_| router.navigate_route(AppRoute::Dashboard)
                >
                    {move || {
                        if store.ui.get().sidebar_unfoldable { "LW" } else { "LWSC Admin" }
                    }}
                </a>
            </div>

            <ul class="menu flex-1 w-full">
                {move || {
                    visible
                        .get()
                        .iter()
                        .map(|node| match node {
                            NavNode::Title(title) => {
                                view! { <li class="menu-title">{*title}</li> }.into_any()
                            }
                            NavNode::Item(item) => nav_item(item, current).into_any(),
                            NavNode::Group(group) => nav_group(group, current).into_any(),
                        })
                        .collect_view()
                }}
            </ul>

            <div class="border-t border-base-300 p-2 hidden lg:flex">
                <button
                    class="btn btn-ghost btn-sm btn-block"
                    on:click=move |_| {
                        let unfoldable = store.ui.get_untracked().sidebar_unfoldable;
                        store.merge(UiPatch::sidebar_unfoldable(!unfoldable));
                    }
                >
                    {move || if store.ui.get().sidebar_unfoldable { "»" } else { "«" }}
                </button>
            </div>
        </aside>
    }
}
