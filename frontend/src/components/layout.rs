//! 受保护页面的布局外壳：侧边栏 + 页头 + 内容区

use leptos::prelude::*;

use super::header::AppHeader;
use super::sidebar::AppSidebar;
use crate::store::use_store;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let store = use_store();

    view! {
        <div
            class="flex min-h-screen bg-base-200"
            data-theme=move || store.ui.get().theme
        >
            <AppSidebar />
            <div class="flex-1 flex flex-col min-w-0">
                <AppHeader />
                <main class="p-4 md:p-6 flex-1">{children()}</main>
            </div>
        </div>
    }
}
