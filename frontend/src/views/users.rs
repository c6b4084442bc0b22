use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AdminApi;
use crate::components::icons::{Icon, IconKind};
use crate::components::pagination::Pagination;
use crate::components::toast::Toast;
use crate::resource::{run_mutation, Notifier, ResourceList};
use crate::web::router::use_router;
use lwsc_admin_shared::{date::format_date, PageQuery, User};

const PAGE_SIZE: u64 = 10;

#[component]
pub fn UsersPage() -> impl IntoView {
    let router = use_router();
    let notifier = Notifier::new();
    let list: ResourceList<User> = ResourceList::new();

    let (search, set_search) = signal(String::new());

    let fetch = move |page: u64| {
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let query = PageQuery::new(page, PAGE_SIZE).with_search(search.get_untracked());
            list.load(api.users(&query), notifier, router, "users").await;
            list.page.set(page);
        });
    };

    // 首次加载
    Effect::new(move |_| fetch(1));

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        fetch(1);
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure to delete this user?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let ok = run_mutation(
                api.delete_user(&id),
                notifier,
                router,
                "User deleted successfully",
                "Failed to delete user",
            )
            .await;
            if ok {
                fetch(list.page.get_untracked());
            }
        });
    };

    view! {
        <div class="card bg-base-100 shadow">
            <Toast notifier=notifier />
            <div class="card-body">
                <div class="flex items-center justify-between flex-wrap gap-2">
                    <h3 class="card-title">"User Management"</h3>
                    <form class="join" on:submit=on_search>
                        <input
                            type="text"
                            placeholder="Search by name or email"
                            class="input input-bordered input-sm join-item w-64"
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                            prop:value=search
                        />
                        <button type="submit" class="btn btn-sm btn-primary join-item">
                            <Icon kind=IconKind::Search class="h-4 w-4" />
                        </button>
                    </form>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Joined"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || list.loading.get() && list.is_empty()>
                                <tr>
                                    <td colspan="5" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                        " Loading..."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !list.loading.get() && list.is_empty()>
                                <tr>
                                    <td colspan="5" class="text-center py-8 text-base-content/50">
                                        "No users found."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || list.items.get()
                                key=|user| user.id.clone()
                                children=move |user| {
                                    let id = user.id.clone();
                                    let role_badge = if user.role == "admin" {
                                        "badge badge-info"
                                    } else {
                                        "badge badge-success"
                                    };
                                    view! {
                                        <tr>
                                            <td>{format!("{} {}", user.first_name, user.last_name)}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>
                                                <span class=role_badge>
                                                    {user.role.to_uppercase()}
                                                </span>
                                            </td>
                                            <td>{format_date(&user.created_at)}</td>
                                            <td>
                                                <button
                                                    class="btn btn-ghost btn-sm text-error"
                                                    on:click=move |_| handle_delete(id.clone())
                                                >
                                                    <Icon kind=IconKind::Trash class="h-4 w-4" />
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <Pagination
                    page=list.page
                    total=list.total
                    page_size=PAGE_SIZE
                    on_change=move |page| fetch(page)
                />
            </div>
        </div>
    }
}
