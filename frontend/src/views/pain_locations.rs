use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AdminApi;
use crate::components::icons::{Icon, IconKind};
use crate::components::toast::Toast;
use crate::config;
use crate::resource::{run_mutation, Notifier, ResourceList};
use crate::web::http::FormField;
use crate::web::router::use_router;
use lwsc_admin_shared::PainLocation;

/// 从文件输入框取当前选择的文件
fn selected_file(input: &NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked().and_then(|el| el.files()).and_then(|files| files.get(0))
}

#[component]
pub fn PainLocationsPage() -> impl IntoView {
    let router = use_router();
    let notifier = Notifier::new();
    let list: ResourceList<PainLocation> = ResourceList::new();

    // 模态框状态：None = 新建，Some = 编辑
    let (editing, set_editing) = signal(Option::<PainLocation>::None);
    let (modal_open, set_modal_open) = signal(false);
    let (saving, set_saving) = signal(false);

    // 表单字段
    let (name, set_name) = signal(String::new());
    let (is_active, set_is_active) = signal(true);
    let logo_input = NodeRef::<leptos::html::Input>::new();

    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if modal_open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let fetch = move || {
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            list.load(api.pain_locations(), notifier, router, "pain locations")
                .await;
        });
    };

    Effect::new(move |_| fetch());

    let open_create = move |_| {
        set_editing.set(None);
        set_name.set(String::new());
        set_is_active.set(true);
        set_modal_open.set(true);
    };

    let open_edit = move |location: PainLocation| {
        set_name.set(location.name.clone());
        set_is_active.set(location.is_active);
        set_editing.set(Some(location));
        set_modal_open.set(true);
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure to delete this location?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let ok = run_mutation(
                api.delete_pain_location(&id),
                notifier,
                router,
                "Location deleted successfully",
                "Failed to delete location",
            )
            .await;
            if ok {
                fetch();
            }
        });
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() {
            notifier.error("Name is required");
            return;
        }

        let mut fields = vec![
            FormField::text("name", name.get_untracked()),
            FormField::text("isActive", is_active.get_untracked().to_string()),
        ];
        if let Some(file) = selected_file(&logo_input) {
            fields.push(FormField::file("logo", file));
        }

        set_saving.set(true);
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let ok = match editing.get_untracked() {
                Some(location) => {
                    run_mutation(
                        api.update_pain_location(&location.id, fields),
                        notifier,
                        router,
                        "Location updated successfully",
                        "Failed to save location",
                    )
                    .await
                }
                None => {
                    run_mutation(
                        api.create_pain_location(fields),
                        notifier,
                        router,
                        "Location created successfully",
                        "Failed to save location",
                    )
                    .await
                }
            };
            set_saving.set(false);
            if ok {
                set_modal_open.set(false);
                fetch();
            }
        });
    };

    view! {
        <div class="card bg-base-100 shadow">
            <Toast notifier=notifier />
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Pain Locations"</h3>
                    <div class="flex gap-1">
                        <button
                            class="btn btn-ghost btn-sm btn-circle"
                            disabled=move || list.loading.get()
                            on:click=move |_| fetch()
                        >
                            <Icon kind=IconKind::Refresh class="h-4 w-4" />
                        </button>
                        <button class="btn btn-primary btn-sm gap-2" on:click=open_create>
                            <Icon kind=IconKind::Plus class="h-4 w-4" />
                            "Add Location"
                        </button>
                    </div>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Logo"</th>
                                <th>"Name"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || list.loading.get() && list.is_empty()>
                                <tr>
                                    <td colspan="4" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !list.loading.get() && list.is_empty()>
                                <tr>
                                    <td colspan="4" class="text-center py-8 text-base-content/50">
                                        "No pain locations yet."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || list.items.get()
                                key=|location| location.id.clone()
                                children=move |location| {
                                    let id = location.id.clone();
                                    let edit_target = location.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                {match &location.logo {
                                                    Some(logo) => view! {
                                                        <img
                                                            src=config::resolve_image(logo)
                                                            alt="logo"
                                                            class="w-10 h-10 object-contain"
                                                        />
                                                    }
                                                        .into_any(),
                                                    None => "No Logo".into_any(),
                                                }}
                                            </td>
                                            <td>{location.name.clone()}</td>
                                            <td>
                                                <input
                                                    type="checkbox"
                                                    class="toggle toggle-success toggle-sm"
                                                    prop:checked=location.is_active
                                                    disabled
                                                />
                                            </td>
                                            <td>
                                                <div class="flex gap-1">
                                                    <button
                                                        class="btn btn-ghost btn-sm"
                                                        on:click=move |_| open_edit(edit_target.clone())
                                                    >
                                                        <Icon kind=IconKind::Pencil class="h-4 w-4" />
                                                    </button>
                                                    <button
                                                        class="btn btn-ghost btn-sm text-error"
                                                        on:click=move |_| handle_delete(id.clone())
                                                    >
                                                        <Icon kind=IconKind::Trash class="h-4 w-4" />
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            // 新建 / 编辑模态框
            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_modal_open.set(false)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || {
                            if editing.get().is_some() { "Edit Location" } else { "Add Location" }
                        }}
                    </h3>

                    <form on:submit=on_save class="space-y-4 mt-4">
                        <div class="form-control">
                            <label class="label" for="loc-name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="loc-name"
                                type="text"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label cursor-pointer justify-start gap-3">
                                <span class="label-text">"Active"</span>
                                <input
                                    type="checkbox"
                                    class="toggle toggle-success"
                                    prop:checked=is_active
                                    on:change=move |ev| set_is_active.set(event_target_checked(&ev))
                                />
                            </label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="loc-logo">
                                <span class="label-text">"Logo"</span>
                            </label>
                            <input
                                id="loc-logo"
                                type="file"
                                accept="image/*"
                                class="file-input file-input-bordered w-full"
                                node_ref=logo_input
                            />
                        </div>

                        <div class="modal-action">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| set_modal_open.set(false)
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </div>
                <form method="dialog" class="modal-backdrop">
                    <button>"close"</button>
                </form>
            </dialog>
        </div>
    }
}
