use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AdminApi;
use crate::components::icons::{Icon, IconKind};
use crate::components::toast::Toast;
use crate::config;
use crate::resource::{run_mutation, Notifier, ResourceList};
use crate::web::http::FormField;
use crate::web::router::use_router;
use lwsc_admin_shared::Badge;

fn selected_file(input: &NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked().and_then(|el| el.files()).and_then(|files| files.get(0))
}

#[component]
pub fn BadgesPage() -> impl IntoView {
    let router = use_router();
    let notifier = Notifier::new();
    let list: ResourceList<Badge> = ResourceList::new();

    let (editing, set_editing) = signal(Option::<Badge>::None);
    let (modal_open, set_modal_open) = signal(false);
    let (saving, set_saving) = signal(false);

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (coin_cost, set_coin_cost) = signal(5u64);
    let icon_input = NodeRef::<leptos::html::Input>::new();

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
            list.load(api.badges(), notifier, router, "badges").await;
        });
    };

    Effect::new(move |_| fetch());

    let open_create = move |_| {
        set_editing.set(None);
        set_title.set(String::new());
        set_description.set(String::new());
        set_coin_cost.set(5);
        set_modal_open.set(true);
    };

    let open_edit = move |badge: Badge| {
        set_title.set(badge.title.clone());
        set_description.set(badge.description.clone());
        set_coin_cost.set(badge.coin_cost);
        set_editing.set(Some(badge));
        set_modal_open.set(true);
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure to delete this badge?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let ok = run_mutation(
                api.delete_badge(&id),
                notifier,
                router,
                "Badge deleted successfully",
                "Failed to delete badge",
            )
            .await;
            if ok {
                fetch();
            }
        });
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if title.get().trim().is_empty() {
            notifier.error("Title is required");
            return;
        }

        let mut fields = vec![
            FormField::text("title", title.get_untracked()),
            FormField::text("description", description.get_untracked()),
            FormField::text("coinCost", coin_cost.get_untracked().to_string()),
        ];
        if let Some(file) = selected_file(&icon_input) {
            fields.push(FormField::file("icon", file));
        }

        set_saving.set(true);
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let ok = match editing.get_untracked() {
                Some(badge) => {
                    run_mutation(
                        api.update_badge(&badge.id, fields),
                        notifier,
                        router,
                        "Badge updated successfully",
                        "Failed to save badge",
                    )
                    .await
                }
                None => {
                    run_mutation(
                        api.create_badge(fields),
                        notifier,
                        router,
                        "Badge created successfully",
                        "Failed to save badge",
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
                    <h3 class="card-title">"Badges"</h3>
                    <button class="btn btn-primary btn-sm gap-2" on:click=open_create>
                        <Icon kind=IconKind::Plus class="h-4 w-4" />
                        "Add Badge"
                    </button>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Icon"</th>
                                <th>"Title"</th>
                                <th>"Coin Cost"</th>
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
                                        "No badges yet."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || list.items.get()
                                key=|badge| badge.id.clone()
                                children=move |badge| {
                                    let id = badge.id.clone();
                                    let edit_target = badge.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                {match &badge.icon {
                                                    Some(icon) => view! {
                                                        <img
                                                            src=config::resolve_image(icon)
                                                            alt="icon"
                                                            class="w-10 h-10 object-contain"
                                                        />
                                                    }
                                                        .into_any(),
                                                    None => view! {
                                                        <Icon
                                                            kind=IconKind::Badge
                                                            class="h-6 w-6 text-secondary"
                                                        />
                                                    }
                                                        .into_any(),
                                                }}
                                            </td>
                                            <td class="font-medium">{badge.title.clone()}</td>
                                            <td>
                                                <span class="badge badge-secondary badge-outline">
                                                    {badge.coin_cost}
                                                </span>
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

            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_modal_open.set(false)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || if editing.get().is_some() { "Edit Badge" } else { "Add Badge" }}
                    </h3>

                    <form on:submit=on_save class="space-y-4 mt-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Title"</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                                prop:value=title
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Description"</span>
                            </label>
                            <textarea
                                class="textarea textarea-bordered w-full"
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                                prop:value=description
                                required
                            ></textarea>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Coin Cost"</span>
                            </label>
                            <input
                                type="number"
                                min="0"
                                class="input input-bordered w-full"
                                prop:value=move || coin_cost.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(value) = event_target_value(&ev).parse::<u64>() {
                                        set_coin_cost.set(value);
                                    }
                                }
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Icon"</span>
                            </label>
                            <input
                                type="file"
                                accept="image/*"
                                class="file-input file-input-bordered w-full"
                                node_ref=icon_input
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
