use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AdminApi;
use crate::components::icons::{Icon, IconKind};
use crate::components::toast::Toast;
use crate::config;
use crate::resource::{run_mutation, Notifier, ResourceList};
use crate::web::http::FormField;
use crate::web::router::use_router;
use lwsc_admin_shared::Achievement;

fn selected_file(input: &NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked().and_then(|el| el.files()).and_then(|files| files.get(0))
}

#[component]
pub fn AchievementsPage() -> impl IntoView {
    let router = use_router();
    let notifier = Notifier::new();
    let list: ResourceList<Achievement> = ResourceList::new();

    let (editing, set_editing) = signal(Option::<Achievement>::None);
    let (modal_open, set_modal_open) = signal(false);
    let (saving, set_saving) = signal(false);

    // 表单字段：达成条件是 {type, value} 的自由结构
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (reward_coins, set_reward_coins) = signal(10u64);
    let (criteria_type, set_criteria_type) = signal("log_count".to_string());
    let (criteria_value, set_criteria_value) = signal(1u64);
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
            list.load(api.achievements(), notifier, router, "achievements")
                .await;
        });
    };

    Effect::new(move |_| fetch());

    let open_create = move |_| {
        set_editing.set(None);
        set_title.set(String::new());
        set_description.set(String::new());
        set_reward_coins.set(10);
        set_criteria_type.set("log_count".to_string());
        set_criteria_value.set(1);
        set_modal_open.set(true);
    };

    let open_edit = move |achievement: Achievement| {
        set_title.set(achievement.title.clone());
        set_description.set(achievement.description.clone());
        set_reward_coins.set(achievement.reward_coins);
        if let Some(criteria) = &achievement.criteria {
            if let Some(kind) = criteria.get("type").and_then(|v| v.as_str()) {
                set_criteria_type.set(kind.to_string());
            }
            if let Some(value) = criteria.get("value").and_then(|v| v.as_u64()) {
                set_criteria_value.set(value);
            }
        }
        set_editing.set(Some(achievement));
        set_modal_open.set(true);
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure to delete this achievement?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let ok = run_mutation(
                api.delete_achievement(&id),
                notifier,
                router,
                "Achievement deleted successfully",
                "Failed to delete achievement",
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

        let criteria = serde_json::json!({
            "type": criteria_type.get_untracked(),
            "value": criteria_value.get_untracked(),
        });

        let mut fields = vec![
            FormField::text("title", title.get_untracked()),
            FormField::text("description", description.get_untracked()),
            FormField::text("rewardCoins", reward_coins.get_untracked().to_string()),
            FormField::text("criteria", criteria.to_string()),
        ];
        if let Some(file) = selected_file(&icon_input) {
            fields.push(FormField::file("icon", file));
        }

        set_saving.set(true);
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let ok = match editing.get_untracked() {
                Some(achievement) => {
                    run_mutation(
                        api.update_achievement(&achievement.id, fields),
                        notifier,
                        router,
                        "Achievement updated successfully",
                        "Failed to save achievement",
                    )
                    .await
                }
                None => {
                    run_mutation(
                        api.create_achievement(fields),
                        notifier,
                        router,
                        "Achievement created successfully",
                        "Failed to save achievement",
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
                    <h3 class="card-title">"Achievements"</h3>
                    <button class="btn btn-primary btn-sm gap-2" on:click=open_create>
                        <Icon kind=IconKind::Plus class="h-4 w-4" />
                        "Add Achievement"
                    </button>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Icon"</th>
                                <th>"Title"</th>
                                <th>"Reward Coins"</th>
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
                                        "No achievements yet."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || list.items.get()
                                key=|achievement| achievement.id.clone()
                                children=move |achievement| {
                                    let id = achievement.id.clone();
                                    let edit_target = achievement.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                {match &achievement.icon {
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
                                                            kind=IconKind::Star
                                                            class="h-6 w-6 text-warning"
                                                        />
                                                    }
                                                        .into_any(),
                                                }}
                                            </td>
                                            <td class="font-medium">{achievement.title.clone()}</td>
                                            <td>
                                                <span class="badge badge-warning badge-outline">
                                                    {achievement.reward_coins}
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
                        {move || {
                            if editing.get().is_some() {
                                "Edit Achievement"
                            } else {
                                "Add Achievement"
                            }
                        }}
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

                        <div class="grid grid-cols-3 gap-4">
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Reward Coins"</span>
                                </label>
                                <input
                                    type="number"
                                    min="0"
                                    class="input input-bordered w-full"
                                    prop:value=move || reward_coins.get().to_string()
                                    on:input=move |ev| {
                                        if let Ok(value) = event_target_value(&ev).parse::<u64>() {
                                            set_reward_coins.set(value);
                                        }
                                    }
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Criteria Type"</span>
                                </label>
                                <select
                                    class="select select-bordered w-full"
                                    on:change=move |ev| set_criteria_type.set(event_target_value(&ev))
                                >
                                    {["log_count", "streak_days", "hydration_goal"]
                                        .into_iter()
                                        .map(|kind| {
                                            view! {
                                                <option
                                                    value=kind
                                                    selected=move || criteria_type.get() == kind
                                                >
                                                    {kind}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Criteria Value"</span>
                                </label>
                                <input
                                    type="number"
                                    min="1"
                                    class="input input-bordered w-full"
                                    prop:value=move || criteria_value.get().to_string()
                                    on:input=move |ev| {
                                        if let Ok(value) = event_target_value(&ev).parse::<u64>() {
                                            set_criteria_value.set(value);
                                        }
                                    }
                                    required
                                />
                            </div>
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
