use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AdminApi;
use crate::components::icons::{Icon, IconKind};
use crate::components::pagination::Pagination;
use crate::components::toast::Toast;
use crate::resource::{run_mutation, Notifier, ResourceList};
use crate::web::router::use_router;
use lwsc_admin_shared::{Facility, FacilityInput, PageQuery};

const PAGE_SIZE: u64 = 10;

/// 设施表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy`，可以整体在组件内传递。
/// 坐标以经纬度两个文本框输入，提交时合成坐标对。
#[derive(Clone, Copy)]
struct FacilityForm {
    name: RwSignal<String>,
    kind: RwSignal<String>,
    description: RwSignal<String>,
    mobile: RwSignal<String>,
    email: RwSignal<String>,
    website: RwSignal<String>,
    address: RwSignal<String>,
    state: RwSignal<String>,
    country: RwSignal<String>,
    zipcode: RwSignal<String>,
    lng: RwSignal<String>,
    lat: RwSignal<String>,
}

impl FacilityForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            kind: RwSignal::new("hospital".to_string()),
            description: RwSignal::new(String::new()),
            mobile: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            website: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            state: RwSignal::new(String::new()),
            country: RwSignal::new(String::new()),
            zipcode: RwSignal::new(String::new()),
            lng: RwSignal::new(String::new()),
            lat: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        self.fill(&Facility {
            kind: "hospital".to_string(),
            ..Default::default()
        });
    }

    fn fill(&self, facility: &Facility) {
        self.name.set(facility.name.clone());
        self.kind.set(facility.kind.clone());
        self.description.set(facility.description.clone());
        self.mobile.set(facility.mobile.clone());
        self.email.set(facility.email.clone());
        self.website.set(facility.website.clone());
        self.address.set(facility.address.clone());
        self.state.set(facility.state.clone());
        self.country.set(facility.country.clone());
        self.zipcode.set(facility.zipcode.clone());
        self.lng.set(
            facility
                .coordinates
                .first()
                .map(|v| v.to_string())
                .unwrap_or_default(),
        );
        self.lat.set(
            facility
                .coordinates
                .get(1)
                .map(|v| v.to_string())
                .unwrap_or_default(),
        );
    }

    /// 校验并转换为请求载荷；坐标无法解析时返回错误文案
    fn to_input(&self) -> Result<FacilityInput, String> {
        let name = self.name.get_untracked();
        if name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        let lng: f64 = self
            .lng
            .get_untracked()
            .trim()
            .parse()
            .map_err(|_| "Longitude must be a number".to_string())?;
        let lat: f64 = self
            .lat
            .get_untracked()
            .trim()
            .parse()
            .map_err(|_| "Latitude must be a number".to_string())?;

        Ok(FacilityInput {
            name,
            kind: self.kind.get_untracked(),
            description: self.description.get_untracked(),
            mobile: self.mobile.get_untracked(),
            email: self.email.get_untracked(),
            website: self.website.get_untracked(),
            address: self.address.get_untracked(),
            state: self.state.get_untracked(),
            country: self.country.get_untracked(),
            zipcode: self.zipcode.get_untracked(),
            coordinates: vec![lng, lat],
        })
    }
}

/// 文本输入框 + 标签
#[component]
fn FormInput(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type="text"
                class="input input-bordered w-full"
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                required=required
            />
        </div>
    }
}

#[component]
pub fn FacilitiesPage() -> impl IntoView {
    let router = use_router();
    let notifier = Notifier::new();
    let list: ResourceList<Facility> = ResourceList::new();
    let form = FacilityForm::new();

    let (editing, set_editing) = signal(Option::<Facility>::None);
    let (modal_open, set_modal_open) = signal(false);
    let (saving, set_saving) = signal(false);

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

    let fetch = move |page: u64| {
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let query = PageQuery::new(page, PAGE_SIZE);
            list.load(api.facilities(&query), notifier, router, "facilities")
                .await;
            list.page.set(page);
        });
    };

    Effect::new(move |_| fetch(1));

    let open_create = move |_| {
        set_editing.set(None);
        form.reset();
        set_modal_open.set(true);
    };

    let open_edit = move |facility: Facility| {
        form.fill(&facility);
        set_editing.set(Some(facility));
        set_modal_open.set(true);
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure to delete this facility?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let ok = run_mutation(
                api.delete_facility(&id),
                notifier,
                router,
                "Facility deleted successfully",
                "Failed to delete facility",
            )
            .await;
            if ok {
                fetch(list.page.get_untracked());
            }
        });
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = match form.to_input() {
            Ok(input) => input,
            Err(message) => {
                notifier.error(message);
                return;
            }
        };

        set_saving.set(true);
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let ok = match editing.get_untracked() {
                Some(facility) => {
                    run_mutation(
                        api.update_facility(&facility.id, &input),
                        notifier,
                        router,
                        "Facility updated successfully",
                        "Failed to save facility",
                    )
                    .await
                }
                None => {
                    run_mutation(
                        api.create_facility(&input),
                        notifier,
                        router,
                        "Facility created successfully",
                        "Failed to save facility",
                    )
                    .await
                }
            };
            set_saving.set(false);
            if ok {
                set_modal_open.set(false);
                fetch(list.page.get_untracked());
            }
        });
    };

    view! {
        <div class="card bg-base-100 shadow">
            <Toast notifier=notifier />
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Facilities"</h3>
                    <button class="btn btn-primary btn-sm gap-2" on:click=open_create>
                        <Icon kind=IconKind::Plus class="h-4 w-4" />
                        "Add Facility"
                    </button>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Type"</th>
                                <th>"Address"</th>
                                <th>"Mobile"</th>
                                <th>"Email"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || list.loading.get() && list.is_empty()>
                                <tr>
                                    <td colspan="6" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !list.loading.get() && list.is_empty()>
                                <tr>
                                    <td colspan="6" class="text-center py-8 text-base-content/50">
                                        "No facilities yet."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || list.items.get()
                                key=|facility| facility.id.clone()
                                children=move |facility| {
                                    let id = facility.id.clone();
                                    let edit_target = facility.clone();
                                    view! {
                                        <tr>
                                            <td class="font-medium">{facility.name.clone()}</td>
                                            <td>
                                                <span class="badge badge-outline">
                                                    {facility.kind.clone()}
                                                </span>
                                            </td>
                                            <td class="max-w-xs truncate">{facility.address.clone()}</td>
                                            <td>{facility.mobile.clone()}</td>
                                            <td>{facility.email.clone()}</td>
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

                <Pagination
                    page=list.page
                    total=list.total
                    page_size=PAGE_SIZE
                    on_change=move |page| fetch(page)
                />
            </div>

            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_modal_open.set(false)>
                <div class="modal-box max-w-2xl">
                    <h3 class="font-bold text-lg">
                        {move || {
                            if editing.get().is_some() { "Edit Facility" } else { "Add Facility" }
                        }}
                    </h3>

                    <form on:submit=on_save class="space-y-4 mt-4">
                        <div class="grid grid-cols-2 gap-4">
                            <FormInput label="Name" value=form.name required=true />
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Type"</span>
                                </label>
                                <select
                                    class="select select-bordered w-full"
                                    on:change=move |ev| form.kind.set(event_target_value(&ev))
                                >
                                    {["hospital", "clinic", "pharmacy", "other"]
                                        .into_iter()
                                        .map(|kind| {
                                            view! {
                                                <option
                                                    value=kind
                                                    selected=move || form.kind.get() == kind
                                                >
                                                    {kind}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Description"</span>
                            </label>
                            <textarea
                                class="textarea textarea-bordered w-full"
                                on:input=move |ev| form.description.set(event_target_value(&ev))
                                prop:value=form.description
                            ></textarea>
                        </div>

                        <div class="grid grid-cols-3 gap-4">
                            <FormInput label="Mobile" value=form.mobile />
                            <FormInput label="Email" value=form.email />
                            <FormInput label="Website" value=form.website />
                        </div>

                        <FormInput label="Address" value=form.address required=true />

                        <div class="grid grid-cols-3 gap-4">
                            <FormInput label="State" value=form.state required=true />
                            <FormInput label="Country" value=form.country required=true />
                            <FormInput label="Zipcode" value=form.zipcode />
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <FormInput label="Longitude" value=form.lng required=true />
                            <FormInput label="Latitude" value=form.lat required=true />
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
