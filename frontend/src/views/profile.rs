use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AdminApi;
use crate::components::toast::Toast;
use crate::resource::{report_error, Notifier};
use crate::store::use_store;
use crate::web::router::use_router;
use lwsc_admin_shared::UpdateProfileRequest;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_store();
    let router = use_router();
    let notifier = Notifier::new();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal(Option::<String>::None);

    // 档案到位后填充表单
    Effect::new(move |_| {
        if let Some(profile) = store.profile.get() {
            set_name.set(profile.name.clone());
            set_email.set(profile.email.clone());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // 密码校验在本地完成，不发请求
        if !password.get().is_empty() && password.get() != confirm.get() {
            set_form_error.set(Some("Passwords do not match".to_string()));
            return;
        }
        set_form_error.set(None);

        let req = UpdateProfileRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: {
                let p = password.get_untracked();
                if p.is_empty() { None } else { Some(p) }
            },
        };

        set_saving.set(true);
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            match api.update_profile(&req).await {
                Ok(updated) => {
                    store.set_profile(Some(updated));
                    notifier.success("Profile updated successfully");
                    set_password.set(String::new());
                    set_confirm.set(String::new());
                }
                Err(err) => report_error(err, notifier, router, "Failed to update profile"),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="max-w-2xl">
            <Toast notifier=notifier />
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">"Profile"</h3>
                    <p class="text-sm text-base-content/60">
                        "Manage your account information and password."
                    </p>

                    <Show when=move || form_error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || form_error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <form on:submit=on_submit class="space-y-4 mt-2">
                        <div class="form-control">
                            <label class="label" for="profile-name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="profile-name"
                                type="text"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="profile-email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="profile-email"
                                type="email"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                required
                            />
                        </div>

                        <div class="divider text-sm text-base-content/50">
                            "Change password (optional)"
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="profile-password">
                                    <span class="label-text">"New Password"</span>
                                </label>
                                <input
                                    id="profile-password"
                                    type="password"
                                    placeholder="Enter new password"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="profile-confirm">
                                    <span class="label-text">"Confirm Password"</span>
                                </label>
                                <input
                                    id="profile-confirm"
                                    type="password"
                                    placeholder="Confirm new password"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                    prop:value=confirm
                                />
                            </div>
                        </div>

                        <div class="pt-2">
                            <button class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </form>

                    <div class="text-sm text-base-content/50 mt-4">
                        {move || {
                            store
                                .profile
                                .get()
                                .map(|p| format!("Signed in as {} ({})", p.email, p.role))
                                .unwrap_or_default()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
