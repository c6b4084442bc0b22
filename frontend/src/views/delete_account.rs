//! 用户自助删号页面（公开，不走后台布局）
//!
//! 应用商店合规要求的入口：用户凭邮箱 + 密码二次确认后删除账号。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AdminApi;
use lwsc_admin_shared::DeleteAccountRequest;

#[component]
pub fn DeleteAccountPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success, set_success) = signal(false);
    let (confirming, set_confirming) = signal(false);

    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if confirming.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in both email and password.".to_string()));
            return;
        }
        set_error_msg.set(None);
        set_confirming.set(true);
    };

    let confirm_deletion = move |_| {
        set_loading.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let req = DeleteAccountRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match api.delete_account(&req).await {
                Ok(()) => {
                    set_success.set(true);
                    set_confirming.set(false);
                    set_email.set(String::new());
                    set_password.set(String::new());
                }
                Err(err) => {
                    set_error_msg.set(Some(err.user_message(
                        "Failed to delete account. Please check your credentials.",
                    )));
                    set_confirming.set(false);
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card w-full shadow-xl bg-base-100">
                    <div class="card-body">
                        <h2 class="card-title">"Delete Your Account"</h2>
                        <p class="text-base-content/70 text-sm">
                            "This permanently removes your LWSC account and all tracked data. "
                            "This action cannot be undone."
                        </p>

                        <Show when=move || success.get()>
                            <div role="alert" class="alert alert-success">
                                <span>"Your account has been deleted."</span>
                            </div>
                        </Show>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <Show when=move || !success.get()>
                            <form on:submit=on_submit class="space-y-4">
                                <div class="form-control">
                                    <label class="label" for="da-email">
                                        <span class="label-text">"Email"</span>
                                    </label>
                                    <input
                                        id="da-email"
                                        type="email"
                                        class="input input-bordered w-full"
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                        prop:value=email
                                        required
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label" for="da-password">
                                        <span class="label-text">"Password"</span>
                                    </label>
                                    <input
                                        id="da-password"
                                        type="password"
                                        class="input input-bordered w-full"
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                        prop:value=password
                                        required
                                    />
                                </div>
                                <button type="submit" class="btn btn-error w-full">
                                    "Delete my account"
                                </button>
                            </form>
                        </Show>
                    </div>
                </div>
            </div>

            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_confirming.set(false)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">"Are you absolutely sure?"</h3>
                    <p class="py-4 text-base-content/70">
                        "All your logs, rewards and profile data will be removed permanently."
                    </p>
                    <div class="modal-action">
                        <button class="btn btn-ghost" on:click=move |_| set_confirming.set(false)>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn-error"
                            disabled=move || loading.get()
                            on:click=confirm_deletion
                        >
                            {move || if loading.get() { "Deleting..." } else { "Yes, delete it" }}
                        </button>
                    </div>
                </div>
                <form method="dialog" class="modal-backdrop">
                    <button>"close"</button>
                </form>
            </dialog>
        </div>
    }
}
