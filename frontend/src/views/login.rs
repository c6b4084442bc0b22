use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AdminApi;
use crate::components::icons::{Icon, IconKind};
use crate::error::ApiError;
use crate::resource::Notifier;
use crate::session::{self, store_login, LocalSessionStore, TokenState};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use lwsc_admin_shared::{ForgotPasswordRequest, LoginRequest};

/// 登录页的两种视图模式
#[derive(Clone, Copy, PartialEq)]
enum LoginView {
    Login,
    Forgot,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let router = use_router();
    let notifier = Notifier::new();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (view_mode, set_view_mode) = signal(LoginView::Login);
    let (loading, set_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 已持有效令牌的访问者直接进入面板
    Effect::new(move |_| {
        if session::token_state(&LocalSessionStore, session::now_secs()) == TokenState::Valid {
            router.navigate_route(AppRoute::Dashboard);
        }
    });

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill all fields".to_string()));
            return;
        }

        set_loading.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let req = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match api.login(&req).await {
                Ok(tokens) => {
                    store_login(api.session(), &tokens);
                    notifier.success("Login successful!");
                    set_timeout(
                        move || router.navigate_route(AppRoute::Dashboard),
                        std::time::Duration::from_millis(1200),
                    );
                }
                Err(ApiError::Unauthorized) => {
                    set_error_msg.set(Some("Invalid email or password".to_string()));
                }
                Err(err) => {
                    set_error_msg.set(Some(err.user_message("Login failed")));
                }
            }
            set_loading.set(false);
        });
    };

    let on_forgot = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() {
            set_error_msg.set(Some("Please enter your email".to_string()));
            return;
        }

        set_loading.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let req = ForgotPasswordRequest {
                email: email.get_untracked(),
            };
            match api.forgot_password(&req).await {
                Ok(()) => {
                    notifier.success("Reset link sent to your email");
                    set_view_mode.set(LoginView::Login);
                }
                Err(err) => {
                    set_error_msg.set(Some(err.user_message("Could not send reset link")));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <crate::components::toast::Toast notifier=notifier />
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Icon kind=IconKind::Lock class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"LWSC Admin"</h1>
                        <p class="text-base-content/70">"Sign in to your account"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2 m-4 mb-0">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <Show
                        when=move || view_mode.get() == LoginView::Login
                        fallback=move || {
                            view! {
                                <form class="card-body" on:submit=on_forgot>
                                    <h2 class="text-xl font-bold">"Forgot Password"</h2>
                                    <p class="text-base-content/70 text-sm">
                                        "Enter your email to receive a reset link."
                                    </p>
                                    <div class="form-control">
                                        <label class="label" for="forgot-email">
                                            <span class="label-text">"Email"</span>
                                        </label>
                                        <input
                                            id="forgot-email"
                                            type="email"
                                            placeholder="admin@example.com"
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                            prop:value=email
                                            class="input input-bordered"
                                            required
                                        />
                                    </div>
                                    <div class="form-control mt-4">
                                        <button class="btn btn-primary" disabled=move || loading.get()>
                                            {move || if loading.get() { "Sending..." } else { "Send Reset Link" }}
                                        </button>
                                    </div>
                                    <div class="text-center mt-2">
                                        <button
                                            type="button"
                                            class="btn btn-link btn-sm"
                                            on:click=move |_| set_view_mode.set(LoginView::Login)
                                        >
                                            "Back to login"
                                        </button>
                                    </div>
                                </form>
                            }
                        }
                    >
                        <form class="card-body" on:submit=on_login>
                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="text"
                                    placeholder="admin@example.com"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="flex items-center justify-between mt-6">
                                <button class="btn btn-primary px-6" disabled=move || loading.get()>
                                    {move || if loading.get() {
                                        view! { <span class="loading loading-spinner"></span> " Logging in..." }.into_any()
                                    } else {
                                        "Login".into_any()
                                    }}
                                </button>
                                <button
                                    type="button"
                                    class="btn btn-link btn-sm px-0"
                                    on:click=move |_| set_view_mode.set(LoginView::Forgot)
                                >
                                    "Forgot password?"
                                </button>
                            </div>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
    }
}
