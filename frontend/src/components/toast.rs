//! 瞬态通知的展示组件

use leptos::prelude::*;

use crate::resource::Notifier;

#[component]
pub fn Toast(notifier: Notifier) -> impl IntoView {
    view! {
        <Show when=move || notifier.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_err = notifier.get().map(|(_, e)| e).unwrap_or(false);
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notifier.get().map(|(text, _)| text).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
