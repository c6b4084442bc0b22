//! 活动日志界面
//!
//! 四种日志共用一个泛型屏幕：日期范围过滤、分页、CSV 导出，
//! 只有列定义和取数门面不同。

use std::future::Future;
use std::pin::Pin;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AdminApi, ListPage, LogKind};
use crate::components::icons::{Icon, IconKind};
use crate::components::pagination::Pagination;
use crate::components::toast::Toast;
use crate::error::ApiResult;
use crate::resource::{Notifier, ResourceList};
use crate::web::router::use_router;
use lwsc_admin_shared::{
    date::format_datetime, HydrationLog, LogQuery, LogUser, MedicationLog, MoodLog, PainLog,
};

const PAGE_SIZE: u64 = 50;

/// 某种日志的取数函数
type LogLoader<T> = fn(AdminApi, LogQuery) -> Pin<Box<dyn Future<Output = ApiResult<ListPage<T>>>>>;

/// 把日期输入框的值解析成查询用的日期
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn user_cell(user: &Option<LogUser>) -> String {
    user.as_ref()
        .map(|u| u.display_name())
        .unwrap_or_else(|| "N/A".to_string())
}

/// 泛型日志屏幕
#[component]
fn LogsScreen<T: Clone + Send + Sync + 'static>(
    kind: LogKind,
    headers: Vec<&'static str>,
    loader: LogLoader<T>,
    row: fn(&T) -> AnyView,
    key: fn(&T) -> String,
) -> impl IntoView {
    let router = use_router();
    let notifier = Notifier::new();
    let list: ResourceList<T> = ResourceList::new();

    let (from, set_from) = signal(String::new());
    let (to, set_to) = signal(String::new());

    let query_for = move |page: u64| {
        LogQuery::new(page)
            .with_range(parse_date(&from.get_untracked()), parse_date(&to.get_untracked()))
    };

    let fetch = move |page: u64| {
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let query = query_for(page);
            list.load(loader(api, query), notifier, router, "logs").await;
            list.page.set(page);
        });
    };

    // 初始加载 + 日期范围变化时回到第一页
    Effect::new(move |_| {
        from.track();
        to.track();
        fetch(1);
    });

    let on_export = move |_| {
        let from_date = parse_date(&from.get_untracked());
        let to_date = parse_date(&to.get_untracked());
        if from_date.is_none() || to_date.is_none() {
            notifier.error("Please select a date range for export");
            return;
        }
        let api = AdminApi::from_runtime_config();
        let query = LogQuery::new(1).with_range(from_date, to_date);
        let url = api.export_url(kind, &query);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&url);
        }
    };

    let column_count = headers.len();

    view! {
        <div class="card bg-base-100 shadow">
            <Toast notifier=notifier />
            <div class="card-body">
                <div class="flex items-center justify-between flex-wrap gap-2">
                    <h3 class="card-title">{format!("{} Logs", kind.label())}</h3>
                    <div class="flex items-center gap-2">
                        <input
                            type="date"
                            class="input input-bordered input-sm"
                            on:input=move |ev| set_from.set(event_target_value(&ev))
                            prop:value=from
                        />
                        <span class="text-base-content/50">"–"</span>
                        <input
                            type="date"
                            class="input input-bordered input-sm"
                            on:input=move |ev| set_to.set(event_target_value(&ev))
                            prop:value=to
                        />
                        <button class="btn btn-outline btn-sm gap-2" on:click=on_export>
                            <Icon kind=IconKind::Download class="h-4 w-4" />
                            "Export CSV"
                        </button>
                    </div>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                {headers
                                    .iter()
                                    .map(|header| view! { <th>{*header}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || list.loading.get() && list.is_empty()>
                                <tr>
                                    <td
                                        colspan=column_count.to_string()
                                        class="text-center py-8 text-base-content/50"
                                    >
                                        <span class="loading loading-spinner loading-md"></span>
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !list.loading.get() && list.is_empty()>
                                <tr>
                                    <td
                                        colspan=column_count.to_string()
                                        class="text-center py-8 text-base-content/50"
                                    >
                                        "No logs in this range."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || list.items.get()
                                key=move |log| key(log)
                                children=move |log| row(&log)
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

// =========================================================
// 各日志种类的列定义
// =========================================================

fn intensity_badge(level: u8) -> &'static str {
    if level > 7 {
        "badge badge-error"
    } else if level > 3 {
        "badge badge-warning"
    } else {
        "badge badge-success"
    }
}

fn pain_row(log: &PainLog) -> AnyView {
    view! {
        <tr>
            <td>{format_datetime(&log.date)}</td>
            <td>{user_cell(&log.user)}</td>
            <td>
                <span class=intensity_badge(log.intensity)>
                    {format!("{}/10", log.intensity)}
                </span>
            </td>
            <td>{log.location.clone().unwrap_or_else(|| "N/A".to_string())}</td>
            <td class="max-w-xs truncate">{log.notes.clone().unwrap_or_default()}</td>
        </tr>
    }
    .into_any()
}

fn mood_row(log: &MoodLog) -> AnyView {
    view! {
        <tr>
            <td>{format_datetime(&log.date)}</td>
            <td>{user_cell(&log.user)}</td>
            <td>
                <span class="badge badge-info badge-outline">{log.mood.clone()}</span>
            </td>
            <td class="max-w-xs truncate">{log.notes.clone().unwrap_or_default()}</td>
        </tr>
    }
    .into_any()
}

fn hydration_row(log: &HydrationLog) -> AnyView {
    let amount = format!(
        "{} {}",
        log.amount,
        log.unit.clone().unwrap_or_else(|| "ml".to_string())
    );
    view! {
        <tr>
            <td>{format_datetime(&log.date)}</td>
            <td>{user_cell(&log.user)}</td>
            <td>{amount}</td>
        </tr>
    }
    .into_any()
}

fn medication_row(log: &MedicationLog) -> AnyView {
    view! {
        <tr>
            <td>{format_datetime(&log.date)}</td>
            <td>{user_cell(&log.user)}</td>
            <td class="font-medium">{log.name.clone()}</td>
            <td>{log.dose.clone().unwrap_or_else(|| "N/A".to_string())}</td>
            <td>
                {match log.taken {
                    Some(true) => view! { <span class="badge badge-success">"Taken"</span> }.into_any(),
                    Some(false) => view! { <span class="badge badge-ghost">"Skipped"</span> }.into_any(),
                    None => "—".into_any(),
                }}
            </td>
        </tr>
    }
    .into_any()
}

// =========================================================
// 页面组件
// =========================================================

fn load_pain(api: AdminApi, query: LogQuery) -> Pin<Box<dyn Future<Output = ApiResult<ListPage<PainLog>>>>> {
    Box::pin(async move { api.pain_logs(&query).await })
}

fn load_mood(api: AdminApi, query: LogQuery) -> Pin<Box<dyn Future<Output = ApiResult<ListPage<MoodLog>>>>> {
    Box::pin(async move { api.mood_logs(&query).await })
}

fn load_hydration(
    api: AdminApi,
    query: LogQuery,
) -> Pin<Box<dyn Future<Output = ApiResult<ListPage<HydrationLog>>>>> {
    Box::pin(async move { api.hydration_logs(&query).await })
}

fn load_medication(
    api: AdminApi,
    query: LogQuery,
) -> Pin<Box<dyn Future<Output = ApiResult<ListPage<MedicationLog>>>>> {
    Box::pin(async move { api.medication_logs(&query).await })
}

#[component]
pub fn PainLogsPage() -> impl IntoView {
    view! {
        <LogsScreen
            kind=LogKind::Pain
            headers=vec!["Date", "User", "Level", "Locations", "Notes"]
            loader=load_pain
            row=pain_row
            key=|log: &PainLog| log.id.clone()
        />
    }
}

#[component]
pub fn MoodLogsPage() -> impl IntoView {
    view! {
        <LogsScreen
            kind=LogKind::Mood
            headers=vec!["Date", "User", "Mood", "Notes"]
            loader=load_mood
            row=mood_row
            key=|log: &MoodLog| log.id.clone()
        />
    }
}

#[component]
pub fn HydrationLogsPage() -> impl IntoView {
    view! {
        <LogsScreen
            kind=LogKind::Hydration
            headers=vec!["Date", "User", "Amount"]
            loader=load_hydration
            row=hydration_row
            key=|log: &HydrationLog| log.id.clone()
        />
    }
}

#[component]
pub fn MedicationLogsPage() -> impl IntoView {
    view! {
        <LogsScreen
            kind=LogKind::Medication
            headers=vec!["Date", "User", "Medication", "Dose", "Status"]
            loader=load_medication
            row=medication_row
            key=|log: &MedicationLog| log.id.clone()
        />
    }
}
