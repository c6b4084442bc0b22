use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AdminApi;
use crate::components::chart::{counts_for, merge_keys, BarRow, TrendChart, TrendSeries};
use crate::components::icons::{Icon, IconKind};
use crate::components::toast::Toast;
use crate::resource::{report_error, Notifier};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use lwsc_admin_shared::DashboardStats;

/// 统计卡片
#[component]
fn StatTile(
    title: &'static str,
    #[prop(into)] value: Signal<u64>,
    icon: IconKind,
    color: &'static str,
    target: AppRoute,
) -> impl IntoView {
    let router = use_router();
    view! {
        <div
            class="stat bg-base-100 rounded-box shadow cursor-pointer"
            on:click=move |_| router.navigate_route(target)
        >
            <div class=format!("stat-figure {}", color)>
                <Icon kind=icon class="h-8 w-8" />
            </div>
            <div class="stat-title">{title}</div>
            <div class=format!("stat-value text-2xl {}", color)>{move || value.get()}</div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let router = use_router();
    let notifier = Notifier::new();

    let (stats, set_stats) = signal(Option::<DashboardStats>::None);
    let (time_range, set_time_range) = signal(7u32);
    let (loading, set_loading) = signal(true);

    // 初始加载 + 时间范围变化时重取
    Effect::new(move |_| {
        let days = time_range.get();
        set_loading.set(true);
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            match api.dashboard_stats(days).await {
                Ok(data) => set_stats.set(Some(data)),
                Err(err) => {
                    report_error(err, notifier, router, "Failed to fetch dashboard stats")
                }
            }
            set_loading.set(false);
        });
    });

    let stat = move |f: fn(&DashboardStats) -> u64| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(f).unwrap_or(0)))
    };

    let total_users = stat(|s| s.users.total);
    let total_children = stat(|s| s.users.total_children);
    let growth = stat(|s| s.users.new_last30_days);
    let total_pain = stat(|s| s.logs.total.pain);
    let total_medication = stat(|s| s.logs.total.medication);

    view! {
        <div class="space-y-6">
            <Toast notifier=notifier />

            <Show when=move || loading.get() && stats.get().is_none()>
                <div class="text-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                    <p class="mt-2 text-base-content/60">"Loading dashboard..."</p>
                </div>
            </Show>

            <Show when=move || stats.get().is_some()>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-4">
                    <StatTile
                        title="Total Parents"
                        value=total_users
                        icon=IconKind::User
                        color="text-primary"
                        target=AppRoute::Users
                    />
                    <StatTile
                        title="Total Children"
                        value=total_children
                        icon=IconKind::User
                        color="text-info"
                        target=AppRoute::Users
                    />
                    <StatTile
                        title="Growth (30 Days)"
                        value=growth
                        icon=IconKind::Star
                        color="text-success"
                        target=AppRoute::Users
                    />
                    <StatTile
                        title="Total Pain Logs"
                        value=total_pain
                        icon=IconKind::MapPin
                        color="text-error"
                        target=AppRoute::PainLogs
                    />
                    <StatTile
                        title="Total Medication Logs"
                        value=total_medication
                        icon=IconKind::List
                        color="text-warning"
                        target=AppRoute::MedicationLogs
                    />
                </div>

                // 活动趋势折线图
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <div class="flex items-center justify-between flex-wrap gap-2">
                            <div>
                                <h3 class="card-title">"Activity Trends"</h3>
                                <p class="text-sm text-base-content/60">
                                    {move || format!("Last {} Days", time_range.get())}
                                </p>
                            </div>
                            <div class="join">
                                {[7u32, 30, 90]
                                    .into_iter()
                                    .map(|days| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if time_range.get() == days {
                                                        "join-item btn btn-sm btn-active"
                                                    } else {
                                                        "join-item btn btn-sm"
                                                    }
                                                }
                                                on:click=move |_| set_time_range.set(days)
                                            >
                                                {format!("{} Days", days)}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        {move || {
                            stats
                                .with(|s| {
                                    s.as_ref()
                                        .map(|s| {
                                            let trends = &s.logs.trends;
                                            let labels = merge_keys(&[
                                                &trends.pain,
                                                &trends.mood,
                                                &trends.hydration,
                                                &trends.medication,
                                            ]);
                                            let series = vec![
                                                TrendSeries {
                                                    name: "Pain Logs",
                                                    color: "rgba(220, 53, 69, 1)",
                                                    values: counts_for(&labels, &trends.pain),
                                                },
                                                TrendSeries {
                                                    name: "Mood Logs",
                                                    color: "rgba(255, 193, 7, 1)",
                                                    values: counts_for(&labels, &trends.mood),
                                                },
                                                TrendSeries {
                                                    name: "Hydration",
                                                    color: "rgba(13, 202, 240, 1)",
                                                    values: counts_for(&labels, &trends.hydration),
                                                },
                                                TrendSeries {
                                                    name: "Medication",
                                                    color: "rgba(102, 16, 242, 1)",
                                                    values: counts_for(&labels, &trends.medication),
                                                },
                                            ];
                                            view! { <TrendChart labels=labels series=series /> }
                                        })
                                })
                        }}
                    </div>
                </div>

                // 洞察区块
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h3 class="card-title">"Pain Hotspots"</h3>
                            {move || {
                                stats
                                    .with(|s| {
                                        s.as_ref()
                                            .map(|s| {
                                                let spots = &s.insights.top_pain_locations;
                                                let max = spots
                                                    .iter()
                                                    .map(|p| p.count)
                                                    .max()
                                                    .unwrap_or(1);
                                                if spots.is_empty() {
                                                    view! {
                                                        <p class="text-base-content/50 py-6 text-center">
                                                            "No pain reports in this period."
                                                        </p>
                                                    }
                                                        .into_any()
                                                } else {
                                                    spots
                                                        .iter()
                                                        .map(|spot| {
                                                            view! {
                                                                <BarRow
                                                                    label=spot.name.clone()
                                                                    value=spot.count
                                                                    max=max
                                                                    color="#f87979"
                                                                />
                                                            }
                                                        })
                                                        .collect_view()
                                                        .into_any()
                                                }
                                            })
                                    })
                            }}
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h3 class="card-title">"Mood Distribution"</h3>
                            {move || {
                                stats
                                    .with(|s| {
                                        s.as_ref()
                                            .map(|s| {
                                                let moods = &s.insights.mood_distribution;
                                                let max = moods
                                                    .iter()
                                                    .map(|m| m.count)
                                                    .max()
                                                    .unwrap_or(1);
                                                let palette =
                                                    ["#2eb85c", "#f9b115", "#e55353", "#321fdb"];
                                                if moods.is_empty() {
                                                    view! {
                                                        <p class="text-base-content/50 py-6 text-center">
                                                            "No mood logs in this period."
                                                        </p>
                                                    }
                                                        .into_any()
                                                } else {
                                                    moods
                                                        .iter()
                                                        .enumerate()
                                                        .map(|(i, mood)| {
                                                            view! {
                                                                <BarRow
                                                                    label=mood.key.clone()
                                                                    value=mood.count
                                                                    max=max
                                                                    color=palette[i % palette.len()]
                                                                />
                                                            }
                                                        })
                                                        .collect_view()
                                                        .into_any()
                                                }
                                            })
                                    })
                            }}
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
