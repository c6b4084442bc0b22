//! 行内 SVG 图表
//!
//! 数据到坐标的映射是纯函数，图表本身只是把算好的点喂给
//! `<polyline>` / 宽度百分比。没有画布依赖。

use leptos::prelude::*;
use lwsc_admin_shared::KeyedCount;

/// 趋势图视口尺寸
pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 220.0;

// =========================================================
// 纯数据映射
// =========================================================

/// 合并多条趋势线的日期键，去重后排序，保证 x 轴完整
pub fn merge_keys(series: &[&[KeyedCount]]) -> Vec<String> {
    let mut keys: Vec<String> = series
        .iter()
        .flat_map(|points| points.iter().map(|p| p.key.clone()))
        .collect();
    keys.sort();
    keys.dedup();
    keys
}

/// 把一条趋势线对齐到统一的日期轴上，缺的日期计 0
pub fn counts_for(keys: &[String], points: &[KeyedCount]) -> Vec<u64> {
    keys.iter()
        .map(|key| {
            points
                .iter()
                .find(|p| &p.key == key)
                .map(|p| p.count)
                .unwrap_or(0)
        })
        .collect()
}

/// 所有序列的最大值（至少为 1，避免除零）
pub fn max_of(rows: &[Vec<u64>]) -> u64 {
    rows.iter()
        .flat_map(|row| row.iter().copied())
        .max()
        .unwrap_or(0)
        .max(1)
}

/// 把数值序列映射成 `<polyline>` 的 points 字符串
///
/// x 均匀分布在 [0, width]，y 以 max 归一化（值越大越靠上）。
/// 单点序列落在最左侧。
pub fn polyline_points(values: &[u64], max: u64, width: f64, height: f64) -> String {
    let max = max.max(1) as f64;
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = step * i as f64;
            let y = height - (*v as f64 / max) * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 条形宽度百分比
pub fn percent(value: u64, max: u64) -> f64 {
    (value as f64 / max.max(1) as f64) * 100.0
}

// =========================================================
// 组件
// =========================================================

/// 一条趋势线
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub name: &'static str,
    /// CSS 颜色值
    pub color: &'static str,
    pub values: Vec<u64>,
}

/// 多序列趋势折线图
///
/// 属性是普通数据（非响应式），父组件在数据变化时整体重建。
#[component]
pub fn TrendChart(labels: Vec<String>, series: Vec<TrendSeries>) -> impl IntoView {
    let max = max_of(&series.iter().map(|s| s.values.clone()).collect::<Vec<_>>());
    let first_label = labels.first().cloned().unwrap_or_default();
    let last_label = labels.last().cloned().unwrap_or_default();

    let legend = series
        .iter()
        .map(|s| {
            view! {
                <span class="flex items-center gap-1 text-sm">
                    <span
                        class="inline-block w-3 h-3 rounded-full"
                        style=format!("background-color: {}", s.color)
                    ></span>
                    {s.name}
                </span>
            }
        })
        .collect_view();

    let plot = if labels.is_empty() {
        view! {
            <div class="text-center py-12 text-base-content/50">
                "No activity in this period."
            </div>
        }
        .into_any()
    } else {
        let gridlines = (0..=4)
            .map(|i| {
                let y = CHART_HEIGHT / 4.0 * i as f64;
                view! {
                    <line
                        x1="0"
                        y1=format!("{:.1}", y)
                        x2=format!("{}", CHART_WIDTH)
                        y2=format!("{:.1}", y)
                        stroke="currentColor"
                        stroke-opacity="0.1"
                    />
                }
            })
            .collect_view();
        let polylines = series
            .iter()
            .map(|s| {
                view! {
                    <polyline
                        fill="none"
                        stroke=s.color
                        stroke-width="2"
                        points=polyline_points(&s.values, max, CHART_WIDTH, CHART_HEIGHT)
                    />
                }
            })
            .collect_view();

        view! {
            <svg
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT + 20.0)
                class="w-full"
                preserveAspectRatio="none"
            >
                {gridlines}
                {polylines}
            </svg>
            <div class="flex justify-between text-xs text-base-content/50 mt-1">
                <span>{first_label}</span>
                <span>{last_label}</span>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="w-full">
            {plot}
            <div class="flex flex-wrap gap-4 mt-3">{legend}</div>
        </div>
    }
}

/// 水平条目（排行 / 分布用）
#[component]
pub fn BarRow(
    label: String,
    value: u64,
    max: u64,
    #[prop(into, optional)] color: String,
) -> impl IntoView {
    let color = if color.is_empty() {
        "oklch(var(--p))".to_string()
    } else {
        color
    };
    view! {
        <div class="mb-2">
            <div class="flex justify-between text-sm mb-1">
                <span>{label}</span>
                <span class="text-base-content/60">{value}</span>
            </div>
            <div class="w-full bg-base-200 rounded-full h-2">
                <div
                    class="h-2 rounded-full"
                    style=format!(
                        "width: {:.1}%; background-color: {}",
                        percent(value, max),
                        color
                    )
                ></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(key: &str, count: u64) -> KeyedCount {
        KeyedCount {
            key: key.to_string(),
            count,
        }
    }

    #[test]
    fn merged_keys_are_sorted_and_deduplicated() {
        let pain = vec![point("2024-03-02", 1), point("2024-03-01", 2)];
        let mood = vec![point("2024-03-02", 5), point("2024-03-03", 1)];
        let keys = merge_keys(&[&pain, &mood]);
        assert_eq!(keys, vec!["2024-03-01", "2024-03-02", "2024-03-03"]);
    }

    #[test]
    fn missing_dates_count_as_zero() {
        let keys: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let series = vec![point("a", 3), point("c", 1)];
        assert_eq!(counts_for(&keys, &series), vec![3, 0, 1]);
    }

    #[test]
    fn polyline_spans_the_viewport() {
        let points = polyline_points(&[0, 5, 10], 10, 100.0, 50.0);
        assert_eq!(points, "0.0,50.0 50.0,25.0 100.0,0.0");
    }

    #[test]
    fn single_point_sits_at_the_left_edge() {
        assert_eq!(polyline_points(&[4], 4, 100.0, 50.0), "0.0,0.0");
    }

    #[test]
    fn empty_series_produce_an_empty_path() {
        assert_eq!(polyline_points(&[], 10, 100.0, 50.0), "");
        assert_eq!(max_of(&[]), 1);
    }

    #[test]
    fn percent_is_clamped_by_max_floor() {
        assert_eq!(percent(5, 10), 50.0);
        assert_eq!(percent(0, 0), 0.0);
    }
}
