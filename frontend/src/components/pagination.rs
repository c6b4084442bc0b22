//! 分页控件
//!
//! 上一页 / 页码指示 / 下一页。总页数由总条数与页大小推出。

use leptos::prelude::*;

/// 总页数（至少 1 页）
pub fn page_count(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 1;
    }
    ((total + page_size - 1) / page_size).max(1)
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u64>,
    #[prop(into)] total: Signal<u64>,
    page_size: u64,
    #[prop(into)] on_change: Callback<u64>,
) -> impl IntoView {
    let pages = move || page_count(total.get(), page_size);

    view! {
        <div class="flex justify-end mt-4">
            <div class="join">
                <button
                    class="join-item btn btn-sm"
                    disabled=move || page.get() <= 1
                    on:click=move |_| on_change.run(page.get() - 1)
                >
                    "«"
                </button>
                <button class="join-item btn btn-sm btn-ghost no-animation">
                    {move || format!("Page {} / {}", page.get(), pages())}
                </button>
                <button
                    class="join-item btn btn-sm"
                    disabled=move || page.get() >= pages()
                    on:click=move |_| on_change.run(page.get() + 1)
                >
                    "»"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(95, 10), 10);
        assert_eq!(page_count(5, 0), 1);
    }
}
