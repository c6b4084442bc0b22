//! 通用资源列表能力
//!
//! 所有集合界面的共同骨架：取一页 -> 整体替换本地状态 -> 渲染；
//! 写操作成功后弹通知并重新拉取，失败只弹通知。没有乐观更新，
//! 也没有超出"整页重取"的缓存失效策略。

use std::future::Future;

use leptos::prelude::*;

use crate::api::ListPage;
use crate::error::{ApiError, ApiResult};
use crate::web::route::AppRoute;
use crate::web::router::RouterService;

/// 瞬态通知：(文案, 是否错误)
#[derive(Clone, Copy)]
pub struct Notifier {
    message: RwSignal<Option<(String, bool)>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    pub fn get(&self) -> Option<(String, bool)> {
        self.message.get()
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(text.into(), false);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(text.into(), true);
    }

    fn show(&self, text: String, is_error: bool) {
        self.message.set(Some((text, is_error)));
        // 3 秒后自动消失
        let message = self.message;
        set_timeout(
            move || message.set(None),
            std::time::Duration::from_secs(3),
        );
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// 一个集合界面的本地状态
pub struct ResourceList<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub total: RwSignal<u64>,
    pub page: RwSignal<u64>,
    pub loading: RwSignal<bool>,
}

// 手动实现 Clone/Copy：所有字段都是 RwSignal（与 T 无关均为 Copy），
// 派生会错误地引入 `T: Copy` 约束（如 User 并非 Copy），故手写以去掉该约束。
impl<T: Send + Sync + 'static> Clone for ResourceList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ResourceList<T> {}

impl<T: Send + Sync + 'static> ResourceList<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            page: RwSignal::new(1),
            loading: RwSignal::new(false),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.with(|items| items.is_empty())
    }

    /// 读路径：取一页并整体替换
    ///
    /// # Arguments
    /// * `fut` - 门面读方法返回的 future
    /// * `what` - 通知文案里的资源名（"users" 等）
    pub async fn load<F>(self, fut: F, notifier: Notifier, router: RouterService, what: &str)
    where
        F: Future<Output = ApiResult<ListPage<T>>>,
    {
        self.loading.set(true);
        match fut.await {
            Ok(page) => {
                self.items.set(page.items);
                self.total.set(page.total);
            }
            Err(err) => {
                // 失败时集合保持原值
                report_error(err, notifier, router, &format!("Failed to fetch {}", what));
            }
        }
        self.loading.set(false);
    }
}

impl<T: Send + Sync + 'static> Default for ResourceList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 写路径：执行变更，成功弹成功通知并返回 true（调用方随后重取）
pub async fn run_mutation<F>(
    fut: F,
    notifier: Notifier,
    router: RouterService,
    success: &str,
    failure: &str,
) -> bool
where
    F: Future<Output = ApiResult<()>>,
{
    match fut.await {
        Ok(()) => {
            notifier.success(success);
            true
        }
        Err(err) => {
            report_error(err, notifier, router, failure);
            false
        }
    }
}

/// 错误统一处理：未认证 => 回登录页，其余 => 通知
pub fn report_error(err: ApiError, notifier: Notifier, router: RouterService, fallback: &str) {
    match err {
        ApiError::Unauthorized => {
            router.navigate_route(AppRoute::auth_failure_redirect());
        }
        other => notifier.error(other.user_message(fallback)),
    }
}
