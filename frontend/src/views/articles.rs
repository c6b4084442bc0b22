use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AdminApi;
use crate::components::icons::{Icon, IconKind};
use crate::components::pagination::Pagination;
use crate::components::toast::Toast;
use crate::config;
use crate::resource::{run_mutation, Notifier, ResourceList};
use crate::web::router::use_router;
use lwsc_admin_shared::{date::format_date, Article, ArticleInput, PageQuery};

const PAGE_SIZE: u64 = 10;

/// 文章表单状态
#[derive(Clone, Copy)]
struct ArticleForm {
    title: RwSignal<String>,
    description: RwSignal<String>,
    source: RwSignal<String>,
    url: RwSignal<String>,
    image_url: RwSignal<String>,
    published_at: RwSignal<String>,
}

impl ArticleForm {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            source: RwSignal::new(String::new()),
            url: RwSignal::new(String::new()),
            image_url: RwSignal::new(String::new()),
            published_at: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, article: &Article) {
        self.title.set(article.title.clone());
        self.description.set(article.description.clone());
        self.source.set(article.source.clone());
        self.url.set(article.url.clone());
        self.image_url.set(article.image_url.clone().unwrap_or_default());
        self.published_at.set(article.published_at.clone());
    }

    fn reset(&self) {
        self.fill(&Article::default());
    }

    fn to_input(&self) -> Result<ArticleInput, String> {
        let title = self.title.get_untracked();
        if title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        let image_url = self.image_url.get_untracked();
        Ok(ArticleInput {
            title,
            description: self.description.get_untracked(),
            source: self.source.get_untracked(),
            url: self.url.get_untracked(),
            image_url: if image_url.trim().is_empty() {
                None
            } else {
                Some(image_url)
            },
            published_at: self.published_at.get_untracked(),
        })
    }
}

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let router = use_router();
    let notifier = Notifier::new();
    let list: ResourceList<Article> = ResourceList::new();
    let form = ArticleForm::new();

    let (editing, set_editing) = signal(Option::<Article>::None);
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
            list.load(api.articles(&query), notifier, router, "articles").await;
            list.page.set(page);
        });
    };

    Effect::new(move |_| fetch(1));

    let open_create = move |_| {
        set_editing.set(None);
        form.reset();
        set_modal_open.set(true);
    };

    let open_edit = move |article: Article| {
        form.fill(&article);
        set_editing.set(Some(article));
        set_modal_open.set(true);
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure to delete this article?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let api = AdminApi::from_runtime_config();
            let ok = run_mutation(
                api.delete_article(&id),
                notifier,
                router,
                "Article deleted successfully",
                "Failed to delete article",
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
                Some(article) => {
                    run_mutation(
                        api.update_article(&article.id, &input),
                        notifier,
                        router,
                        "Article updated successfully",
                        "Failed to save article",
                    )
                    .await
                }
                None => {
                    run_mutation(
                        api.create_article(&input),
                        notifier,
                        router,
                        "Article created successfully",
                        "Failed to save article",
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
                    <h3 class="card-title">"Articles"</h3>
                    <button class="btn btn-primary btn-sm gap-2" on:click=open_create>
                        <Icon kind=IconKind::Plus class="h-4 w-4" />
                        "Add Article"
                    </button>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Image"</th>
                                <th>"Title"</th>
                                <th>"Source"</th>
                                <th>"Published"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || list.loading.get() && list.is_empty()>
                                <tr>
                                    <td colspan="5" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !list.loading.get() && list.is_empty()>
                                <tr>
                                    <td colspan="5" class="text-center py-8 text-base-content/50">
                                        "No articles yet."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || list.items.get()
                                key=|article| article.id.clone()
                                children=move |article| {
                                    let id = article.id.clone();
                                    let edit_target = article.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                {match &article.image_url {
                                                    Some(image) => view! {
                                                        <img
                                                            src=config::resolve_image(image)
                                                            alt="article"
                                                            class="w-12 h-12 object-cover rounded"
                                                        />
                                                    }
                                                        .into_any(),
                                                    None => "—".into_any(),
                                                }}
                                            </td>
                                            <td class="max-w-sm truncate font-medium">
                                                {article.title.clone()}
                                            </td>
                                            <td>{article.source.clone()}</td>
                                            <td>{format_date(&article.published_at)}</td>
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
                <div class="modal-box max-w-xl">
                    <h3 class="font-bold text-lg">
                        {move || {
                            if editing.get().is_some() { "Edit Article" } else { "Add Article" }
                        }}
                    </h3>

                    <form on:submit=on_save class="space-y-4 mt-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Title"</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                on:input=move |ev| form.title.set(event_target_value(&ev))
                                prop:value=form.title
                                required
                            />
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

                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Source"</span>
                                </label>
                                <input
                                    type="text"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| form.source.set(event_target_value(&ev))
                                    prop:value=form.source
                                />
                            </div>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Published At"</span>
                                </label>
                                <input
                                    type="date"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| form.published_at.set(event_target_value(&ev))
                                    prop:value=form.published_at
                                />
                            </div>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Article URL"</span>
                            </label>
                            <input
                                type="url"
                                class="input input-bordered w-full"
                                on:input=move |ev| form.url.set(event_target_value(&ev))
                                prop:value=form.url
                            />
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Image URL"</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                on:input=move |ev| form.image_url.set(event_target_value(&ev))
                                prop:value=form.image_url
                            />
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
