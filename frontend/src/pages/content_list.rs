use global_magazine_shared::{filter, ContentKind, ContentRecord};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    components::{
        category_filter::CategoryFilter,
        content_card::ContentCard,
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::Pagination,
        scroll_to_top_button::ScrollToTopButton,
    },
    config,
    hooks::{use_pagination, use_scroll_to_top},
};

#[derive(Properties, PartialEq)]
pub struct ContentListProps {
    pub kind: ContentKind,
}

fn per_page(kind: ContentKind) -> usize {
    match kind {
        ContentKind::Magazine => config::MAGAZINES_PER_PAGE,
        _ => config::LIST_PER_PAGE,
    }
}

/// Listing page shared by every content type: fetch once, then filter,
/// search and paginate entirely client-side.
#[function_component(ContentListPage)]
pub fn content_list_page(props: &ContentListProps) -> Html {
    use_scroll_to_top();

    let kind = props.kind;
    let records = use_state(Vec::<ContentRecord>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let selected_category = use_state(|| filter::CATEGORY_ALL.to_string());
    let query = use_state(String::new);

    {
        let records = records.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(kind, move |kind| {
            let kind = *kind;
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_collection(kind).await {
                    Ok(data) => records.set(data),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch {}: {}", kind.plural(), e).into(),
                        );
                        records.set(Vec::new());
                        error.set(Some(e));
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let filtered = {
        let records = (*records).clone();
        let selected = (*selected_category).clone();
        let search = (*query).clone();
        use_memo((records, selected, search), |(records, selected, search)| {
            filter::filter_records(records, selected, search)
        })
    };

    let (visible, current_page, total_pages, go_to_page) =
        use_pagination((*filtered).clone(), per_page(kind));

    // Both filter inputs reset the pager to page 1.
    let on_category = {
        let selected_category = selected_category.clone();
        let go_to_page = go_to_page.clone();
        Callback::from(move |category: String| {
            selected_category.set(category);
            go_to_page.emit(1);
        })
    };

    let on_search = {
        let query = query.clone();
        let go_to_page = go_to_page.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(target.value());
                go_to_page.emit(1);
            }
        })
    };

    let body = if *loading {
        html! {
            <div class={classes!("flex", "items-center", "justify-center", "min-h-[400px]")}>
                <LoadingSpinner size={SpinnerSize::Large} />
            </div>
        }
    } else if visible.is_empty() {
        html! {
            <div class="empty-state text-center py-20">
                <i class={classes!("fas", "fa-inbox", "text-6xl", "mb-6")}></i>
                <p class="text-xl">{ "No results. Try a different category or search." }</p>
            </div>
        }
    } else {
        html! {
            <>
                <div class="content-grid grid gap-6 mb-12">
                    { for visible.iter().map(|record| html! {
                        <ContentCard
                            key={record.id.clone()}
                            record={record.clone()}
                            kind={kind}
                        />
                    }) }
                </div>
                {
                    if total_pages > 1 {
                        html! {
                            <div class={classes!("mt-10", "flex", "justify-center")}>
                                <Pagination
                                    current_page={current_page}
                                    total_pages={total_pages}
                                    on_page_change={go_to_page.clone()}
                                />
                            </div>
                        }
                    } else {
                        Html::default()
                    }
                }
            </>
        }
    };

    html! {
        <main class="listing-page pb-20">
            <div class="container">
                <div class="text-center py-12">
                    <h1 class="page-title">{ kind.plural() }</h1>
                </div>
                {
                    if let Some(message) = (*error).clone() {
                        let error = error.clone();
                        html! {
                            <ErrorBanner
                                message={message}
                                on_close={Callback::from(move |_| error.set(None))}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="listing-controls flex flex-wrap items-center justify-between gap-4 mb-8">
                    <CategoryFilter
                        selected={(*selected_category).clone()}
                        on_select={on_category}
                    />
                    <input
                        class="search-input"
                        type="search"
                        placeholder={format!("Search {}...", kind.plural().to_lowercase())}
                        value={(*query).clone()}
                        oninput={on_search}
                        aria-label={format!("Search {}", kind.plural())}
                    />
                </div>
                { body }
            </div>
            <ScrollToTopButton />
        </main>
    }
}
