use global_magazine_shared::{text, ContentKind, ContentRecord};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        raw_html::RawHtml,
        reading_progress::ReadingProgressBar,
        scroll_to_top_button::ScrollToTopButton,
    },
    config,
    hooks::use_scroll_to_top,
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct ContentDetailProps {
    pub kind: ContentKind,
    pub id: String,
}

/// Detail view for news, articles and stories. The backend has no per-id
/// endpoint for these types, so the record is located in the fetched
/// collection client-side.
#[function_component(ContentDetailPage)]
pub fn content_detail_page(props: &ContentDetailProps) -> Html {
    use_scroll_to_top();

    let kind = props.kind;
    let record = use_state(|| None::<ContentRecord>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let record = record.clone();
        let loading = loading.clone();
        let error = error.clone();
        let id = props.id.clone();
        use_effect_with((kind, id), move |(kind, id)| {
            let kind = *kind;
            let id = id.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_collection(kind).await {
                    Ok(data) => {
                        record.set(data.into_iter().find(|item| item.id == id));
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch {}: {}", kind.label(), e).into(),
                        );
                        record.set(None);
                        error.set(Some(e));
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let body = if *loading {
        html! {
            <div class={classes!("flex", "items-center", "justify-center", "min-h-[400px]")}>
                <LoadingSpinner size={SpinnerSize::Large} />
            </div>
        }
    } else {
        match record.as_ref() {
            Some(record) => {
                let image = record
                    .image
                    .clone()
                    .unwrap_or_else(|| config::asset_path(config::PLACEHOLDER_IMAGE));
                let description = text::sanitize_html(&record.description);

                html! {
                    <article class="detail-article">
                        <header class="detail-header mb-8">
                            <h1 class="detail-title">{ &record.title }</h1>
                            <div class="post-meta">
                                {
                                    if !record.author.is_empty() {
                                        html! {
                                            <span class="post-meta-item">{ &record.author }</span>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                <span class="post-meta-item">
                                    { text::pretty_date(&record.date).into_owned() }
                                </span>
                                {
                                    if !record.category.is_empty() {
                                        html! {
                                            <span class="post-meta-item post-category">
                                                { &record.category }
                                            </span>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        </header>
                        <img
                            class="detail-image"
                            src={image}
                            alt={record.title.clone()}
                        />
                        <RawHtml
                            class={classes!("detail-body")}
                            html={AttrValue::from(description)}
                        />
                    </article>
                }
            },
            None => html! {
                <div class="empty-state text-center py-20">
                    <p class="text-xl">{ format!("{} not found.", kind.label()) }</p>
                </div>
            },
        }
    };

    html! {
        <main class="detail-page pb-20">
            <ReadingProgressBar />
            <div class="container">
                <Link<Route> to={Route::listing(kind)} classes={classes!("back-link")}>
                    { format!("← All {}", kind.plural().to_lowercase()) }
                </Link<Route>>
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
                { body }
            </div>
            <ScrollToTopButton />
        </main>
    }
}
