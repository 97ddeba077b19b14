use global_magazine_shared::{text, ContentKind, ContentRecord};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        content_card::ContentCard,
        flipbook_viewer::FlipbookViewer,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        raw_html::RawHtml,
        scroll_to_top_button::ScrollToTopButton,
    },
    hooks::use_scroll_to_top,
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct MagazineDetailProps {
    pub id: String,
}

#[function_component(MagazineDetailPage)]
pub fn magazine_detail_page(props: &MagazineDetailProps) -> Html {
    use_scroll_to_top();

    let magazine = use_state(|| None::<ContentRecord>);
    let related_news = use_state(Vec::<ContentRecord>::new);
    let related_articles = use_state(Vec::<ContentRecord>::new);
    let loading = use_state(|| true);

    {
        let magazine = magazine.clone();
        let related_news = related_news.clone();
        let related_articles = related_articles.clone();
        let loading = loading.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                // Three fetches in flight together; each result settles its
                // own state, so a failing sibling cannot blank the others.
                let (issue, news, articles) = futures::join!(
                    crate::api::fetch_magazine(&id),
                    crate::api::fetch_news_for_magazine(&id),
                    crate::api::fetch_articles_for_magazine(&id),
                );

                match issue {
                    Ok(found) => magazine.set(found),
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch magazine: {}", e).into());
                        magazine.set(None);
                    },
                }
                match news {
                    Ok(data) => related_news.set(data),
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch issue news: {}", e).into());
                    },
                }
                match articles {
                    Ok(data) => related_articles.set(data),
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch issue articles: {}", e).into());
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let related = |title: &str, kind: ContentKind, records: &[ContentRecord]| {
        if records.is_empty() {
            return Html::default();
        }
        html! {
            <section class="related-section mt-16">
                <h2 class="section-title mb-6">{ title.to_string() }</h2>
                <div class="content-grid grid gap-6">
                    { for records.iter().map(|record| html! {
                        <ContentCard
                            key={record.id.clone()}
                            record={record.clone()}
                            kind={kind}
                        />
                    }) }
                </div>
            </section>
        }
    };

    let body = if *loading {
        html! {
            <div class={classes!("flex", "items-center", "justify-center", "min-h-[400px]")}>
                <LoadingSpinner size={SpinnerSize::Large} />
            </div>
        }
    } else {
        match magazine.as_ref() {
            Some(issue) => {
                let description = text::sanitize_html(&issue.description);
                html! {
                    <>
                        <header class="detail-header mb-8">
                            <h1 class="detail-title">{ &issue.title }</h1>
                            <div class="post-meta">
                                <span class="post-meta-item">
                                    { text::pretty_date(&issue.date).into_owned() }
                                </span>
                                {
                                    if !issue.category.is_empty() {
                                        html! {
                                            <span class="post-meta-item post-category">
                                                { &issue.category }
                                            </span>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        </header>
                        {
                            match issue.pdf.as_ref() {
                                Some(pdf) => html! {
                                    <FlipbookViewer
                                        pdf_url={pdf.clone()}
                                        title={issue.title.clone()}
                                    />
                                },
                                None => html! {
                                    <p class="section-empty">
                                        { "This issue has no digital edition yet." }
                                    </p>
                                },
                            }
                        }
                        <RawHtml
                            class={classes!("detail-body", "mt-8")}
                            html={AttrValue::from(description)}
                        />
                        { related("From this issue: news", ContentKind::News, &related_news) }
                        { related(
                            "From this issue: articles",
                            ContentKind::Article,
                            &related_articles,
                        ) }
                    </>
                }
            },
            None => html! {
                <div class="empty-state text-center py-20">
                    <p class="text-xl">{ "Magazine not found." }</p>
                </div>
            },
        }
    };

    html! {
        <main class="detail-page pb-20">
            <div class="container">
                <Link<Route> to={Route::Magazines} classes={classes!("back-link")}>
                    { "← All magazines" }
                </Link<Route>>
                { body }
            </div>
            <ScrollToTopButton />
        </main>
    }
}
