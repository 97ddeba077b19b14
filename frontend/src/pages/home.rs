use global_magazine_shared::{Banner, ContentKind, ContentRecord};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        content_card::ContentCard,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        scroll_to_top_button::ScrollToTopButton,
    },
    hooks::use_scroll_to_top,
    router::Route,
};

/// Section state: `None` while the fetch is in flight.
type Section = UseStateHandle<Option<Vec<ContentRecord>>>;

fn load_section(
    section: Section,
    error: UseStateHandle<Option<String>>,
    kind: ContentKind,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match crate::api::fetch_collection(kind).await {
            Ok(data) => section.set(Some(data)),
            Err(e) => {
                console::error_1(&format!("Failed to fetch {}: {}", kind.plural(), e).into());
                error.set(Some(e));
                section.set(Some(Vec::new()));
            },
        }
    });
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();

    let banners = use_state(|| None::<Vec<Banner>>);
    let magazines = use_state(|| None::<Vec<ContentRecord>>);
    let news = use_state(|| None::<Vec<ContentRecord>>);
    let articles = use_state(|| None::<Vec<ContentRecord>>);
    let stories = use_state(|| None::<Vec<ContentRecord>>);

    let magazines_error = use_state(|| None::<String>);
    let news_error = use_state(|| None::<String>);
    let articles_error = use_state(|| None::<String>);
    let stories_error = use_state(|| None::<String>);

    // Five concurrent fetches, each settling its own section. A failing
    // endpoint empties only its section; siblings render regardless.
    {
        let banners = banners.clone();
        let magazines = magazines.clone();
        let news = news.clone();
        let articles = articles.clone();
        let stories = stories.clone();
        let magazines_error = magazines_error.clone();
        let news_error = news_error.clone();
        let articles_error = articles_error.clone();
        let stories_error = stories_error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_banners().await {
                    Ok(data) => banners.set(Some(data)),
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch banner: {}", e).into());
                        banners.set(Some(Vec::new()));
                    },
                }
            });
            load_section(magazines, magazines_error, ContentKind::Magazine);
            load_section(news, news_error, ContentKind::News);
            load_section(articles, articles_error, ContentKind::Article);
            load_section(stories, stories_error, ContentKind::Story);
            || ()
        });
    }

    let hero = match banners.as_ref() {
        Some(list) => match list.first() {
            Some(banner) => {
                let body = html! {
                    <>
                        {
                            if let Some(image) = banner.image.as_ref() {
                                html! { <img src={image.clone()} alt={banner.title.clone()} /> }
                            } else {
                                html! {}
                            }
                        }
                        <h2 class="banner-title">{ &banner.title }</h2>
                    </>
                };
                match banner.link.as_ref() {
                    Some(link) => html! {
                        <a class="home-banner" href={link.clone()}>{ body }</a>
                    },
                    None => html! { <div class="home-banner">{ body }</div> },
                }
            },
            None => html! {},
        },
        None => html! {},
    };

    let section = |title: &str,
                   kind: ContentKind,
                   data: &Section,
                   error: &UseStateHandle<Option<String>>,
                   take: usize| {
        let body = match data.as_ref() {
            None => html! { <LoadingSpinner size={SpinnerSize::Medium} /> },
            Some(records) if records.is_empty() => match error.as_ref() {
                Some(message) => html! {
                    <p class="section-error">{ message.clone() }</p>
                },
                None => html! {
                    <p class="section-empty">{ "Nothing here yet." }</p>
                },
            },
            Some(records) => html! {
                <div class="content-grid grid gap-6">
                    { for records.iter().take(take).map(|record| html! {
                        <ContentCard
                            key={record.id.clone()}
                            record={record.clone()}
                            kind={kind}
                        />
                    }) }
                </div>
            },
        };

        html! {
            <section class="home-section">
                <div class="flex items-baseline justify-between mb-6">
                    <h2 class="section-title">{ title.to_string() }</h2>
                    <Link<Route> to={Route::listing(kind)} classes={classes!("section-more")}>
                        { "View all" }
                    </Link<Route>>
                </div>
                { body }
            </section>
        }
    };

    html! {
        <main class="home-page pb-20">
            <div class="container">
                { hero }
                <div class="home-hero text-center py-16">
                    <h1 class="hero-title">{ "The Global Magazine" }</h1>
                    <p class="hero-subtitle">
                        { "Issues, briefings, long reads and reader dispatches." }
                    </p>
                </div>
                { section("Latest issues", ContentKind::Magazine, &magazines, &magazines_error, 4) }
                { section("News", ContentKind::News, &news, &news_error, 6) }
                { section("Articles", ContentKind::Article, &articles, &articles_error, 4) }
                { section("Stories", ContentKind::Story, &stories, &stories_error, 4) }
            </div>
            <ScrollToTopButton />
        </main>
    }
}
