use global_magazine_shared::{text, Banner, ContentKind, ContentRecord, ContentStatus, Role};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        require_role::RequireRole,
        stats_card::StatsCard,
    },
    router::Route,
    session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DashboardTab {
    Magazines,
    News,
    Articles,
    Banners,
}

impl DashboardTab {
    fn label(&self) -> &'static str {
        match self {
            DashboardTab::Magazines => "Magazines",
            DashboardTab::News => "News",
            DashboardTab::Articles => "Articles",
            DashboardTab::Banners => "Banners",
        }
    }

    fn new_label(&self) -> &'static str {
        match self {
            DashboardTab::Magazines => "New magazine",
            DashboardTab::News => "New news item",
            DashboardTab::Articles => "New article",
            DashboardTab::Banners => "New banner",
        }
    }
}

const TABS: &[DashboardTab] = &[
    DashboardTab::Magazines,
    DashboardTab::News,
    DashboardTab::Articles,
    DashboardTab::Banners,
];

fn edit_route(kind: ContentKind, id: String) -> Route {
    match kind {
        ContentKind::Magazine => Route::EditMagazine { id },
        ContentKind::News => Route::EditNews { id },
        ContentKind::Article => Route::EditArticle { id },
        // Stories have no CRUD surface; the variant is unreachable from
        // the dashboard tables.
        ContentKind::Story => Route::Dashboard,
    }
}

fn new_route(tab: DashboardTab) -> Route {
    match tab {
        DashboardTab::Magazines => Route::NewMagazine,
        DashboardTab::News => Route::NewNews,
        DashboardTab::Articles => Route::NewArticle,
        DashboardTab::Banners => Route::NewBanner,
    }
}

fn confirm_delete(title: &str) -> bool {
    web_sys::window()
        .map(|win| {
            win.confirm_with_message(&format!("Delete \"{}\"? This cannot be undone.", title))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

type Records = UseStateHandle<Option<Vec<ContentRecord>>>;

/// Delete ordering is confirm-then-mutate: the row leaves the table only
/// after the backend accepted the delete.
fn make_delete(
    list: Records,
    kind: ContentKind,
    error: UseStateHandle<Option<String>>,
) -> Callback<ContentRecord> {
    Callback::from(move |record: ContentRecord| {
        if !confirm_delete(&record.title) {
            return;
        }
        let list = list.clone();
        let error = error.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match crate::api::delete_content(kind, &record.id).await {
                Ok(()) => {
                    let remaining: Vec<ContentRecord> = (*list)
                        .clone()
                        .unwrap_or_default()
                        .into_iter()
                        .filter(|item| item.id != record.id)
                        .collect();
                    list.set(Some(remaining));
                },
                Err(e) => {
                    web_sys::console::error_1(&format!("Delete failed: {}", e).into());
                    error.set(Some(e));
                },
            }
        });
    })
}

fn status_badge(status: Option<ContentStatus>) -> Html {
    let status = status.unwrap_or(ContentStatus::Published);
    html! {
        <span class={classes!(
            "status-badge",
            match status {
                ContentStatus::Draft => "status-draft",
                ContentStatus::Published => "status-published",
            }
        )}>
            { status.as_str() }
        </span>
    }
}

fn content_table(
    records: &[ContentRecord],
    kind: ContentKind,
    on_delete: Callback<ContentRecord>,
) -> Html {
    if records.is_empty() {
        return html! { <p class="section-empty">{ "Nothing published yet." }</p> };
    }

    html! {
        <table class="dashboard-table">
            <thead>
                <tr>
                    <th>{ "Title" }</th>
                    <th>{ "Category" }</th>
                    <th>{ "Date" }</th>
                    <th>{ "Status" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for records.iter().map(|record| {
                    let delete_onclick = {
                        let on_delete = on_delete.clone();
                        let record = record.clone();
                        Callback::from(move |_| on_delete.emit(record.clone()))
                    };
                    html! {
                        <tr key={record.id.clone()}>
                            <td>{ &record.title }</td>
                            <td>{ &record.category }</td>
                            <td>{ text::pretty_date(&record.date).into_owned() }</td>
                            <td>{ status_badge(record.status) }</td>
                            <td class="dashboard-actions">
                                <Link<Route>
                                    to={edit_route(kind, record.id.clone())}
                                    classes={classes!("btn-ghost")}
                                >
                                    { "Edit" }
                                </Link<Route>>
                                <button
                                    type="button"
                                    class="btn-danger"
                                    onclick={delete_onclick}
                                >
                                    { "Delete" }
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <RequireRole roles={vec![Role::Admin, Role::Creator]}>
            <DashboardInner />
        </RequireRole>
    }
}

#[function_component(DashboardInner)]
fn dashboard_inner() -> Html {
    let active_tab = use_state(|| DashboardTab::Magazines);
    let magazines = use_state(|| None::<Vec<ContentRecord>>);
    let news = use_state(|| None::<Vec<ContentRecord>>);
    let articles = use_state(|| None::<Vec<ContentRecord>>);
    let banners = use_state(|| None::<Vec<Banner>>);
    let drafts = use_state(session::drafts);
    let error = use_state(|| None::<String>);

    // Lazy per-tab loading, once per tab.
    {
        let magazines = magazines.clone();
        let news = news.clone();
        let articles = articles.clone();
        let banners = banners.clone();
        let error = error.clone();
        use_effect_with(*active_tab, move |tab| {
            match tab {
                DashboardTab::Magazines if magazines.is_none() => {
                    wasm_bindgen_futures::spawn_local(async move {
                        match crate::api::fetch_magazines().await {
                            Ok(data) => magazines.set(Some(data)),
                            Err(e) => {
                                error.set(Some(e));
                                magazines.set(Some(Vec::new()));
                            },
                        }
                    });
                },
                DashboardTab::News if news.is_none() => {
                    wasm_bindgen_futures::spawn_local(async move {
                        match crate::api::fetch_news().await {
                            Ok(data) => news.set(Some(data)),
                            Err(e) => {
                                error.set(Some(e));
                                news.set(Some(Vec::new()));
                            },
                        }
                    });
                },
                DashboardTab::Articles if articles.is_none() => {
                    wasm_bindgen_futures::spawn_local(async move {
                        match crate::api::fetch_articles().await {
                            Ok(data) => articles.set(Some(data)),
                            Err(e) => {
                                error.set(Some(e));
                                articles.set(Some(Vec::new()));
                            },
                        }
                    });
                },
                DashboardTab::Banners if banners.is_none() => {
                    wasm_bindgen_futures::spawn_local(async move {
                        match crate::api::fetch_banners().await {
                            Ok(data) => banners.set(Some(data)),
                            Err(e) => {
                                error.set(Some(e));
                                banners.set(Some(Vec::new()));
                            },
                        }
                    });
                },
                _ => {},
            }
            || ()
        });
    }

    let delete_magazine = make_delete(magazines.clone(), ContentKind::Magazine, error.clone());
    let delete_news = make_delete(news.clone(), ContentKind::News, error.clone());
    let delete_article = make_delete(articles.clone(), ContentKind::Article, error.clone());

    let delete_banner = {
        let banners = banners.clone();
        let error = error.clone();
        Callback::from(move |banner: Banner| {
            if !confirm_delete(&banner.title) {
                return;
            }
            let banners = banners.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::delete_banner(&banner.id).await {
                    Ok(()) => {
                        let remaining: Vec<Banner> = (*banners)
                            .clone()
                            .unwrap_or_default()
                            .into_iter()
                            .filter(|item| item.id != banner.id)
                            .collect();
                        banners.set(Some(remaining));
                    },
                    Err(e) => {
                        error.set(Some(e));
                    },
                }
            });
        })
    };

    let remove_draft = {
        let drafts = drafts.clone();
        Callback::from(move |id: String| {
            session::remove_draft(&id);
            drafts.set(session::drafts());
        })
    };

    let count = |records: &Option<Vec<ContentRecord>>| {
        records
            .as_ref()
            .map(|list| list.len().to_string())
            .unwrap_or_else(|| "–".to_string())
    };

    let tab_body = |tab: DashboardTab| -> Html {
        match tab {
            DashboardTab::Magazines => match magazines.as_ref() {
                None => html! { <LoadingSpinner size={SpinnerSize::Medium} /> },
                Some(records) => {
                    content_table(records, ContentKind::Magazine, delete_magazine.clone())
                },
            },
            DashboardTab::News => match news.as_ref() {
                None => html! { <LoadingSpinner size={SpinnerSize::Medium} /> },
                Some(records) => content_table(records, ContentKind::News, delete_news.clone()),
            },
            DashboardTab::Articles => match articles.as_ref() {
                None => html! { <LoadingSpinner size={SpinnerSize::Medium} /> },
                Some(records) => {
                    content_table(records, ContentKind::Article, delete_article.clone())
                },
            },
            DashboardTab::Banners => match banners.as_ref() {
                None => html! { <LoadingSpinner size={SpinnerSize::Medium} /> },
                Some(list) if list.is_empty() => {
                    html! { <p class="section-empty">{ "No banners." }</p> }
                },
                Some(list) => html! {
                    <table class="dashboard-table">
                        <thead>
                            <tr>
                                <th>{ "Title" }</th>
                                <th>{ "Link" }</th>
                                <th>{ "Actions" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for list.iter().map(|banner| {
                                let delete_onclick = {
                                    let delete_banner = delete_banner.clone();
                                    let banner = banner.clone();
                                    Callback::from(move |_| delete_banner.emit(banner.clone()))
                                };
                                html! {
                                    <tr key={banner.id.clone()}>
                                        <td>{ &banner.title }</td>
                                        <td>{ banner.link.clone().unwrap_or_default() }</td>
                                        <td class="dashboard-actions">
                                            <Link<Route>
                                                to={Route::EditBanner { id: banner.id.clone() }}
                                                classes={classes!("btn-ghost")}
                                            >
                                                { "Edit" }
                                            </Link<Route>>
                                            <button
                                                type="button"
                                                class="btn-danger"
                                                onclick={delete_onclick}
                                            >
                                                { "Delete" }
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                },
            },
        }
    };

    html! {
        <main class="dashboard-page pb-20">
            <div class="container">
                <div class="flex items-center justify-between py-10">
                    <h1 class="page-title">{ "Dashboard" }</h1>
                    <Link<Route> to={new_route(*active_tab)} classes={classes!("btn-primary")}>
                        { active_tab.new_label() }
                    </Link<Route>>
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
                <div class="stats-row flex flex-wrap gap-4 mb-10">
                    <StatsCard
                        icon={"📖"}
                        value={count(&magazines)}
                        label={"Magazines"}
                        route={Route::Magazines}
                    />
                    <StatsCard
                        icon={"📰"}
                        value={count(&news)}
                        label={"News"}
                        route={Route::News}
                    />
                    <StatsCard
                        icon={"✍️"}
                        value={count(&articles)}
                        label={"Articles"}
                        route={Route::Articles}
                    />
                </div>
                <div class="dashboard-tabs flex gap-2 mb-8" role="tablist">
                    { for TABS.iter().map(|tab| {
                        let is_active = *tab == *active_tab;
                        let onclick = {
                            let active_tab = active_tab.clone();
                            let tab = *tab;
                            Callback::from(move |_| active_tab.set(tab))
                        };
                        html! {
                            <button
                                key={tab.label()}
                                type="button"
                                role="tab"
                                class={classes!(
                                    "dashboard-tab",
                                    is_active.then_some("dashboard-tab-active")
                                )}
                                aria-selected={is_active.to_string()}
                                onclick={onclick}
                            >
                                { tab.label() }
                            </button>
                        }
                    }) }
                </div>
                { tab_body(*active_tab) }
                {
                    // Local scratch buffer: never synced to the server.
                    if !drafts.is_empty() {
                        html! {
                            <section class="drafts-section mt-16">
                                <h2 class="section-title mb-2">{ "Local drafts" }</h2>
                                <p class="section-note mb-6">
                                    { "Stored only in this browser. Publish from the edit form \
                                       to put a draft on the site." }
                                </p>
                                <table class="dashboard-table">
                                    <thead>
                                        <tr>
                                            <th>{ "Title" }</th>
                                            <th>{ "Category" }</th>
                                            <th>{ "Actions" }</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        { for drafts.iter().map(|draft| {
                                            let remove_onclick = {
                                                let remove_draft = remove_draft.clone();
                                                let id = draft.id.clone();
                                                Callback::from(move |_| {
                                                    remove_draft.emit(id.clone())
                                                })
                                            };
                                            let kind = session::draft_kind(&draft.id);
                                            html! {
                                                <tr key={draft.id.clone()}>
                                                    <td>{ &draft.title }</td>
                                                    <td>{ &draft.category }</td>
                                                    <td class="dashboard-actions">
                                                        <Link<Route>
                                                            to={edit_route(kind, draft.id.clone())}
                                                            classes={classes!("btn-ghost")}
                                                        >
                                                            { "Edit" }
                                                        </Link<Route>>
                                                        <button
                                                            type="button"
                                                            class="btn-danger"
                                                            onclick={remove_onclick}
                                                        >
                                                            { "Discard" }
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }) }
                                    </tbody>
                                </table>
                            </section>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </main>
    }
}
