use global_magazine_shared::{text, ContentKind, ContentRecord};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{config, router::Route};

const EXCERPT_CHARS: usize = 160;

#[derive(Properties, PartialEq, Clone)]
pub struct ContentCardProps {
    pub record: ContentRecord,
    pub kind: ContentKind,
}

#[function_component(ContentCard)]
pub fn content_card(props: &ContentCardProps) -> Html {
    let record = props.record.clone();
    let detail_route = Route::detail(props.kind, record.id.clone());

    let image = record
        .image
        .clone()
        .unwrap_or_else(|| config::asset_path(config::PLACEHOLDER_IMAGE));

    html! {
        <article class="content-card">
            <Link<Route> to={detail_route.clone()} classes={classes!("featured-image")}>
                <img src={image} alt={record.title.clone()} loading="lazy" />
            </Link<Route>>
            <h3 class="content-card-title">
                <Link<Route> to={detail_route} classes={classes!("content-card-title-link")}>
                    { &record.title }
                </Link<Route>>
            </h3>
            <div class="post-meta">
                {
                    if !record.author.is_empty() {
                        html! {
                            <span class="post-meta-item">
                                <i class="fas fa-user-circle" aria-hidden="true"></i>
                                { &record.author }
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
                <span class="post-meta-item">
                    <i class="far fa-calendar-alt" aria-hidden="true"></i>
                    { text::pretty_date(&record.date).into_owned() }
                </span>
                {
                    if !record.category.is_empty() {
                        html! {
                            <span class="post-meta-item post-category">
                                <i class="far fa-folder" aria-hidden="true"></i>
                                { &record.category }
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <p class="content-card-excerpt">
                { text::excerpt(&record.description, EXCERPT_CHARS) }
            </p>
        </article>
    }
}
