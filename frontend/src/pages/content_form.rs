use global_magazine_shared::{
    filter::CATEGORIES, ContentKind, ContentRecord, ContentStatus,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{
    api::{self, ContentPayload},
    components::{
        error_banner::ErrorBanner, image_upload::ImageUploadField, require_role::RequireRole,
    },
    router::Route,
    session,
};

#[derive(Properties, PartialEq)]
pub struct ContentFormProps {
    /// News or Article; the two share a JSON write surface.
    pub kind: ContentKind,
    /// `None` for create, a backend id or local draft id for edit.
    pub id: Option<String>,
}

#[function_component(ContentFormPage)]
pub fn content_form_page(props: &ContentFormProps) -> Html {
    html! {
        <RequireRole roles={vec![
            global_magazine_shared::Role::Admin,
            global_magazine_shared::Role::Creator,
        ]}>
            <ContentFormInner kind={props.kind} id={props.id.clone()} />
        </RequireRole>
    }
}

#[function_component(ContentFormInner)]
fn content_form_inner(props: &ContentFormProps) -> Html {
    let navigator = use_navigator();
    let kind = props.kind;

    let title = use_state(String::new);
    let description = use_state(String::new);
    let category = use_state(String::new);
    let date = use_state(String::new);
    let author = use_state(String::new);
    let status = use_state(|| ContentStatus::Published.as_str().to_string());
    let image = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    // Edit mode: populate the fields from the draft buffer or the fetched
    // collection, whichever owns the id.
    {
        let title = title.clone();
        let description = description.clone();
        let category = category.clone();
        let date = date.clone();
        let author = author.clone();
        let status = status.clone();
        let image = image.clone();
        let error = error.clone();
        use_effect_with((kind, props.id.clone()), move |(kind, id)| {
            if let Some(id) = id.clone() {
                let kind = *kind;
                let apply = move |record: ContentRecord| {
                    title.set(record.title);
                    description.set(record.description);
                    category.set(record.category);
                    date.set(record.date);
                    author.set(record.author);
                    if let Some(existing) = record.status {
                        status.set(existing.as_str().to_string());
                    }
                    image.set(record.image);
                };

                if session::is_draft_id(&id) {
                    if let Some(draft) = session::drafts().into_iter().find(|d| d.id == id) {
                        apply(draft);
                    }
                } else {
                    wasm_bindgen_futures::spawn_local(async move {
                        match api::fetch_collection(kind).await {
                            Ok(data) => {
                                if let Some(record) =
                                    data.into_iter().find(|record| record.id == id)
                                {
                                    apply(record);
                                } else {
                                    error.set(Some(format!("{} not found.", kind.label())));
                                }
                            },
                            Err(e) => error.set(Some(e)),
                        }
                    });
                }
            }
            || ()
        });
    }

    let bind_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                state.set(target.value());
            }
        })
    };

    let on_title = bind_input(&title);
    let on_date = bind_input(&date);
    let on_author = bind_input(&author);

    let on_description = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(target.value());
            }
        })
    };

    let on_category = {
        let category = category.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                category.set(target.value());
            }
        })
    };

    let on_status = {
        let status = status.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                status.set(target.value());
            }
        })
    };

    let on_image_data_url = {
        let image = image.clone();
        Callback::from(move |url: String| image.set(Some(url)))
    };

    let parsed_status = match status.as_str() {
        "draft" => Some(ContentStatus::Draft),
        _ => Some(ContentStatus::Published),
    };

    let build_payload = {
        let title = title.clone();
        let description = description.clone();
        let category = category.clone();
        let date = date.clone();
        let author = author.clone();
        let image = image.clone();
        move || ContentPayload {
            title: (*title).trim().to_string(),
            description: (*description).clone(),
            category: (*category).clone(),
            date: (*date).clone(),
            author: (*author).clone(),
            image: (*image).clone(),
            status: parsed_status,
        }
    };

    let onsubmit = {
        let navigator = navigator.clone();
        let error = error.clone();
        let saving = saving.clone();
        let build_payload = build_payload.clone();
        let id = props.id.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let payload = build_payload();
            if payload.title.is_empty() {
                error.set(Some("A title is required.".to_string()));
                return;
            }
            if payload.category.is_empty() {
                error.set(Some("Pick a category.".to_string()));
                return;
            }

            saving.set(true);
            let navigator = navigator.clone();
            let error = error.clone();
            let saving = saving.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // A local draft publishes as a create; only backend ids
                // route to the update endpoint.
                let backend_id = id.clone().filter(|id| !session::is_draft_id(id));
                let result = match (&backend_id, kind) {
                    (Some(id), ContentKind::News) => api::update_news(id, &payload).await,
                    (Some(id), _) => api::update_article(id, &payload).await,
                    (None, ContentKind::News) => api::create_news(&payload).await,
                    (None, _) => api::create_article(&payload).await,
                };

                match result {
                    Ok(()) => {
                        if let Some(draft_id) = id.as_deref().filter(|id| session::is_draft_id(id))
                        {
                            session::remove_draft(draft_id);
                        }
                        if let Some(nav) = navigator.as_ref() {
                            nav.push(&Route::Dashboard);
                        }
                    },
                    Err(e) => {
                        error.set(Some(e));
                    },
                }
                saving.set(false);
            });
        })
    };

    let on_save_locally = {
        let navigator = navigator.clone();
        let error = error.clone();
        let build_payload = build_payload.clone();
        let id = props.id.clone();
        Callback::from(move |_| {
            let payload = build_payload();
            if payload.title.is_empty() {
                error.set(Some("A title is required.".to_string()));
                return;
            }

            let draft_id = id
                .clone()
                .filter(|id| session::is_draft_id(id))
                .unwrap_or_else(|| session::next_draft_id(kind));
            session::save_draft(ContentRecord {
                id: draft_id,
                title: payload.title,
                description: payload.description,
                image: payload.image,
                category: payload.category,
                date: payload.date,
                author: payload.author,
                status: Some(ContentStatus::Draft),
                pdf: None,
            });
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Dashboard);
            }
        })
    };

    let heading = match &props.id {
        Some(_) => format!("Edit {}", kind.label().to_lowercase()),
        None => format!("New {}", kind.label().to_lowercase()),
    };

    html! {
        <main class="form-page pb-20">
            <div class="container form-card">
                <h1 class="page-title py-8">{ heading }</h1>
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
                <form {onsubmit} class="content-form">
                    <label class="form-label">{ "Title" }
                        <input type="text" value={(*title).clone()} oninput={on_title} />
                    </label>
                    <label class="form-label">{ "Body" }
                        <textarea
                            rows="12"
                            value={(*description).clone()}
                            oninput={on_description}
                        />
                    </label>
                    <div class="form-row flex gap-4">
                        <label class="form-label">{ "Category" }
                            <select onchange={on_category}>
                                <option value="" selected={category.is_empty()}>
                                    { "Choose..." }
                                </option>
                                { for CATEGORIES.iter().map(|name| html! {
                                    <option
                                        value={*name}
                                        selected={category.as_str() == *name}
                                    >
                                        { *name }
                                    </option>
                                }) }
                            </select>
                        </label>
                        <label class="form-label">{ "Date" }
                            <input
                                type="text"
                                placeholder="2024-03-12"
                                value={(*date).clone()}
                                oninput={on_date}
                            />
                        </label>
                        <label class="form-label">{ "Author" }
                            <input type="text" value={(*author).clone()} oninput={on_author} />
                        </label>
                        <label class="form-label">{ "Status" }
                            <select onchange={on_status}>
                                <option value="published" selected={status.as_str() == "published"}>
                                    { "Published" }
                                </option>
                                <option value="draft" selected={status.as_str() == "draft"}>
                                    { "Draft" }
                                </option>
                            </select>
                        </label>
                    </div>
                    <ImageUploadField
                        label={"Cover image"}
                        on_file={Callback::from(|_| ())}
                        on_data_url={on_image_data_url}
                        initial_preview={(*image).clone()}
                    />
                    <div class="form-actions flex gap-3">
                        <button type="submit" class="btn-primary" disabled={*saving}>
                            { if *saving { "Saving..." } else { "Save" } }
                        </button>
                        <button
                            type="button"
                            class="btn-ghost"
                            onclick={on_save_locally}
                        >
                            { "Save locally" }
                        </button>
                    </div>
                </form>
            </div>
        </main>
    }
}
