use global_magazine_shared::{filter::CATEGORIES, Role};
use web_sys::{File, FormData, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{
    api::{self, UploadMetadata},
    components::{
        error_banner::ErrorBanner, image_upload::ImageUploadField, require_role::RequireRole,
    },
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct MagazineFormProps {
    pub id: Option<String>,
}

#[function_component(MagazineFormPage)]
pub fn magazine_form_page(props: &MagazineFormProps) -> Html {
    html! {
        <RequireRole roles={vec![Role::Admin, Role::Creator]}>
            <MagazineFormInner id={props.id.clone()} />
        </RequireRole>
    }
}

#[function_component(MagazineFormInner)]
fn magazine_form_inner(props: &MagazineFormProps) -> Html {
    let navigator = use_navigator();
    let is_edit = props.id.is_some();

    let title = use_state(String::new);
    let description = use_state(String::new);
    let category = use_state(String::new);
    let date = use_state(String::new);
    let author = use_state(String::new);
    let existing_image = use_state(|| None::<String>);
    let image_file = use_state(|| None::<File>);
    let pdf_file = use_state(|| None::<File>);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let title = title.clone();
        let description = description.clone();
        let category = category.clone();
        let date = date.clone();
        let author = author.clone();
        let existing_image = existing_image.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_magazine(&id).await {
                        Ok(Some(issue)) => {
                            title.set(issue.title);
                            description.set(issue.description);
                            category.set(issue.category);
                            date.set(issue.date);
                            author.set(issue.author);
                            existing_image.set(issue.image);
                        },
                        Ok(None) => error.set(Some("Magazine not found.".to_string())),
                        Err(e) => error.set(Some(e)),
                    }
                });
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

    let on_image_file = {
        let image_file = image_file.clone();
        Callback::from(move |file: File| image_file.set(Some(file)))
    };

    let on_pdf_change = {
        let pdf_file = pdf_file.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            pdf_file.set(input.files().and_then(|files| files.get(0)));
        })
    };

    let onsubmit = {
        let navigator = navigator.clone();
        let title = title.clone();
        let description = description.clone();
        let category = category.clone();
        let date = date.clone();
        let author = author.clone();
        let image_file = image_file.clone();
        let pdf_file = pdf_file.clone();
        let error = error.clone();
        let saving = saving.clone();
        let id = props.id.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let title_value = (*title).trim().to_string();
            if title_value.is_empty() {
                error.set(Some("A title is required.".to_string()));
                return;
            }
            // The upload endpoint expects both files; enforce before the
            // request leaves the browser. Edits may keep existing assets.
            if !is_edit && (image_file.is_none() || pdf_file.is_none()) {
                error.set(Some(
                    "A cover image and the issue PDF are both required.".to_string(),
                ));
                return;
            }

            let metadata = UploadMetadata {
                title: title_value,
                description: (*description).clone(),
                category: (*category).clone(),
                date: (*date).clone(),
                author: (*author).clone(),
                ..UploadMetadata::default()
            };
            let data_json = match serde_json::to_string(&metadata) {
                Ok(json) => json,
                Err(e) => {
                    error.set(Some(format!("Serialize error: {:?}", e)));
                    return;
                },
            };

            let Ok(form) = FormData::new() else {
                error.set(Some("Could not build the upload form.".to_string()));
                return;
            };
            if let Some(file) = (*image_file).as_ref() {
                let _ = form.append_with_blob("image", file);
            }
            if let Some(file) = (*pdf_file).as_ref() {
                let _ = form.append_with_blob("pdf", file);
            }
            let _ = form.append_with_str("data", &data_json);

            saving.set(true);
            let navigator = navigator.clone();
            let error = error.clone();
            let saving = saving.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match id.as_deref() {
                    Some(id) => api::update_magazine(id, form).await,
                    None => api::upload_magazine(form).await,
                };

                match result {
                    Ok(()) => {
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

    let heading = if is_edit { "Edit magazine" } else { "New magazine" };

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
                    <label class="form-label">{ "Description" }
                        <textarea
                            rows="6"
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
                        <label class="form-label">{ "Issue date" }
                            <input
                                type="text"
                                placeholder="2024-03-12"
                                value={(*date).clone()}
                                oninput={on_date}
                            />
                        </label>
                        <label class="form-label">{ "Editor" }
                            <input type="text" value={(*author).clone()} oninput={on_author} />
                        </label>
                    </div>
                    <ImageUploadField
                        label={"Cover image"}
                        on_file={on_image_file}
                        initial_preview={(*existing_image).clone()}
                    />
                    <label class="form-label">{ "Issue PDF" }
                        <input
                            type="file"
                            accept="application/pdf"
                            onchange={on_pdf_change}
                        />
                    </label>
                    <div class="form-actions">
                        <button type="submit" class="btn-primary" disabled={*saving}>
                            { if *saving { "Uploading..." } else { "Save" } }
                        </button>
                    </div>
                </form>
            </div>
        </main>
    }
}
