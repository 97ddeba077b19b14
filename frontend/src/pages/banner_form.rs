use global_magazine_shared::Role;
use web_sys::{File, FormData, HtmlInputElement};
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
pub struct BannerFormProps {
    pub id: Option<String>,
}

#[function_component(BannerFormPage)]
pub fn banner_form_page(props: &BannerFormProps) -> Html {
    html! {
        <RequireRole roles={vec![Role::Admin, Role::Creator]}>
            <BannerFormInner id={props.id.clone()} />
        </RequireRole>
    }
}

#[function_component(BannerFormInner)]
fn banner_form_inner(props: &BannerFormProps) -> Html {
    let navigator = use_navigator();
    let is_edit = props.id.is_some();

    let title = use_state(String::new);
    let link = use_state(String::new);
    let existing_image = use_state(|| None::<String>);
    let image_file = use_state(|| None::<File>);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let title = title.clone();
        let link = link.clone();
        let existing_image = existing_image.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_banners().await {
                        Ok(banners) => {
                            match banners.into_iter().find(|banner| banner.id == id) {
                                Some(banner) => {
                                    title.set(banner.title);
                                    link.set(banner.link.unwrap_or_default());
                                    existing_image.set(banner.image);
                                },
                                None => error.set(Some("Banner not found.".to_string())),
                            }
                        },
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
    let on_link = bind_input(&link);

    let on_image_file = {
        let image_file = image_file.clone();
        Callback::from(move |file: File| image_file.set(Some(file)))
    };

    let onsubmit = {
        let navigator = navigator.clone();
        let title = title.clone();
        let link = link.clone();
        let image_file = image_file.clone();
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
            if !is_edit && image_file.is_none() {
                error.set(Some("A banner image is required.".to_string()));
                return;
            }

            let metadata = UploadMetadata {
                title: title_value,
                link: (*link).trim().to_string(),
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
            let _ = form.append_with_str("data", &data_json);

            saving.set(true);
            let navigator = navigator.clone();
            let error = error.clone();
            let saving = saving.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match id.as_deref() {
                    Some(id) => api::update_banner(id, form).await,
                    None => api::upload_banner(form).await,
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

    let heading = if is_edit { "Edit banner" } else { "New banner" };

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
                    <label class="form-label">{ "Target link" }
                        <input
                            type="text"
                            placeholder="/magazines"
                            value={(*link).clone()}
                            oninput={on_link}
                        />
                    </label>
                    <ImageUploadField
                        label={"Banner image"}
                        on_file={on_image_file}
                        initial_preview={(*existing_image).clone()}
                    />
                    <div class="form-actions">
                        <button type="submit" class="btn-primary" disabled={*saving}>
                            { if *saving { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                </form>
            </div>
        </main>
    }
}
