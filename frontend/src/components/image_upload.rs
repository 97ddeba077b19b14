use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{File, FileReader, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageUploadFieldProps {
    pub label: String,
    /// Receives the picked file; the caller keeps it for the multipart
    /// body or reads the preview data URL, depending on the form.
    pub on_file: Callback<File>,
    /// Emits the data URL once the preview read finishes.
    #[prop_or_default]
    pub on_data_url: Option<Callback<String>>,
    /// Existing image shown before any file is picked (edit forms).
    #[prop_or_default]
    pub initial_preview: Option<String>,
}

/// File input with an inline preview rendered from a `FileReader` data
/// URL before anything is uploaded.
#[function_component(ImageUploadField)]
pub fn image_upload_field(props: &ImageUploadFieldProps) -> Html {
    let preview = use_state(|| None::<String>);

    let onchange = {
        let preview = preview.clone();
        let on_file = props.on_file.clone();
        let on_data_url = props.on_data_url.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            on_file.emit(file.clone());

            let Ok(reader) = FileReader::new() else {
                return;
            };

            let onload = {
                let reader = reader.clone();
                let preview = preview.clone();
                let on_data_url = on_data_url.clone();
                Closure::wrap(Box::new(move |_event: web_sys::Event| {
                    if let Some(url) = reader.result().ok().and_then(|value| value.as_string()) {
                        preview.set(Some(url.clone()));
                        if let Some(cb) = on_data_url.as_ref() {
                            cb.emit(url);
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            onload.forget();
            let _ = reader.read_as_data_url(&file);
        })
    };

    let shown_preview = (*preview).clone().or_else(|| props.initial_preview.clone());

    html! {
        <div class="image-upload-field">
            <label class="form-label">
                { props.label.clone() }
                <input type="file" accept="image/*" onchange={onchange} />
            </label>
            {
                if let Some(src) = shown_preview {
                    html! {
                        <img
                            class="image-upload-preview"
                            src={src}
                            alt="Selected image preview"
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
