use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

use crate::{api, components::error_banner::ErrorBanner, router::Route, session};

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let navigator = use_navigator();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                state.set(target.value());
            }
        })
    };

    let on_name = bind(&name);
    let on_email = bind(&email);
    let on_password = bind(&password);
    let on_confirm = bind(&confirm);

    let onsubmit = {
        let navigator = navigator.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            // Validated before anything leaves the browser.
            let name_value = (*name).trim().to_string();
            let email_value = (*email).trim().to_string();
            if name_value.is_empty() || email_value.is_empty() || (*password).is_empty() {
                error.set(Some("Fill in every field.".to_string()));
                return;
            }
            if *password != *confirm {
                error.set(Some("Passwords do not match.".to_string()));
                return;
            }

            busy.set(true);
            let password_value = (*password).clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::register(&name_value, &email_value, &password_value).await {
                    Ok(auth) => {
                        session::store_session(&auth.token, &auth.user);
                        if let Some(nav) = navigator.as_ref() {
                            nav.push(&Route::Home);
                        }
                    },
                    Err(e) => {
                        error.set(Some(e));
                    },
                }
                busy.set(false);
            });
        })
    };

    html! {
        <main class="auth-page">
            <div class="container auth-card">
                <h1 class="page-title">{ "Create an account" }</h1>
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
                <form {onsubmit} class="auth-form">
                    <label class="form-label">{ "Name" }
                        <input type="text" value={(*name).clone()} oninput={on_name} />
                    </label>
                    <label class="form-label">{ "Email" }
                        <input type="email" value={(*email).clone()} oninput={on_email} />
                    </label>
                    <label class="form-label">{ "Password" }
                        <input type="password" value={(*password).clone()} oninput={on_password} />
                    </label>
                    <label class="form-label">{ "Confirm password" }
                        <input type="password" value={(*confirm).clone()} oninput={on_confirm} />
                    </label>
                    <button type="submit" class="btn-primary" disabled={*busy}>
                        { if *busy { "Creating..." } else { "Register" } }
                    </button>
                </form>
                <p class="auth-alt">
                    { "Already have an account? " }
                    <Link<Route> to={Route::Login}>{ "Sign in" }</Link<Route>>
                </p>
            </div>
        </main>
    }
}
