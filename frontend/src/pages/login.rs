use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

use crate::{api, components::error_banner::ErrorBanner, router::Route, session};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(target.value());
            }
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(target.value());
            }
        })
    };

    let onsubmit = {
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let email_value = (*email).trim().to_string();
            let password_value = (*password).clone();
            if email_value.is_empty() || password_value.is_empty() {
                error.set(Some("Enter your email and password.".to_string()));
                return;
            }

            busy.set(true);
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::login(&email_value, &password_value).await {
                    Ok(auth) => {
                        session::store_session(&auth.token, &auth.user);
                        if let Some(nav) = navigator.as_ref() {
                            if auth.user.role.can_manage_content() {
                                nav.push(&Route::Dashboard);
                            } else {
                                nav.push(&Route::Home);
                            }
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
                <h1 class="page-title">{ "Sign in" }</h1>
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
                    <label class="form-label">{ "Email" }
                        <input
                            type="email"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </label>
                    <label class="form-label">{ "Password" }
                        <input
                            type="password"
                            placeholder="Your password"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                    </label>
                    <button type="submit" class="btn-primary" disabled={*busy}>
                        { if *busy { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
                <p class="auth-alt">
                    { "New here? " }
                    <Link<Route> to={Route::Register}>{ "Create an account" }</Link<Route>>
                </p>
            </div>
        </main>
    }
}
