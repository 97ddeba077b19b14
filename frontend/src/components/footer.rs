use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;

#[derive(Clone, PartialEq)]
enum SubscribeState {
    Idle,
    Sending,
    Done,
    Failed(String),
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let state = use_state(|| SubscribeState::Idle);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(target.value());
            }
        })
    };

    let onsubmit = {
        let email = email.clone();
        let state = state.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let address = (*email).trim().to_string();
            if address.is_empty() || !address.contains('@') {
                state.set(SubscribeState::Failed(
                    "Enter a valid email address.".to_string(),
                ));
                return;
            }

            state.set(SubscribeState::Sending);
            let email = email.clone();
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::subscribe(&address).await {
                    Ok(()) => {
                        email.set(String::new());
                        state.set(SubscribeState::Done);
                        let state = state.clone();
                        Timeout::new(4000, move || state.set(SubscribeState::Idle)).forget();
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Subscribe failed: {}", e).into());
                        state.set(SubscribeState::Failed(e));
                    },
                }
            });
        })
    };

    let feedback = match &*state {
        SubscribeState::Idle => html! {},
        SubscribeState::Sending => html! { <p class="subscribe-note">{ "Subscribing..." }</p> },
        SubscribeState::Done => html! {
            <p class="subscribe-note subscribe-ok">{ "You're on the list. Welcome!" }</p>
        },
        SubscribeState::Failed(message) => html! {
            <p class="subscribe-note subscribe-error">{ message.clone() }</p>
        },
    };

    html! {
        <footer class="site-footer">
            <div class="container flex flex-wrap items-start justify-between gap-8">
                <div class="footer-brand">
                    <p class="site-brand">{ "The Global Magazine" }</p>
                    <p class="footer-tagline">
                        { "Magazines, news, articles and stories from everywhere." }
                    </p>
                </div>
                <form class="subscribe-form" {onsubmit}>
                    <label class="form-label" for="subscribe-email">
                        { "Get every new issue in your inbox" }
                    </label>
                    <div class="flex gap-2">
                        <input
                            id="subscribe-email"
                            type="email"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={on_email_input}
                        />
                        <button
                            type="submit"
                            class="btn-primary"
                            disabled={*state == SubscribeState::Sending}
                        >
                            { "Subscribe" }
                        </button>
                    </div>
                    { feedback }
                </form>
            </div>
        </footer>
    }
}
