use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{router::Route, session};

#[function_component(Header)]
pub fn header() -> Html {
    let user = session::current_user();

    let on_logout = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        session::logout();
    });

    let nav_link = |route: Route, label: &str| {
        html! {
            <Link<Route> to={route} classes={classes!("nav-link")}>
                { label.to_string() }
            </Link<Route>>
        }
    };

    html! {
        <header class="site-header">
            <div class="container flex items-center justify-between gap-4">
                <Link<Route> to={Route::Home} classes={classes!("site-brand")}>
                    { "The Global Magazine" }
                </Link<Route>>
                <nav class="site-nav flex items-center gap-4" aria-label="Primary">
                    { nav_link(Route::Magazines, "Magazines") }
                    { nav_link(Route::News, "News") }
                    { nav_link(Route::Articles, "Articles") }
                    { nav_link(Route::Stories, "Stories") }
                </nav>
                <div class="site-auth flex items-center gap-3">
                    {
                        match user {
                            Some(user) => html! {
                                <>
                                    {
                                        if user.role.can_manage_content() {
                                            nav_link(Route::Dashboard, "Dashboard")
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <span class="site-auth-name">{ user.name.clone() }</span>
                                    <button
                                        type="button"
                                        class="btn-ghost"
                                        onclick={on_logout}
                                    >
                                        { "Sign out" }
                                    </button>
                                </>
                            },
                            None => html! {
                                <>
                                    { nav_link(Route::Login, "Sign in") }
                                    { nav_link(Route::Register, "Register") }
                                </>
                            },
                        }
                    }
                </div>
            </div>
        </header>
    }
}
