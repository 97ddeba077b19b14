use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="not-found-page text-center py-24">
            <h1 class="page-title">{ "404" }</h1>
            <p class="text-xl mb-8">{ "That page went to print without us." }</p>
            <Link<Route> to={Route::Home} classes={classes!("btn-primary")}>
                { "Back to the front page" }
            </Link<Route>>
        </main>
    }
}
