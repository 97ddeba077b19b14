use global_magazine_shared::{paginate, progress};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Paginate arbitrary vectors inside a component.
///
/// Returns `(visible_items, current_page, total_pages, go_to_page)`. Page
/// requests are clamped to the valid range; callers emit `go_to_page(1)`
/// whenever a filter input changes.
#[hook]
pub fn use_pagination<T>(
    items: Vec<T>,
    items_per_page: usize,
) -> (Vec<T>, usize, usize, Callback<usize>)
where
    T: Clone + PartialEq + 'static,
{
    let per_page = items_per_page.max(1);
    let total_pages = paginate::total_pages(items.len(), per_page);
    let current_page = use_state(|| 1usize);

    {
        let current_page = current_page.clone();
        use_effect_with(total_pages, move |total| {
            let safe_page = paginate::clamp_page(*current_page, *total);
            if safe_page != *current_page {
                current_page.set(safe_page);
            }
            || ()
        });
    }

    let memoized_slice = {
        let current_snapshot = *current_page;
        use_memo((items, current_snapshot, per_page), move |(items, page, per_page)| {
            paginate::page_slice(items, *page, *per_page)
        })
    };

    let visible_items = (*memoized_slice).clone();
    let visible_page = paginate::clamp_page(*current_page, total_pages);
    let go_to_page = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| {
            let next_page = paginate::clamp_page(page, total_pages);
            if next_page != *current_page {
                current_page.set(next_page);
            }
        })
    };

    (visible_items, visible_page, total_pages, go_to_page)
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Reading completion for the current document as a displayable integer
/// percentage. Recomputed on every scroll event; no throttling.
#[hook]
pub fn use_reading_progress() -> u32 {
    let percent = use_state(|| 0u32);

    {
        let percent = percent.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");

            let closure = {
                let percent = percent.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    let document_height = window
                        .document()
                        .and_then(|doc| doc.document_element())
                        .map(|root| f64::from(root.scroll_height()))
                        .unwrap_or(0.0);
                    let viewport_height = window
                        .inner_height()
                        .ok()
                        .and_then(|value| value.as_f64())
                        .unwrap_or(0.0);

                    let raw = progress::completion(scroll_y, document_height, viewport_height);
                    percent.set(progress::display_percent(raw));
                }) as Box<dyn Fn()>)
            };

            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());

            let cleanup = move || {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    closure.as_ref().unchecked_ref(),
                );
                drop(closure);
            };

            move || cleanup()
        });
    }

    *percent
}
