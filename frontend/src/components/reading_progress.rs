use yew::prelude::*;

use crate::hooks::use_reading_progress;

/// Fixed progress bar at the top of detail pages. The displayed value is
/// always an integer in 0..=100, even while the underlying ratio is
/// undefined for short documents.
#[function_component(ReadingProgressBar)]
pub fn reading_progress_bar() -> Html {
    let percent = use_reading_progress();

    html! {
        <div
            class="reading-progress fixed top-0 left-0 right-0"
            role="progressbar"
            aria-label="Reading progress"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={percent.to_string()}
        >
            <div
                class="reading-progress-fill"
                style={format!("width: {percent}%;")}
            />
            <span class="reading-progress-label sr-only">
                { format!("{percent}%") }
            </span>
        </div>
    }
}
