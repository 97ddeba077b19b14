use global_magazine_shared::filter::{CATEGORIES, CATEGORY_ALL};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryFilterProps {
    /// Currently selected category, or the `"all"` sentinel.
    pub selected: String,
    pub on_select: Callback<String>,
}

/// Button row for the fixed category list, plus the "All" sentinel.
#[function_component(CategoryFilter)]
pub fn category_filter(props: &CategoryFilterProps) -> Html {
    let button = |value: String, label: String| {
        let active = props.selected.eq_ignore_ascii_case(&value);
        let onclick = {
            let on_select = props.on_select.clone();
            let value = value.clone();
            Callback::from(move |_| on_select.emit(value.clone()))
        };
        html! {
            <button
                key={value.clone()}
                type="button"
                class={classes!(
                    "category-pill",
                    active.then_some("category-pill-active")
                )}
                aria-pressed={active.to_string()}
                onclick={onclick}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="category-filter flex flex-wrap gap-2" role="group" aria-label="Filter by category">
            { button(CATEGORY_ALL.to_string(), "All".to_string()) }
            { for CATEGORIES.iter().map(|name| button(name.to_string(), name.to_string())) }
        </div>
    }
}
