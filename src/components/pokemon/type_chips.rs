//! Type filter chips with intersection semantics.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::KNOWN_TYPES;
use crate::models::{AppRoute, FilterState};

stylance::import_crate_style!(css, "src/components/pokemon/type_chips.module.css");

#[component]
pub fn TypeChips(filters: Memo<FilterState>) -> impl IntoView {
    let any_active = Signal::derive(move || !filters.get().type_filters.is_empty());

    view! {
        <div class=css::typeChips>
            <Show when=move || any_active.get()>
                <button
                    type="button"
                    class=format!("{} {}", css::chip, css::clearAll)
                    title="Clear all filters"
                    on:click=move |_| {
                        AppRoute::List(filters.get_untracked().without_type_filters()).push();
                    }
                >
                    <Icon icon=ic::CLOSE />
                    " Clear All"
                </button>
            </Show>

            {KNOWN_TYPES
                .iter()
                .map(|type_name| view! { <TypeChip filters=filters type_name=*type_name /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn TypeChip(filters: Memo<FilterState>, type_name: &'static str) -> impl IntoView {
    let is_active = Signal::derive(move || filters.get().has_type(type_name));

    view! {
        <button
            type="button"
            class=move || {
                if is_active.get() {
                    format!("{} {}", css::chip, css::chipActive)
                } else {
                    css::chip.to_string()
                }
            }
            attr:data-type=type_name
            title=format!("Filter by {} type", type_name)
            aria-pressed=move || is_active.get().to_string()
            on:click=move |_| {
                AppRoute::List(filters.get_untracked().with_type_toggled(type_name)).push();
            }
        >
            {type_name}
            <Show when=move || is_active.get()>
                <span class=css::checkmark>
                    <Icon icon=ic::CHECK />
                </span>
            </Show>
        </button>
    }
}
