//! Header search bar, synchronized with the URL `q` parameter.
//!
//! The input is debounced before the URL is updated, and the URL update
//! uses `replace` so every keystroke does not pollute browser history.
//! External URL changes (back/forward) flow back into the input.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::SEARCH_DEBOUNCE_MS;
use crate::models::{AppRoute, FilterState};

stylance::import_crate_style!(css, "src/components/search_bar.module.css");

#[component]
pub fn SearchBar(filters: Memo<FilterState>) -> impl IntoView {
    let input = RwSignal::new(filters.get_untracked().query);
    let pending = StoredValue::new_local(None::<Timeout>);

    // Back/forward navigation re-derives the query from the URL.
    Effect::new(move |_| {
        let url_query = filters.get().query;
        if input.get_untracked() != url_query {
            input.set(url_query);
        }
    });

    let handle_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        input.set(value.clone());

        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            let current = filters.get_untracked();
            if current.query != value {
                AppRoute::List(current.with_query(value)).replace();
            }
        });
        pending.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.cancel();
            }
            *slot = Some(timeout);
        });
    };

    view! {
        <div class=css::searchWrap>
            <span class=css::searchIcon aria-hidden="true">
                <Icon icon=ic::SEARCH />
            </span>
            <input
                id="search-input"
                class=css::search
                type="search"
                placeholder="Search Pokémon..."
                aria-label="Search Pokémon by name"
                prop:value=move || input.get()
                on:input=handle_input
            />
        </div>
    }
}
