//! Star button toggling an entity in the favorites store.
//!
//! The button is self-contained: it subscribes to the store, so every
//! instance (card, detail header) stays in sync when any of them toggles.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/pokemon/favorite_toggle.module.css");

#[component]
pub fn FavoriteToggle(id: String, name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let favorites = ctx.favorites;

    let id_for_state = id.clone();
    let is_fav = Signal::derive(move || favorites.has(&id_for_state));

    view! {
        <button
            class=move || {
                if is_fav.get() {
                    format!("{} {}", css::favToggle, css::favActive)
                } else {
                    css::favToggle.to_string()
                }
            }
            aria-pressed=move || is_fav.get().to_string()
            title=move || if is_fav.get() { "Unfavorite" } else { "Favorite" }
            on:click=move |ev: leptos::ev::MouseEvent| {
                // Cards wrap the toggle in a navigation link.
                ev.prevent_default();
                ev.stop_propagation();
                favorites.toggle(&id, &name);
            }
        >
            <Show
                when=move || is_fav.get()
                fallback=|| view! { <Icon icon=ic::STAR /> }
            >
                <Icon icon=ic::STAR_FILL />
            </Show>
        </button>
    }
}
