//! Application header: brand, navigation, and the search bar.

use leptos::prelude::*;

use super::search_bar::SearchBar;
use crate::config::APP_NAME;
use crate::models::{AppRoute, FilterState};

stylance::import_crate_style!(css, "src/components/header.module.css");

#[component]
pub fn Header(route: Memo<AppRoute>, filters: Memo<FilterState>) -> impl IntoView {
    let on_list = Signal::derive(move || matches!(route.get(), AppRoute::List(_)));
    let on_favorites = Signal::derive(move || matches!(route.get(), AppRoute::Favorites));

    let nav_class = move |active: bool| {
        if active {
            format!("{} {}", css::navLink, css::navActive)
        } else {
            css::navLink.to_string()
        }
    };

    view! {
        <header class=css::header>
            <a class=css::brand href="#/pokemon">{APP_NAME}</a>

            <nav class=css::nav aria-label="Main navigation">
                // The list link carries the current filters, so coming back
                // from the detail or favorites view restores the search.
                <a
                    class=move || nav_class(on_list.get())
                    href=move || AppRoute::List(filters.get()).to_hash()
                >
                    "Pokédex"
                </a>
                <a
                    class=move || nav_class(on_favorites.get())
                    href="#/favorites"
                >
                    "Favorites"
                </a>
            </nav>

            <div class=css::searchSlot>
                <SearchBar filters=filters />
            </div>
        </header>
    }
}
