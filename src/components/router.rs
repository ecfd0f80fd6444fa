//! Application router component.
//!
//! Handles URL-based routing with hash history for static-host
//! compatibility, using native hashchange events.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: filter state and navigation are
//!   derived from `#/path?params`
//! - **Header never re-renders on navigation**: it is always mounted
//! - **hashchange events**: browser back/forward buttons work
//!   automatically; `AppRoute::replace` dispatches a synthetic hashchange
//!   since `replaceState` does not fire one

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use super::favorites::FavoritesPage;
use super::header::Header;
use super::pokemon::{PokemonDetailPage, PokemonListPage};
use crate::models::{AppRoute, FilterState};
use crate::utils::session;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// Route structure:
/// - `#/pokemon?q=..&types=..&sort=..&page=..` → list view
/// - `#/pokemon/{id}` → detail view
/// - `#/favorites` → favorites view
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    // Filter state survives detours through detail/favorites views, so the
    // list page keeps its position when the user comes back.
    let filters = Memo::new(move |previous: Option<&FilterState>| match route_memo.get() {
        AppRoute::List(state) => state,
        _ => previous.cloned().unwrap_or_default(),
    });

    let on_list = Signal::derive(move || matches!(route_memo.get(), AppRoute::List(_)));
    let on_favorites = Signal::derive(move || matches!(route_memo.get(), AppRoute::Favorites));
    let detail_id = Memo::new(move |_| match route_memo.get() {
        AppRoute::Detail { id } => Some(id),
        _ => None,
    });

    // Best-effort scroll restoration when a route becomes active again.
    Effect::new(move |_| {
        let key = route_memo.get().session_key();
        session::restore_scroll_position(&key);
    });

    view! {
        <Header route=route_memo filters=filters />

        <main class=css::main>
            <Show when=move || on_list.get()>
                <PokemonListPage filters=filters />
            </Show>

            {move || detail_id.get().map(|id| view! { <PokemonDetailPage id=id /> })}

            <Show when=move || on_favorites.get()>
                <FavoritesPage />
            </Show>
        </main>
    }
}
