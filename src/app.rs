//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and
//! application-level setup logic following Leptos conventions.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::FavoritesStore;
use crate::models::NamedResource;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component via `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The context separates concerns into independent domains:
/// - **Favorites**: the localStorage-backed store, sole writer of the
///   persisted mapping
/// - **Remote caches**: the full entity index and per-type membership sets,
///   owned here so they survive page/component remounts and stay valid for
///   the whole session
///
/// `Copy` because all fields are signal handles.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Favorites store; its read methods track the inner signal.
    pub favorites: FavoritesStore,

    /// Full entity index, fetched once per session; `None` until it
    /// arrives (degraded-search mode uses the current page instead).
    pub all_list: RwSignal<Option<Vec<NamedResource>>>,

    /// Type name → set of member entity names. Populated lazily per
    /// requested type, never invalidated within a session.
    pub type_membership: RwSignal<HashMap<String, HashSet<String>>>,

    /// Number of membership fetches currently in flight.
    pub pending_type_loads: RwSignal<usize>,
}

impl AppContext {
    /// Creates a new application context with empty caches and the
    /// favorites store seeded from localStorage.
    pub fn new() -> Self {
        Self {
            favorites: FavoritesStore::new(),
            all_list: RwSignal::new(None),
            type_membership: RwSignal::new(HashMap::new()),
            pending_type_loads: RwSignal::new(0),
        }
    }

    /// Whether any membership fetch is in flight.
    pub fn types_loading(&self) -> bool {
        self.pending_type_loads.get() > 0
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Subscribes the favorites store to cross-tab storage events
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    ctx.favorites.listen_for_external_changes();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="app-error">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
