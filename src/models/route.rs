//! Hash-based routing for static-host-friendly navigation.
//!
//! The URL hash is the single source of truth for navigation and list
//! state. Routes carry their own query parameters, so a shared link
//! reproduces the exact page, filters, and sort order.
//!
//! URL formats:
//! - `#/pokemon` or `#/pokemon?q=char&types=fire,flying&sort=name&page=2`
//! - `#/pokemon/25` (detail view)
//! - `#/favorites`

use super::filters::FilterState;

/// Application routes for hash-based navigation.
#[derive(Clone, Debug, PartialEq)]
pub enum AppRoute {
    /// List/search view with its filter state: `#/pokemon?...`
    List(FilterState),
    /// Detail view for one entity: `#/pokemon/{id}`
    Detail { id: String },
    /// Favorites overview: `#/favorites`
    Favorites,
}

impl AppRoute {
    /// Parse a URL hash into a route. Empty or unknown hashes fall back to
    /// the list view with default filters.
    pub fn from_hash(hash: &str) -> Self {
        let rest = hash.trim_start_matches('#').trim_start_matches('/');
        let (path, query) = match rest.split_once('?') {
            Some((p, q)) => (p, q),
            None => (rest, ""),
        };
        let path = path.trim_end_matches('/');

        match path {
            "" | "pokemon" => Self::List(FilterState::from_query_string(query)),
            "favorites" => Self::Favorites,
            _ => match path.strip_prefix("pokemon/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::Detail {
                    id: id.to_string(),
                },
                _ => Self::List(FilterState::default()),
            },
        }
    }

    /// Convert a route back to its URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::List(filters) => {
                let qs = filters.to_query_string();
                if qs.is_empty() {
                    "#/pokemon".to_string()
                } else {
                    format!("#/pokemon?{}", qs)
                }
            }
            Self::Detail { id } => format!("#/pokemon/{}", id),
            Self::Favorites => "#/favorites".to_string(),
        }
    }

    /// Stable key for per-route session state (scroll positions).
    pub fn session_key(&self) -> String {
        self.to_hash()
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route, adding a history entry.
    ///
    /// Setting `location.hash` fires `hashchange`, which the router listens
    /// to, so the route signal updates without extra plumbing.
    pub fn push(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&self.to_hash());
        }
    }

    /// Navigate to this route without adding a history entry.
    ///
    /// `replaceState` does not fire `hashchange`, so one is dispatched
    /// manually to keep the router in sync.
    pub fn replace(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&self.to_hash()),
                );
            }
            if let Ok(event) = web_sys::Event::new("hashchange") {
                let _ = window.dispatch_event(&event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::filters::SortKey;

    #[test]
    fn test_empty_hash_is_default_list() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::List(FilterState::default()));
        assert_eq!(AppRoute::from_hash("#"), AppRoute::List(FilterState::default()));
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::List(FilterState::default()));
    }

    #[test]
    fn test_list_route_with_params() {
        let route = AppRoute::from_hash("#/pokemon?q=char&types=fire&sort=name&page=2");
        let AppRoute::List(filters) = route else {
            panic!("expected list route");
        };
        assert_eq!(filters.query, "char");
        assert_eq!(filters.type_filters, vec!["fire"]);
        assert_eq!(filters.sort, SortKey::Name);
        assert_eq!(filters.page, 2);
    }

    #[test]
    fn test_detail_route() {
        assert_eq!(
            AppRoute::from_hash("#/pokemon/25"),
            AppRoute::Detail { id: "25".to_string() }
        );
        assert_eq!(AppRoute::Detail { id: "25".to_string() }.to_hash(), "#/pokemon/25");
    }

    #[test]
    fn test_favorites_route() {
        assert_eq!(AppRoute::from_hash("#/favorites"), AppRoute::Favorites);
        assert_eq!(AppRoute::Favorites.to_hash(), "#/favorites");
    }

    #[test]
    fn test_unknown_path_falls_back_to_list() {
        assert_eq!(
            AppRoute::from_hash("#/bogus/route"),
            AppRoute::List(FilterState::default())
        );
    }

    #[test]
    fn test_hash_round_trip_is_lossless() {
        let state = FilterState {
            query: "saur".to_string(),
            type_filters: vec!["grass".to_string(), "poison".to_string()],
            sort: SortKey::Favorites,
            page: 4,
        };
        let route = AppRoute::List(state);
        assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
    }

    #[test]
    fn test_default_list_serializes_bare() {
        assert_eq!(AppRoute::List(FilterState::default()).to_hash(), "#/pokemon");
    }
}
