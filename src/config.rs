//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application:
//! upstream API endpoints, pagination sizes, storage keys, and UI settings.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "webdex";

// =============================================================================
// Upstream API Configuration
// =============================================================================

/// Base URL of the PokéAPI REST endpoints.
pub const API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Base URL for official artwork images, keyed by numeric entity id.
pub const ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Number of entries shown per page.
pub const PAGE_SIZE: u32 = 24;

/// Limit used when fetching the full index as the search universe.
/// Large enough to cover every entry the API currently exposes.
pub const FULL_LIST_LIMIT: u32 = 2000;

/// Build the paginated list endpoint URL for an offset window.
pub fn list_url(offset: u32, limit: u32) -> String {
    format!("{}/pokemon?offset={}&limit={}", API_BASE_URL, offset, limit)
}

/// Build the full-index URL used as the search universe.
pub fn full_list_url() -> String {
    format!("{}/pokemon?limit={}", API_BASE_URL, FULL_LIST_LIMIT)
}

/// Build the per-type membership endpoint URL.
pub fn type_url(type_name: &str) -> String {
    format!("{}/type/{}", API_BASE_URL, type_name)
}

/// Build the per-entity detail endpoint URL.
pub fn detail_url(id: &str) -> String {
    format!("{}/pokemon/{}", API_BASE_URL, id)
}

/// Build the official artwork image URL for an entity id.
pub fn artwork_url(id: u32) -> String {
    format!("{}/{}.png", ARTWORK_BASE_URL, id)
}

// =============================================================================
// Type Filter Configuration
// =============================================================================

/// All selectable type categories, in chip display order.
pub const KNOWN_TYPES: &[&str] = &[
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

// =============================================================================
// Search Configuration
// =============================================================================

/// Debounce delay applied to search input before the URL is updated.
pub const SEARCH_DEBOUNCE_MS: u32 = 200;

// =============================================================================
// Storage Configuration
// =============================================================================

/// localStorage keys for persisted state.
pub mod storage {
    /// Favorites mapping (JSON array of `{id, name}`).
    pub const FAVORITES_KEY: &str = "favorites";
}

/// sessionStorage keys for per-session state.
pub mod session {
    /// Scroll position map (route key → vertical offset).
    pub const SCROLL_POSITIONS_KEY: &str = "scrollPositions";
    /// Element id of the last focused control.
    pub const LAST_FOCUSED_KEY: &str = "lastFocusedElement";
    /// Session cache for the full entity index.
    pub const FULL_LIST_CACHE_KEY: &str = "pokemon_index_cache";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_window() {
        assert_eq!(
            list_url(48, 24),
            "https://pokeapi.co/api/v2/pokemon?offset=48&limit=24"
        );
    }

    #[test]
    fn test_type_and_detail_urls() {
        assert_eq!(type_url("fire"), "https://pokeapi.co/api/v2/type/fire");
        assert_eq!(detail_url("25"), "https://pokeapi.co/api/v2/pokemon/25");
    }

    #[test]
    fn test_artwork_url() {
        assert!(artwork_url(1).ends_with("/official-artwork/1.png"));
    }
}
