//! Favorites store backed by localStorage.
//!
//! The store is the sole writer of the persisted favorites mapping. Readers
//! go through the store's methods, which track the inner signal, instead of
//! touching storage or a global event bus; cross-tab changes arrive via the
//! browser `storage` event, wired up once in
//! [`FavoritesStore::listen_for_external_changes`].
//!
//! Toggling is optimistic: the signal is updated first, then the full list
//! is serialized and written back in a single store call. If the write
//! fails the signal is rolled back, so in-memory state never drifts ahead
//! of a persist that did not happen. Corrupt or missing payloads degrade to
//! an empty mapping.

use std::collections::HashSet;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::config::storage::FAVORITES_KEY;
use super::error::StorageError;
use crate::models::{Favorite, toggled};
use crate::utils::dom;

/// Signal-backed favorites store.
///
/// `Copy` because the only field is a Leptos signal handle.
#[derive(Clone, Copy)]
pub struct FavoritesStore {
    entries: RwSignal<Vec<Favorite>>,
}

impl FavoritesStore {
    /// Create a store seeded from localStorage.
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Self::load()),
        }
    }

    /// Read the persisted list. Missing storage or corrupt JSON yields an
    /// empty mapping rather than an error.
    fn load() -> Vec<Favorite> {
        let Some(storage) = dom::local_storage() else {
            return Vec::new();
        };
        let Ok(Some(raw)) = storage.get_item(FAVORITES_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Write the full list back in a single serialize+store call.
    fn persist(list: &[Favorite]) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        let json = serde_json::to_string(list).map_err(|_| StorageError::Serialization)?;
        storage
            .set_item(FAVORITES_KEY, &json)
            .map_err(|_| StorageError::WriteFailed)
    }

    /// All favorites in persisted insertion order.
    ///
    /// Reads the inner signal, so calls from a reactive context re-run
    /// when the list changes.
    pub fn list(&self) -> Vec<Favorite> {
        self.entries.get()
    }

    /// Whether the entity id is currently favorited.
    pub fn has(&self, id: &str) -> bool {
        self.entries.with(|entries| entries.iter().any(|f| f.id == id))
    }

    /// Favorite names as a set, for the search pipeline.
    pub fn names(&self) -> HashSet<String> {
        self.entries
            .with(|entries| entries.iter().map(|f| f.name.clone()).collect())
    }

    /// Toggle an entity in or out of the favorites.
    ///
    /// Storage is re-read before the write, so two toggles in the same
    /// execution context never lose each other's update. Across tabs the
    /// policy stays last write wins.
    pub fn toggle(&self, id: &str, name: &str) {
        let before = self.entries.get_untracked();
        let next = toggled(Self::load(), id, name);
        self.entries.set(next.clone());

        if let Err(err) = Self::persist(&next) {
            web_sys::console::warn_1(&format!("favorites not persisted: {}", err).into());
            self.entries.set(before);
        }
    }

    /// Re-read storage into the signal (used after external changes).
    pub fn reload(&self) {
        self.entries.set(Self::load());
    }

    /// Reload whenever another tab writes the favorites key.
    ///
    /// The closure is intentionally leaked: the store lives as long as the
    /// app.
    pub fn listen_for_external_changes(&self) {
        let store = *self;
        let closure = Closure::wrap(Box::new(move |event: web_sys::StorageEvent| {
            if event.key().as_deref() == Some(FAVORITES_KEY) {
                store.reload();
            }
        }) as Box<dyn Fn(web_sys::StorageEvent)>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}
