//! Per-session UI state: scroll restoration and focus memory.
//!
//! Scroll positions are kept in a sessionStorage map keyed by route, so
//! back/forward navigation returns the user to where they left off. The id
//! of the last focused control is remembered across page changes the same
//! way. Both are best-effort; missing or corrupt data degrades to a no-op.

use std::collections::HashMap;

use crate::config::session::{LAST_FOCUSED_KEY, SCROLL_POSITIONS_KEY};
use crate::utils::{cache, dom};

/// Save the current scroll offset under the given route key.
pub fn save_scroll_position(route_key: &str) {
    let mut positions: HashMap<String, f64> = cache::get(SCROLL_POSITIONS_KEY).unwrap_or_default();
    positions.insert(route_key.to_string(), dom::scroll_y());
    let _ = cache::set(SCROLL_POSITIONS_KEY, &positions);
}

/// Restore the saved scroll offset for the route key, if one exists.
pub fn restore_scroll_position(route_key: &str) {
    let positions: HashMap<String, f64> = match cache::get(SCROLL_POSITIONS_KEY) {
        Some(map) => map,
        None => return,
    };
    if let Some(y) = positions.get(route_key) {
        dom::scroll_to(*y);
    }
}

/// Remember the id of the currently focused element, if it has one.
pub fn save_last_focused() {
    if let Some(id) = dom::active_element_id() {
        if let Some(storage) = dom::session_storage() {
            let _ = storage.set_item(LAST_FOCUSED_KEY, &id);
        }
    }
}

/// Re-focus the remembered element. Returns whether focus was restored.
pub fn restore_last_focused() -> bool {
    let Some(storage) = dom::session_storage() else {
        return false;
    };
    let Ok(Some(id)) = storage.get_item(LAST_FOCUSED_KEY) else {
        return false;
    };
    dom::focus_element_by_id(&id)
}
