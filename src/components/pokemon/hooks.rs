//! Data-fetching hook for the list page.
//!
//! Bundles the three remote concerns behind one struct of signals:
//!
//! - **Page fetch**: one offset window per current page. Last request wins:
//!   issuing a new page fetch aborts the in-flight one, and a stale result
//!   that still arrives is discarded by a generation check. Aborts are not
//!   errors and never reach the UI.
//! - **Full index**: fetched once per session (sessionStorage-cached) into
//!   the app context; until it arrives the pipeline falls back to the
//!   current page's results (degraded-search mode).
//! - **Type membership**: lazily fetched per distinct type into the app
//!   context, requests for distinct types in parallel, cache hits
//!   short-circuit. Never invalidated within the session.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;

use crate::app::AppContext;
use crate::config::{self, PAGE_SIZE};
use crate::models::{AppRoute, FilterState, PokemonPage, TypeResponse};
use crate::utils::{fetch_json, fetch_json_cached, fetch_json_with_signal};

/// Remote data and fetch status for the list page.
///
/// `Copy` because all fields are signal or callback handles.
#[derive(Clone, Copy)]
pub struct PokemonData {
    /// The currently displayed offset window, once loaded.
    pub page_data: RwSignal<Option<PokemonPage>>,
    /// Whether the page fetch is in flight.
    pub loading: RwSignal<bool>,
    /// Human-readable page fetch error, if any.
    pub error: RwSignal<Option<String>>,
    /// Whether any type membership fetch is in flight.
    pub type_loading: Signal<bool>,
    /// Re-issue the page fetch from page 1 (user-initiated).
    pub retry: Callback<()>,
}

/// List endpoint URL for the filter state's current page.
///
/// Only the page matters here; query/sort/type changes map to the same URL
/// so the fetch effect below, keyed on this value, does not re-fire for
/// them. The offset saturates instead of overflowing on an absurd
/// URL-supplied page number.
fn page_url(filters: &FilterState) -> String {
    let offset = (filters.page.max(1) - 1).saturating_mul(PAGE_SIZE);
    config::list_url(offset, PAGE_SIZE)
}

/// Hook wiring the remote list client to the current filter state.
pub fn use_pokemon_data(filters: Memo<FilterState>) -> PokemonData {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let page_data = RwSignal::new(None::<PokemonPage>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Bumped by retry to force a refetch of the same page.
    let reload = RwSignal::new(0u64);

    // =========================================================================
    // Page fetch (abort-on-supersede)
    // =========================================================================

    let controller_slot = StoredValue::new_local(None::<AbortController>);
    let generation = StoredValue::new(0u64);

    // Memoized so filter changes that keep the page (debounced keystrokes,
    // sort toggles) do not abort and refetch the same window.
    let page_fetch_url = Memo::new(move |_| page_url(&filters.get()));

    Effect::new(move |_| {
        let url = page_fetch_url.get();
        reload.track();

        // Supersede: abort whatever is still in flight. Aborting a settled
        // request is a no-op.
        controller_slot.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.abort();
            }
        });
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        controller_slot.set_value(controller);

        let my_generation = generation.get_value() + 1;
        generation.set_value(my_generation);

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            let result = fetch_json_with_signal::<PokemonPage>(&url, signal.as_ref()).await;

            // A newer request owns the signals now.
            if generation.get_value() != my_generation {
                return;
            }

            loading.set(false);
            match result {
                Ok(window) => page_data.set(Some(window)),
                Err(e) if e.is_abort() => {}
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    // =========================================================================
    // Full index (once per session)
    // =========================================================================

    let index_requested = StoredValue::new(false);

    Effect::new(move |_| {
        if index_requested.get_value() || ctx.all_list.with_untracked(|l| l.is_some()) {
            return;
        }
        index_requested.set_value(true);

        spawn_local(async move {
            match fetch_json_cached::<PokemonPage>(
                &config::full_list_url(),
                config::session::FULL_LIST_CACHE_KEY,
            )
            .await
            {
                Ok(index) => ctx.all_list.set(Some(index.results)),
                // Best-effort: without the index, search degrades to the
                // current page.
                Err(_) => {}
            }
        });
    });

    // =========================================================================
    // Type membership (lazy, parallel, memoized)
    // =========================================================================

    let inflight_types = StoredValue::new(std::collections::HashSet::<String>::new());

    Effect::new(move |_| {
        for type_name in filters.get().type_filters {
            let cached = ctx
                .type_membership
                .with_untracked(|m| m.contains_key(&type_name));
            let fetching = inflight_types.with_value(|s| s.contains(&type_name));
            if cached || fetching {
                continue;
            }

            inflight_types.update_value(|s| {
                s.insert(type_name.clone());
            });
            ctx.pending_type_loads.update(|n| *n += 1);

            spawn_local(async move {
                let result = fetch_json::<TypeResponse>(&config::type_url(&type_name)).await;

                inflight_types.update_value(|s| {
                    s.remove(&type_name);
                });
                ctx.pending_type_loads.update(|n| *n = n.saturating_sub(1));

                match result {
                    Ok(response) => ctx.type_membership.update(|m| {
                        m.insert(type_name, response.member_names());
                    }),
                    Err(e) if e.is_abort() => {}
                    Err(e) => {
                        // Fail-closed filtering covers the gap; the user can
                        // re-toggle the chip to retry.
                        web_sys::console::warn_1(
                            &format!("type membership fetch failed: {}", e).into(),
                        );
                    }
                }
            });
        }
    });

    let type_loading = Signal::derive(move || ctx.types_loading());

    let retry = Callback::new(move |_: ()| {
        reload.update(|n| *n += 1);
        AppRoute::List(filters.get_untracked().with_page(1)).replace();
    });

    PokemonData {
        page_data,
        loading,
        error,
        type_loading,
        retry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortKey;

    #[test]
    fn test_page_url_depends_only_on_page() {
        let base = FilterState::default().with_page(2);
        let url = page_url(&base);
        // Same page, different filters: same URL, so the memoized fetch key
        // does not change on a keystroke or a sort toggle.
        assert_eq!(url, page_url(&FilterState { query: "pika".into(), ..base.clone() }));
        assert_eq!(url, page_url(&FilterState { sort: SortKey::Name, ..base.clone() }));
        assert_eq!(
            url,
            page_url(&FilterState { type_filters: vec!["fire".into()], ..base })
        );
    }

    #[test]
    fn test_page_url_offset_window() {
        assert!(page_url(&FilterState::default()).contains("offset=0"));
        assert!(page_url(&FilterState::default().with_page(3)).contains("offset=48"));
    }

    #[test]
    fn test_page_url_extreme_page_saturates() {
        let url = page_url(&FilterState::default().with_page(u32::MAX));
        assert!(url.contains(&format!("offset={}", u32::MAX)));
    }
}
