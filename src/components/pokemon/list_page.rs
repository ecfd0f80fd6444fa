//! Main list page.
//!
//! Wires the URL-derived filter state, the remote data hook, and the pure
//! search pipeline into the card grid with type chips, sort select,
//! pagination, and error/loading states.

use leptos::prelude::*;

use super::card::PokemonCard;
use super::hooks::use_pokemon_data;
use super::pagination::Pagination;
use super::type_chips::TypeChips;
use crate::app::AppContext;
use crate::config::PAGE_SIZE;
use crate::core::search;
use crate::models::{AppRoute, FilterState, NamedResource, SortKey};
use crate::utils::session;

stylance::import_crate_style!(css, "src/components/pokemon/list_page.module.css");

#[component]
pub fn PokemonListPage(filters: Memo<FilterState>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let data = use_pokemon_data(filters);

    // Degraded-search mode: the full index has not arrived, so the search
    // universe is just the current offset window.
    let degraded = Signal::derive(move || ctx.all_list.with(|l| l.is_none()));

    let filtered = Memo::new(move |_| {
        let f = filters.get();
        let favorite_names = ctx.favorites.names();
        let membership = ctx.type_membership.get();
        let membership_loading = ctx.types_loading();

        let source: Vec<NamedResource> = match ctx.all_list.get() {
            Some(index) => index,
            None => data
                .page_data
                .with(|p| p.as_ref().map(|p| p.results.clone()).unwrap_or_default()),
        };

        search::derive(
            &source,
            &f.query,
            &f.type_filters,
            f.sort,
            &favorite_names,
            &membership,
            membership_loading,
        )
    });

    let total_pages = Memo::new(move |_| {
        if degraded.get() {
            // Without the index the server still paginates the raw list.
            data.page_data
                .with(|p| p.as_ref().map(|p| search::total_pages(p.count as usize, PAGE_SIZE)))
                .unwrap_or(1)
        } else {
            search::total_pages(filtered.with(|l| l.len()), PAGE_SIZE)
        }
    });

    let visible = Memo::new(move |_| {
        if degraded.get() {
            // Already a single offset window.
            filtered.get()
        } else {
            let page = filters.get().page;
            filtered.with(|list| search::page_window(list, page, PAGE_SIZE).to_vec())
        }
    });

    // Clamp out-of-range pages once results are known (total pages shrink
    // when filters narrow). Presentation-layer concern; the pipeline never
    // serves a silently empty page.
    Effect::new(move |_| {
        let f = filters.get();
        let total = total_pages.get();
        let settled = !data.loading.get()
            && !data.type_loading.get()
            && (ctx.all_list.with(|l| l.is_some()) || data.page_data.with(|p| p.is_some()));
        let clamped = search::clamp_page(f.page, total);
        if settled && clamped != f.page {
            AppRoute::List(f.with_page(clamped)).replace();
        }
    });

    // Returning focus to the control that triggered a page change.
    Effect::new(move |previous: Option<u32>| {
        let page = filters.get().page;
        if let Some(previous) = previous
            && previous != page
        {
            session::restore_last_focused();
        }
        page
    });

    let handle_page_change = move |new_page: u32| {
        let f = filters.get_untracked();
        session::save_scroll_position(&AppRoute::List(f.clone()).session_key());
        session::save_last_focused();
        AppRoute::List(f.with_page(new_page)).push();
        crate::utils::dom::scroll_to_top();
    };
    let on_page_change = Callback::new(handle_page_change);

    let handle_sort_change = move |ev: leptos::ev::Event| {
        let sort = SortKey::parse(&event_target_value(&ev));
        AppRoute::List(filters.get_untracked().with_sort(sort)).push();
    };

    let show_empty = Signal::derive(move || {
        !data.loading.get() && !data.type_loading.get() && visible.with(|v| v.is_empty())
    });

    view! {
        <div class=css::wrapper>
            // Filters and sorting
            <div class=css::filtersBar>
                <TypeChips filters=filters />

                <div class=css::sortGroup>
                    <label for="sortSelect">"Sort by:"</label>
                    <select
                        id="sortSelect"
                        class=css::select
                        prop:value=move || filters.get().sort.as_str()
                        on:change=handle_sort_change
                    >
                        <option value="number">"Pokédex Number"</option>
                        <option value="name">"Name (A–Z)"</option>
                        <option value="name-desc">"Name (Z–A)"</option>
                        <option value="favorites">"Favorites"</option>
                    </select>
                </div>
            </div>

            // Loading and error states
            <Show when=move || data.type_loading.get()>
                <div class=css::skeleton>"Loading type filter…"</div>
            </Show>
            {move || data.error.get().map(|message| view! {
                <div role="alert" class=css::error>
                    {message}
                    <button
                        class=css::retry
                        on:click=move |_| data.retry.run(())
                    >
                        "Retry"
                    </button>
                </div>
            })}

            // Card grid
            <Show when=move || data.loading.get() && visible.with(|v| v.is_empty())>
                <div class=css::skeleton>"Loading…"</div>
            </Show>
            <div class=css::grid role="list" aria-label="Pokémon list">
                <For
                    each=move || visible.get()
                    key=|entry| entry.name.clone()
                    children=move |entry| view! { <PokemonCard entry=entry /> }
                />
            </div>
            <Show when=move || show_empty.get()>
                <p class=css::empty>"No Pokémon match the current filters."</p>
            </Show>

            <Pagination
                filters=filters
                total_pages=total_pages
                busy=data.type_loading
                on_change=on_page_change
            />
        </div>
    }
}
