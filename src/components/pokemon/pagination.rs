//! Previous/next pagination controls.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::FilterState;

stylance::import_crate_style!(css, "src/components/pokemon/pagination.module.css");

#[component]
pub fn Pagination(
    filters: Memo<FilterState>,
    total_pages: Memo<u32>,
    busy: Signal<bool>,
    on_change: Callback<u32>,
) -> impl IntoView {
    let page = Signal::derive(move || filters.get().page);

    view! {
        <nav class=css::pagination aria-label="Pagination">
            <button
                id="page-prev"
                class=css::pageBtn
                prop:disabled=move || page.get() <= 1 || busy.get()
                on:click=move |_| on_change.run(page.get_untracked().saturating_sub(1).max(1))
            >
                <Icon icon=ic::CHEVRON_LEFT />
                " Previous"
            </button>
            <span class=css::pageLabel>
                {move || format!("Page {} of {}", page.get(), total_pages.get())}
            </span>
            <button
                id="page-next"
                class=css::pageBtn
                prop:disabled=move || page.get() >= total_pages.get() || busy.get()
                on:click=move |_| on_change.run(page.get_untracked() + 1)
            >
                "Next "
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        </nav>
    }
}
