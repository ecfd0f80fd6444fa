//! Card for a single list entry.

use leptos::prelude::*;

use super::favorite_toggle::FavoriteToggle;
use crate::config::artwork_url;
use crate::models::{AppRoute, NamedResource};
use crate::utils::format::{capitalize, format_dex_number};

stylance::import_crate_style!(css, "src/components/pokemon/card.module.css");

#[component]
pub fn PokemonCard(entry: NamedResource) -> impl IntoView {
    let id = entry.id();
    let name = entry.name.clone();
    let display_name = capitalize(&name);
    let aria_label = format!("View details for {}", display_name);
    let detail_href = AppRoute::Detail { id: id.to_string() }.to_hash();

    view! {
        <div class=css::card role="listitem">
            <a
                class=css::cardLink
                href=detail_href
                aria-label=aria_label
            >
                <img
                    class=css::cardImg
                    src=artwork_url(id)
                    alt=format!("{} artwork", name)
                    loading="lazy"
                />
                <div class=css::cardBody>
                    <span class=css::dex>{format_dex_number(id)}</span>
                    <h3 class=css::cardTitle>{display_name}</h3>
                </div>
            </a>
            <div class=css::favSlot>
                <FavoriteToggle id=id.to_string() name=name />
            </div>
        </div>
    }
}
