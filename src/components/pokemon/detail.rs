//! Detail view for a single entity.
//!
//! Fetches the per-entity record on mount and renders artwork, dex number,
//! physical attributes, type badges, and base stats. The favorite toggle in
//! the header shares the same store as the list cards.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::favorite_toggle::FavoriteToggle;
use crate::components::icons as ic;
use crate::config;
use crate::models::PokemonDetail;
use crate::utils::fetch_json;
use crate::utils::format::{capitalize, format_dex_number, format_height, format_weight};

stylance::import_crate_style!(css, "src/components/pokemon/detail.module.css");

#[component]
pub fn PokemonDetailPage(id: String) -> impl IntoView {
    let detail = RwSignal::new(None::<PokemonDetail>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // The component remounts per id (the router recreates it on route
    // change), so a single fetch on mount is enough.
    let url = config::detail_url(&id);
    Effect::new(move |_| {
        let url = url.clone();
        spawn_local(async move {
            match fetch_json::<PokemonDetail>(&url).await {
                Ok(record) => detail.set(Some(record)),
                Err(e) if e.is_abort() => {}
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    view! {
        <div class=css::wrapper>
            <a class=css::back href="#/pokemon">
                <Icon icon=ic::BACK />
                " Back to list"
            </a>

            <Show when=move || loading.get()>
                <div class=css::loading>"Loading details…"</div>
            </Show>

            {move || error.get().map(|message| view! {
                <div role="alert" class=css::error>{message}</div>
            })}

            {move || detail.get().map(|record| view! { <DetailCard record=record /> })}
        </div>
    }
}

#[component]
fn DetailCard(record: PokemonDetail) -> impl IntoView {
    let image = record.image_url();
    let name = record.name.clone();
    let display_name = capitalize(&name);

    view! {
        <div class=css::card>
            {image.map(|src| view! {
                <img class=css::image src=src alt=format!("{} artwork", name) />
            })}

            <div class=css::body>
                <div class=css::headerRow>
                    <span class=css::dex>{format_dex_number(record.id)}</span>
                    <FavoriteToggle id=record.id.to_string() name=record.name.clone() />
                </div>

                <h1 class=css::title>{display_name}</h1>

                <div class=css::meta>
                    <span>{format!("Height: {}", format_height(record.height))}</span>
                    <span>{format!("Weight: {}", format_weight(record.weight))}</span>
                </div>

                <div class=css::types>
                    {record.types.iter().map(|slot| {
                        let data_type = slot.type_info.name.clone();
                        let label = slot.type_info.name.clone();
                        view! {
                            <span class=css::typeBadge attr:data-type=data_type>
                                {label}
                            </span>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div>
                    <h3>"Base Stats"</h3>
                    <ul class=css::stats>
                        {record.stats.iter().map(|slot| view! {
                            <li>
                                <span class=css::statName>{slot.stat.name.clone()}</span>
                                <span class=css::statVal>{slot.base_stat}</span>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
