//! Favorites overview page.
//!
//! Renders the persisted favorites in insertion order, linking each entry
//! to its detail view. The toggle on each card removes the entry in place.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::pokemon::FavoriteToggle;
use crate::config::artwork_url;
use crate::models::{AppRoute, Favorite};
use crate::utils::format::capitalize;

stylance::import_crate_style!(css, "src/components/favorites/favorites.module.css");

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let store = ctx.favorites;

    view! {
        <div class=css::wrapper>
            <h1 class=css::title>"Favorites"</h1>

            <Show
                when=move || !store.list().is_empty()
                fallback=|| view! { <p class=css::empty>"No favorites yet."</p> }
            >
                <ul class=css::grid>
                    <For
                        each=move || store.list()
                        key=|favorite| favorite.id.clone()
                        children=move |favorite| view! { <FavoriteCard favorite=favorite /> }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn FavoriteCard(favorite: Favorite) -> impl IntoView {
    let numeric_id: u32 = favorite.id.parse().unwrap_or(0);
    let href = AppRoute::Detail { id: favorite.id.clone() }.to_hash();
    let display_name = capitalize(&favorite.name);

    view! {
        <li class=css::card>
            <a class=css::cardLink href=href>
                <img
                    class=css::cardImg
                    src=artwork_url(numeric_id)
                    alt=format!("{} artwork", favorite.name)
                    loading="lazy"
                />
                <div class=css::cardBody>
                    <h3 class=css::cardTitle>{display_name}</h3>
                </div>
            </a>
            <div class=css::favSlot>
                <FavoriteToggle id=favorite.id.clone() name=favorite.name.clone() />
            </div>
        </li>
    }
}
