//! List and detail views for the catalog.
//!
//! - [`PokemonListPage`] - card grid with chips, sorting, pagination
//! - [`PokemonDetailPage`] - single-entity detail view
//! - [`hooks`] - data fetching (supersession, index cache, type membership)

mod card;
mod detail;
mod favorite_toggle;
pub mod hooks;
mod list_page;
mod pagination;
mod type_chips;

pub use detail::PokemonDetailPage;
pub use favorite_toggle::FavoriteToggle;
pub use list_page::PokemonListPage;
