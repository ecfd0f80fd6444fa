//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`NamedResource`], [`PokemonPage`], [`PokemonDetail`], [`TypeResponse`] - API payloads
//! - [`Favorite`] - persisted favorites entries
//! - [`FilterState`], [`SortKey`] - URL-mirrored list state
//! - [`AppRoute`] - hash-based navigation

mod favorites;
mod filters;
mod pokemon;
mod route;

pub use favorites::{Favorite, toggled};
pub use filters::{FilterState, SortKey};
pub use pokemon::{NamedResource, PokemonDetail, PokemonPage, TypeResponse};
pub use route::AppRoute;
