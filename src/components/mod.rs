//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`header`] - Brand, navigation, and search bar
//! - [`pokemon`] - List and detail views
//! - [`favorites`] - Favorites overview
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod favorites;
pub mod header;
pub mod icons;
pub mod pokemon;
pub mod router;
mod search_bar;

pub use router::AppRouter;
