//! Core application logic, independent of any specific view.
//!
//! - [`error`] - Domain error types ([`FetchError`], [`StorageError`])
//! - [`favorites`] - localStorage-backed favorites store
//! - [`search`] - Pure filter/sort pipeline and pagination math

pub mod error;
pub mod favorites;
pub mod search;

pub use error::{FetchError, StorageError};
pub use favorites::FavoritesStore;
