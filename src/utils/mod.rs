//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`], [`fetch_json_with_signal`], [`fetch_json_cached`] - Network fetching
//! - [`cache`] - sessionStorage JSON cache
//! - [`dom`] - Safe browser API access
//! - [`format`] - Display formatting helpers
//! - [`session`] - Scroll restoration and focus memory

pub mod cache;
pub mod dom;
mod fetch;
pub mod format;
pub mod session;

pub use fetch::{fetch_json, fetch_json_cached, fetch_json_with_signal};
