//! Network fetching utilities with cancellation support.
//!
//! Provides async JSON fetch functions over the browser Fetch API. Requests
//! can carry an [`AbortSignal`]; a rejection caused by aborting is
//! classified as [`FetchError::Aborted`] so callers can swallow
//! supersession instead of treating it as a failure. Aborting an
//! already-settled request is a no-op at the browser level.

use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, RequestMode, Response};

use crate::core::FetchError;
use crate::utils::cache;

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    fetch_json_with_signal(url, None).await
}

/// Fetch and parse JSON, cancellable through the given abort signal.
pub async fn fetch_json_with_signal<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, FetchError> {
    let text = fetch_url(url, signal).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParse(e.to_string()))
}

/// Fetch and parse JSON with sessionStorage caching.
///
/// Tries to retrieve data from session cache first. If not found, fetches
/// from network and stores in cache for the current session.
pub async fn fetch_json_cached<T>(url: &str, cache_key: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned + Serialize,
{
    if let Some(cached) = cache::get::<T>(cache_key) {
        return Ok(cached);
    }

    let data = fetch_json::<T>(url).await?;

    // Caching is best-effort.
    let _ = cache::set(cache_key, &data);

    Ok(data)
}

/// Fetch text from a URL using the Fetch API.
async fn fetch_url(url: &str, signal: Option<&AbortSignal>) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts.set_signal(signal);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(classify_rejection)?;

    let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidBody)?;

    if !resp.ok() {
        return Err(FetchError::Http(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseRead)?)
        .await
        .map_err(|_| FetchError::ResponseRead)?;

    text.as_string().ok_or(FetchError::InvalidBody)
}

/// Map a rejected fetch promise to a [`FetchError`].
///
/// The Fetch API rejects with a DOM `AbortError` when the request's signal
/// fires; everything else is a transport-level failure.
fn classify_rejection(value: JsValue) -> FetchError {
    if let Some(exception) = value.dyn_ref::<web_sys::DomException>()
        && exception.name() == "AbortError"
    {
        return FetchError::Aborted;
    }
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "Unknown error".to_string());
    FetchError::Network(message)
}
