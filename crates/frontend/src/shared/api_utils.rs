//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

/// Get the base URL for API requests
///
/// The analysis backend is served from the same origin as the page.
///
/// # Returns
/// - Origin like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available (non-browser context)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/ia-analise/semanal");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
