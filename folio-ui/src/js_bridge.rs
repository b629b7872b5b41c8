//! Typed wrappers around JS interop via `js_sys::eval()` and `web-sys`.
//!
//! The only DOM state the page touches outside the Dioxus tree is the body
//! scroll lock that accompanies the project overlay. The lock follows
//! acquire/release discipline: acquired when the overlay opens, released on
//! every exit path including component teardown.

use folio_model::CONTACT_PATH;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('folio JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Suppress page scrolling while the project overlay is open.
pub fn lock_scroll() {
    call_js("document.body.style.overflow = 'hidden';");
}

/// Restore page scrolling. Safe to call when no lock is held.
pub fn unlock_scroll() {
    call_js("document.body.style.overflow = 'auto';");
}

/// Absolute URL of the contact endpoint for this deployment.
///
/// The wasm HTTP backend needs an absolute URL, so the fixed path is joined
/// onto the window origin. Falls back to the bare path outside a browser.
pub fn contact_endpoint() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .map(|origin| format!("{}{}", origin, CONTACT_PATH))
        .unwrap_or_else(|| CONTACT_PATH.to_string())
}
