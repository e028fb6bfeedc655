//! Lightweight Simple Analytics event tracking.
//!
//! Calls the global `sa_event` function injected by the Simple
//! Analytics `<script>` tag.  All functions silently no-op when the
//! script is absent (e.g., blocked by an ad-blocker or during tests).
//!
//! Event names follow Simple Analytics conventions: lowercase
//! alphanumeric with underscores, max 200 characters.

use wasm_bindgen::prelude::*;

/// Fire a Simple Analytics custom event.
///
/// Silently does nothing when the analytics script is absent.
fn track_event(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str("sa_event")) else {
        return;
    };
    if !func.is_function() {
        return;
    }
    let func: js_sys::Function = func.unchecked_into();
    let _ = func.call1(&JsValue::NULL, &JsValue::from_str(name));
}

/// Record a completed upload cycle (progress ramp finished and the
/// completion callback delivered its payload).
pub fn track_upload_complete() {
    track_event("upload_complete");
}

/// Record an authentication action (e.g., `"sign_in"`, `"sign_out"`).
///
/// Fires an event named `auth_<action>`.
///
/// # Panics (debug only)
///
/// Debug-asserts that `action` is lowercase alphanumeric/underscore.
pub fn track_auth(action: &str) {
    debug_assert!(
        action
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'),
        "event action must be lowercase alphanumeric or underscore, got: {action:?}"
    );
    track_event(&format!("auth_{action}"));
}
