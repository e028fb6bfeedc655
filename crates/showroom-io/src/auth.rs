//! Authentication against the Puter identity service.
//!
//! The landing page never implements an auth protocol itself; it talks
//! to the global `puter.auth` object injected by the Puter `<script>`
//! tag, reached through `js_sys::Reflect`. [`AuthContext`] wraps the
//! bridge in a Dioxus context so components read one shared
//! [`AuthState`] snapshot and the upload widget can use `signed_in` as
//! a plain gate.

use dioxus::prelude::*;
use js_sys::{Function, Promise, Reflect};
use showroom_core::AuthState;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Errors that can occur when calling the auth bridge.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The Puter script is absent or does not expose `puter.auth`.
    #[error("auth bridge unavailable: {0}")]
    BridgeMissing(String),

    /// A bridge call or its returned promise failed.
    #[error("auth call failed: {0}")]
    JsCall(String),
}

impl From<JsValue> for AuthError {
    fn from(value: JsValue) -> Self {
        Self::JsCall(format!("{value:?}"))
    }
}

/// Locate the global `puter.auth` object.
fn auth_object() -> Result<JsValue, AuthError> {
    let window =
        web_sys::window().ok_or_else(|| AuthError::BridgeMissing("no global window".into()))?;
    let puter = Reflect::get(&window, &JsValue::from_str("puter"))?;
    if puter.is_undefined() || puter.is_null() {
        return Err(AuthError::BridgeMissing("puter script not loaded".into()));
    }
    let auth = Reflect::get(&puter, &JsValue::from_str("auth"))?;
    if auth.is_undefined() || auth.is_null() {
        return Err(AuthError::BridgeMissing("puter.auth is missing".into()));
    }
    Ok(auth)
}

/// Call a zero-argument `puter.auth` method and await its promise.
async fn call_auth(method: &str) -> Result<JsValue, AuthError> {
    let auth = auth_object()?;
    let func: Function = Reflect::get(&auth, &JsValue::from_str(method))?
        .dyn_into()
        .map_err(|_| AuthError::BridgeMissing(format!("puter.auth.{method} is not a function")))?;
    let promise: Promise = func
        .call0(&auth)?
        .dyn_into()
        .map_err(|_| AuthError::JsCall(format!("puter.auth.{method} did not return a promise")))?;
    Ok(JsFuture::from(promise).await?)
}

/// Start the interactive sign-in flow.
///
/// # Errors
///
/// Returns [`AuthError::BridgeMissing`] when the Puter script is
/// absent and [`AuthError::JsCall`] when the flow is rejected (e.g.,
/// the user dismisses the dialog).
pub async fn request_sign_in() -> Result<(), AuthError> {
    call_auth("signIn").await.map(|_| ())
}

/// End the current session.
///
/// # Errors
///
/// Same failure modes as [`request_sign_in`].
pub async fn request_sign_out() -> Result<(), AuthError> {
    call_auth("signOut").await.map(|_| ())
}

/// Fetch the current user's name, or `None` when no session exists.
///
/// The identity service rejects `getUser` for anonymous visitors, so a
/// rejected promise maps to `Ok(None)` rather than an error.
///
/// # Errors
///
/// Returns [`AuthError::BridgeMissing`] only when the bridge itself is
/// absent or malformed.
pub async fn fetch_current_user() -> Result<Option<String>, AuthError> {
    match call_auth("getUser").await {
        Ok(user) => Ok(Reflect::get(&user, &JsValue::from_str("username"))
            .ok()
            .and_then(|v| v.as_string())),
        Err(AuthError::JsCall(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Shared authentication context for the component tree.
///
/// Components read the current [`AuthState`] through [`snapshot`] and
/// trigger the capability actions (`sign_in`, `sign_out`, `refresh`);
/// the state signal itself is never handed out mutably.
///
/// [`snapshot`]: AuthContext::snapshot
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: Signal<AuthState>,
}

impl AuthContext {
    /// Install the context at the component tree root and kick off an
    /// initial refresh to pick up an existing session.
    #[must_use]
    pub fn use_provider() -> Self {
        let state = use_signal(AuthState::default);
        let ctx = use_context_provider(|| Self { state });
        use_future(move || async move {
            let mut ctx = ctx;
            ctx.refresh().await;
        });
        ctx
    }

    /// Current authentication snapshot.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.read().clone()
    }

    /// Whether a user is currently signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.state.read().signed_in
    }

    /// Re-query the identity service and update the snapshot.
    ///
    /// Bridge failures log a console warning and resolve to the
    /// signed-out state; the page stays usable for anonymous visitors.
    pub async fn refresh(&mut self) -> bool {
        match fetch_current_user().await {
            Ok(Some(username)) => {
                self.state.set(AuthState::signed_in(username));
                true
            }
            Ok(None) => {
                self.state.set(AuthState::signed_out());
                false
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("auth: {e}").into());
                self.state.set(AuthState::signed_out());
                false
            }
        }
    }

    /// Run the interactive sign-in flow, then refresh the snapshot.
    ///
    /// Returns whether a user is signed in afterwards.
    pub async fn sign_in(&mut self) -> bool {
        if let Err(e) = request_sign_in().await {
            web_sys::console::warn_1(&format!("auth: {e}").into());
            return false;
        }
        self.refresh().await
    }

    /// End the current session and reset the snapshot.
    ///
    /// Returns whether the sign-out completed.
    pub async fn sign_out(&mut self) -> bool {
        if let Err(e) = request_sign_out().await {
            web_sys::console::warn_1(&format!("auth: {e}").into());
            return false;
        }
        self.state.set(AuthState::signed_out());
        true
    }
}
