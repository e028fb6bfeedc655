//! Authentication snapshot shared between the auth provider and the
//! widgets that read it.
//!
//! The provider itself (sign-in / sign-out against the identity
//! service) lives in `showroom-io`; components receive this read-only
//! snapshot and never mutate it. The upload widget reads only
//! [`AuthState::signed_in`] as a gate.

use serde::{Deserialize, Serialize};

/// Read-only view of the current authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Whether a user is currently signed in.
    pub signed_in: bool,
    /// Display name of the signed-in user, if any.
    pub username: Option<String>,
}

impl AuthState {
    /// Snapshot for a signed-in user.
    #[must_use]
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            signed_in: true,
            username: Some(username.into()),
        }
    }

    /// Snapshot for the signed-out state.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_signed_out() {
        let state = AuthState::default();
        assert!(!state.signed_in);
        assert!(state.username.is_none());
    }

    #[test]
    fn signed_in_snapshot_carries_the_username() {
        let state = AuthState::signed_in("Sipha");
        assert!(state.signed_in);
        assert_eq!(state.username.as_deref(), Some("Sipha"));
    }
}
