//! `storefront-session` — lightweight user identity.
//!
//! Deliberately thin: the cart and listing never read the session, and
//! anonymous carts are allowed. State is memory-resident only, reset on
//! reload.

use serde::{Deserialize, Serialize};

/// Signed-in user profile as served by the auth endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
}

/// Current user identity, nullable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<UserProfile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, profile: UserProfile) {
        self.current = Some(profile);
    }

    pub fn sign_out(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
