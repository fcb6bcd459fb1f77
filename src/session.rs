//! Session Gate
//!
//! Two-state login gate persisted in the `isLoggedIn` slot.
//!
//! ```text
//!                  login(ok)
//!   Unauthenticated ─────────▶ Authenticated
//!        ▲    │                      │
//!        │    └─ login(bad) ─┐       │
//!        │         (stays)   │       │
//!        └───────────────────┴─ logout()
//! ```
//!
//! NOTE: the credentials are compiled-in plaintext and the flag is an
//! unsigned string in local storage. This gate keeps honest users on the
//! login screen and nothing more.

use std::sync::Arc;

use crate::error::Result;
use crate::store::{SlotStore, LOGGED_IN_SLOT};

/// Fixed demo username
pub const ADMIN_USERNAME: &str = "admin";

/// Fixed demo password
pub const ADMIN_PASSWORD: &str = "1234";

/// Inline message shown after a rejected login
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password.";

const LOGGED_IN_VALUE: &str = "true";

/// Gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

/// Outcome of a login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
}

/// Reads and writes the persisted session flag
pub struct SessionGate<S> {
    store: Arc<S>,
}

impl<S: SlotStore> SessionGate<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Current state, read from storage on every call
    pub fn state(&self) -> Result<SessionState> {
        let flag = self.store.get(LOGGED_IN_SLOT)?;
        Ok(if flag.as_deref() == Some(LOGGED_IN_VALUE) {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        })
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.state()? == SessionState::Authenticated)
    }

    /// Compare against the fixed pair (exact, case-sensitive)
    ///
    /// On success the flag is persisted; a rejection writes nothing.
    pub fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            self.store.set(LOGGED_IN_SLOT, LOGGED_IN_VALUE)?;
            tracing::info!(username, "Login accepted");
            Ok(LoginOutcome::Accepted)
        } else {
            tracing::warn!(username, "Login rejected");
            Ok(LoginOutcome::Rejected)
        }
    }

    /// Clear the persisted flag
    pub fn logout(&self) -> Result<()> {
        self.store.remove(LOGGED_IN_SLOT)?;
        tracing::info!("Logged out");
        Ok(())
    }
}
