//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the header, and authenticated pages read this state through
//! the [`AuthContext`] provided at the application root. Nothing else writes
//! the session store.
//!
//! LIFECYCLE
//! =========
//! `Initializing` until the one-time restoration runs, then `Anonymous` or
//! `Authenticated`. Only `login`/`logout` move between the last two.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::{Session, SessionError, SessionStore};
use crate::net::types::{Role, User};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("AuthContext used outside its provider; call provide_auth_context at the app root")]
    MissingProvider,
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Coarse lifecycle phase derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Initializing,
    Anonymous,
    Authenticated,
}

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// State before restoration has run.
    pub fn initializing() -> Self {
        Self { session: None, loading: true }
    }

    /// Finish startup from whatever the store holds.
    pub fn restore(store: &SessionStore) -> Self {
        let session = store.load();
        match &session {
            Some(s) => log::info!("auth: restored session for {}", s.user.email),
            None => log::debug!("auth: no session to restore"),
        }
        Self { session, loading: false }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.role == Role::Admin)
    }

    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Initializing
        } else if self.is_authenticated() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Anonymous
        }
    }

    /// Persist, then adopt, a freshly issued session.
    ///
    /// The user record is trusted as returned by the auth endpoint.
    ///
    /// # Errors
    ///
    /// Returns the store error if the session could not be persisted; the
    /// in-memory state is left unchanged.
    pub fn login(&mut self, store: &SessionStore, user: User, token: String) -> Result<(), SessionError> {
        store.save(&user, &token)?;
        log::info!("auth: signed in as {}", user.email);
        self.session = Some(Session { token, user });
        self.loading = false;
        Ok(())
    }

    /// Drop the session from memory and storage. Idempotent.
    pub fn logout(&mut self, store: &SessionStore) {
        if let Some(s) = self.session.take() {
            log::info!("auth: signed out {}", s.user.email);
        }
        store.clear();
        self.loading = false;
    }
}

/// Tree-wide handle to the auth state and its backing store.
#[derive(Clone, Debug)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    store: SessionStore,
}

impl AuthContext {
    /// Create the context in `Initializing` and run the one-time restoration.
    pub fn new(store: SessionStore) -> Self {
        let state = RwSignal::new(AuthState::initializing());
        let restored = AuthState::restore(&store);
        state.set(restored);
        Self { state, store }
    }

    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// # Errors
    ///
    /// Returns [`AuthError::Session`] if persisting the session failed.
    pub fn login(&self, user: User, token: String) -> Result<(), AuthError> {
        let mut next = self.state.get_untracked();
        next.login(&self.store, user, token)?;
        self.state.set(next);
        Ok(())
    }

    pub fn logout(&self) {
        let store = &self.store;
        self.state.update(|s| s.logout(store));
    }
}

/// Build the auth context for `store` and provide it to the component tree.
pub fn provide_auth_context(store: SessionStore) -> AuthContext {
    let ctx = AuthContext::new(store);
    provide_context(ctx.clone());
    ctx
}

/// Retrieve the provided [`AuthContext`].
///
/// # Errors
///
/// Returns [`AuthError::MissingProvider`] when no ancestor provided one.
pub fn try_use_auth() -> Result<AuthContext, AuthError> {
    use_context::<AuthContext>().ok_or(AuthError::MissingProvider)
}

/// Retrieve the provided [`AuthContext`].
///
/// # Panics
///
/// Panics when no ancestor provided the context; that is a wiring bug, not a
/// condition pages should handle.
pub fn use_auth() -> AuthContext {
    match try_use_auth() {
        Ok(ctx) => ctx,
        Err(e) => panic!("{e}"),
    }
}
