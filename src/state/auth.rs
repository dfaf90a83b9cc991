//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decides whether the shell body shows the login view or the authenticated
//! shell. Held in memory only; a page reload starts from the configured
//! initial value again.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Whether the current session is treated as logged in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    /// Startup value. Without `require_login` the portal opens signed in.
    pub fn initial(require_login: bool) -> Self {
        if require_login {
            Self::Unauthenticated
        } else {
            Self::Authenticated
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }

    /// Completion of the login view. Credentials are the login view's concern.
    pub fn login_success(&mut self) {
        *self = Self::Authenticated;
    }

    pub fn sign_out(&mut self) {
        *self = Self::Unauthenticated;
    }
}
