//! Shell session model: auth flag plus theme, with the startup rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` splits this into per-domain signals; the model keeps the same
//! transitions available as plain methods so whole sign-in/theme flows can
//! be driven against a [`PreferenceStore`] without rendering.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::config::ShellConfig;
use crate::state::auth::AuthState;
use crate::state::ui::ThemePreference;
use crate::util::prefs::PreferenceStore;
use crate::util::theme;

/// Which body view the shell renders below the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellBody {
    Login,
    Authenticated { theme: ThemePreference },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellState {
    pub auth: AuthState,
    pub theme: ThemePreference,
}

impl ShellState {
    /// Load the stored theme and pick the configured initial auth state.
    pub fn initialize(store: &dyn PreferenceStore, config: &ShellConfig) -> Self {
        Self {
            auth: AuthState::initial(config.require_login),
            theme: theme::read_preference(store, &config.theme_cookie),
        }
    }

    pub fn login_success(&mut self) {
        self.auth.login_success();
    }

    pub fn sign_out(&mut self) {
        self.auth.sign_out();
    }

    /// Persist the flipped theme, then adopt it.
    pub fn toggle_theme(&mut self, store: &dyn PreferenceStore, config: &ShellConfig) -> ThemePreference {
        self.theme = theme::toggle(self.theme, store, &config.theme_cookie);
        self.theme
    }

    pub fn body(&self) -> ShellBody {
        shell_body(self.auth, self.theme)
    }
}

/// Resolve the body view for an auth state and theme.
pub fn shell_body(auth: AuthState, theme: ThemePreference) -> ShellBody {
    if auth.is_authenticated() {
        ShellBody::Authenticated { theme }
    } else {
        ShellBody::Login
    }
}
