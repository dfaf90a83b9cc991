//! Root application component: header, theme handling and body selection.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::header::Header;
use crate::config::ShellConfig;
use crate::pages::{login::LoginPage, shell::ShellPage};
use crate::state::auth::AuthState;
use crate::state::shell::{ShellBody, ShellState, shell_body};
use crate::state::ui::UiState;
use crate::util::prefs::CookieStore;
use crate::util::theme;

/// Root application component.
///
/// Provides auth, UI and config contexts, applies the theme to `<body>`
/// whenever it changes, and renders the header above either the login page
/// or the authenticated shell.
#[component]
pub fn App(#[prop(optional)] config: Option<ShellConfig>) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_else(|| {
        ShellConfig::from_build_env().unwrap_or_else(|e| {
            log::warn!("invalid build-time portal config, using defaults: {e}");
            ShellConfig::default()
        })
    });
    // Client-side rendered only, so the cookie is read before the first render.
    let initial = ShellState::initialize(&CookieStore, &config);
    let auth = RwSignal::new(initial.auth);
    let ui = RwSignal::new(UiState { theme: initial.theme });

    provide_context(auth);
    provide_context(ui);
    provide_context(config.clone());

    // Runs once on mount and again on every theme change.
    Effect::new(move || theme::apply(ui.get().theme));

    let on_toggle_theme = Callback::new({
        let cookie = config.theme_cookie.clone();
        move |()| {
            let current = ui.get_untracked().theme;
            let next = theme::toggle(current, &CookieStore, &cookie);
            ui.update(|u| u.theme = next);
        }
    });
    let on_sign_out = Callback::new(move |()| {
        log::info!("signed out");
        auth.update(AuthState::sign_out);
    });
    let on_login = Callback::new(move |()| {
        log::info!("signed in");
        auth.update(AuthState::login_success);
    });

    let dark = Signal::derive(move || ui.get().theme.is_dark());
    let container_class = move || format!("container-fluid {}", ui.get().theme.body_class());

    view! {
        <Title text=config.brand_name.clone()/>

        <span>
            <Header on_toggle_theme on_sign_out/>
            <div class=container_class>
                {move || match shell_body(auth.get(), ui.get_untracked().theme) {
                    ShellBody::Login => view! { <LoginPage on_login/> }.into_any(),
                    ShellBody::Authenticated { .. } => view! { <ShellPage dark/> }.into_any(),
                }}
            </div>
        </span>
    }
}
