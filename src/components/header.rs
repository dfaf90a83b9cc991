//! Top navigation bar: brand, theme switch, sign-out and mobile nav toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above both the login view and the authenticated shell. Reads
//! auth and theme from context and reports user intent through callbacks;
//! it never writes shared state itself.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::config::ShellConfig;
use crate::state::auth::AuthState;
use crate::state::ui::{ThemePreference, UiState};

/// Full class list of the icon inside the theme switch label.
pub fn theme_icon_class(theme: ThemePreference) -> String {
    format!("fas {} me-2 text-light", theme.icon_class())
}

/// Accessible label for the theme switch.
pub fn theme_switch_label(theme: ThemePreference) -> &'static str {
    if theme.is_dark() {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    }
}

/// The sign-out link is only offered to an authenticated session.
pub fn shows_sign_out(auth: AuthState) -> bool {
    auth.is_authenticated()
}

#[component]
pub fn Header(on_toggle_theme: Callback<()>, on_sign_out: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<ShellConfig>();

    let theme = move || ui.get().theme;
    let brand_name = config.brand_name.clone();

    view! {
        <header class="navbar navbar-dark sticky-top bg-dark flex-md-nowrap p-0 shadow">
            <a class="navbar-brand col-md-3 col-lg-2 me-0 px-3 d-flex align-items-center" href="#">
                <img src=config.logo_src.clone() alt=config.brand_name.clone() class="logo"/>
                <span class="ms-2 text-light">{brand_name}</span>
            </a>
            <div class="navbar-nav flex-row ms-auto">
                <div class="nav-item text-nowrap d-flex align-items-center">
                    <div class="form-check form-switch me-3">
                        <input
                            class="form-check-input"
                            type="checkbox"
                            id="themeSwitch"
                            aria-label=move || theme_switch_label(theme())
                            prop:checked=move || theme().is_dark()
                            on:change=move |_| on_toggle_theme.run(())
                        />
                        <label class="form-check-label" for="themeSwitch">
                            <i class=move || theme_icon_class(theme())></i>
                        </label>
                    </div>
                    <Show when=move || shows_sign_out(auth.get())>
                        <a
                            class="nav-link px-3 text-light"
                            href="#"
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_sign_out.run(());
                            }
                        >
                            "Sign out"
                        </a>
                    </Show>
                    <button
                        class="navbar-toggler d-md-none"
                        type="button"
                        data-bs-toggle="collapse"
                        data-bs-target="#sidebarMenu"
                        aria-controls="sidebarMenu"
                        aria-expanded="false"
                        aria-label="Toggle navigation"
                    >
                        <span class="navbar-toggler-icon"></span>
                    </button>
                </div>
            </div>
        </header>
    }
}
