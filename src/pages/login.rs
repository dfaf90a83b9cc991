//! Login page with username + password form.
//!
//! There is no credential check behind this form yet; a non-empty username
//! and password complete the login through the `on_login` callback.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

/// Validate the login form. Returns the trimmed username on success.
pub fn validate_login_input(username: &str, password: &str) -> Result<String, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(username.to_owned())
}

#[component]
pub fn LoginPage(on_login: Callback<()>) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&username.get(), &password.get()) {
            Ok(user) => {
                log::info!("login completed for {user}");
                info.set(String::new());
                password.set(String::new());
                on_login.run(());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page d-flex justify-content-center align-items-center py-5">
            <div class="login-card card p-4 shadow-sm">
                <h1 class="h3 mb-3">"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="form-control mb-2"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="form-control mb-3"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary w-100" type="submit">
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message text-danger mt-3 mb-0">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
