//! Authenticated shell: sidebar navigation and the active section.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar is the `#sidebarMenu` target of the header's mobile toggle.
//! The page only reads the theme flag; it never changes it.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;

/// Sections reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Overview,
    Accounts,
    Transfers,
    Settings,
}

impl Section {
    pub const ALL: [Section; 4] = [Self::Overview, Self::Accounts, Self::Transfers, Self::Settings];

    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Accounts => "Accounts",
            Self::Transfers => "Transfers",
            Self::Settings => "Settings",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Overview => "Your portal at a glance.",
            Self::Accounts => "Balances and recent activity for your accounts.",
            Self::Transfers => "Move money between accounts.",
            Self::Settings => "Profile and notification preferences.",
        }
    }
}

/// Sidebar background classes for the theme flag.
pub fn sidebar_class(dark: bool) -> &'static str {
    if dark {
        "col-md-3 col-lg-2 d-md-block sidebar collapse bg-dark border-end border-secondary"
    } else {
        "col-md-3 col-lg-2 d-md-block sidebar collapse bg-light border-end"
    }
}

/// Card classes for the main content panel.
pub fn card_class(dark: bool) -> &'static str {
    if dark {
        "card bg-secondary text-white"
    } else {
        "card bg-white text-dark"
    }
}

fn nav_link_class(active: bool, dark: bool) -> &'static str {
    match (active, dark) {
        (true, _) => "nav-link active",
        (false, true) => "nav-link text-white",
        (false, false) => "nav-link text-dark",
    }
}

#[component]
pub fn ShellPage(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
    let active = RwSignal::new(Section::default());

    view! {
        <div class="row">
            <nav id="sidebarMenu" class=move || sidebar_class(dark.get())>
                <div class="position-sticky pt-3">
                    <ul class="nav flex-column">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li class="nav-item">
                                        <a
                                            class=move || nav_link_class(active.get() == section, dark.get())
                                            href="#"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                active.set(section);
                                            }
                                        >
                                            {section.title()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </nav>
            <main class="col-md-9 ms-sm-auto col-lg-10 px-md-4 pt-3">
                <h1 class="h2">{move || active.get().title()}</h1>
                <div class=move || card_class(dark.get())>
                    <div class="card-body">
                        <p class="card-text">{move || active.get().summary()}</p>
                    </div>
                </div>
            </main>
        </div>
    }
}
