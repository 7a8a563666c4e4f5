//! Shared top bar for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders navigation gated by the viewer's grants, identity, dark-mode
//! toggle, and sign-out. Sign-out clears local session state first and only
//! then fires the remote call, so a failed request can never resurrect the
//! session; the unauth redirect installed by each page completes the flow.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::guards::PermissionGuard;
use crate::net::types::{Action, Permission, Resource};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::auth::use_session;

/// Top navigation bar with grant-gated section links.
#[component]
pub fn AppHeader() -> impl IntoView {
    let session = use_session();
    let ui = expect_context::<RwSignal<UiState>>();

    let viewer_name = move || {
        session
            .get()
            .user
            .map(|user| user.name)
            .unwrap_or_else(|| "guest".to_owned())
    };

    let on_sign_out = move |_| {
        // Local state first; the remote call is best-effort.
        session.update(SessionState::clear);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Err(message) = crate::net::api::sign_out().await {
                    log::warn!("signout request failed: {message}");
                }
            });
        }
    };

    view! {
        <header class="app-header toolbar">
            <A attr:class="toolbar__brand" href="/">
                "Lifeboard"
            </A>
            <nav class="toolbar__nav">
                <PermissionGuard permission=Permission::new(Resource::Note, Action::Read)>
                    <A attr:class="toolbar__link" href="/notes">"Notes"</A>
                </PermissionGuard>
                <PermissionGuard permission=Permission::new(Resource::Todo, Action::Read)>
                    <A attr:class="toolbar__link" href="/todos">"Todos"</A>
                </PermissionGuard>
                <PermissionGuard permission=Permission::new(Resource::Diary, Action::Read)>
                    <A attr:class="toolbar__link" href="/diary">"Diary"</A>
                </PermissionGuard>
                <PermissionGuard permission=Permission::new(Resource::Project, Action::Read)>
                    <A attr:class="toolbar__link" href="/projects">"Projects"</A>
                </PermissionGuard>
                <PermissionGuard permission=Permission::new(Resource::ResourceLink, Action::Read)>
                    <A attr:class="toolbar__link" href="/resources">"Resources"</A>
                </PermissionGuard>
            </nav>

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="toolbar__self">{viewer_name}</span>

            <button class="btn toolbar__logout" on:click=on_sign_out title="Sign out">
                "Sign Out"
            </button>
        </header>
    }
}
