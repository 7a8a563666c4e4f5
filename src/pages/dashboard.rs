//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows grant-gated section tiles and account status. Redirects to `/login`
//! once the session resolves unauthenticated; while the token verification is
//! still in flight it renders a loading placeholder instead.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::guards::{AnyRoleGuard, PermissionGuard};
use crate::components::header::AppHeader;
use crate::net::types::{Action, Permission, Resource, Role};
use crate::util::auth::{install_unauth_redirect, use_session};

/// Display label for a role, shown next to the greeting.
fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "admin",
        Role::User => "member",
        Role::Guest => "guest",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let greeting = move || {
        session
            .get()
            .user
            .map(|user| format!("Welcome back, {} ({})", user.name, role_label(user.role)))
            .unwrap_or_default()
    };

    let email_unverified =
        move || session.get().user.is_some_and(|user| !user.email_verified);

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if session.get().resolved() {
                                    "Redirecting to login..."
                                } else {
                                    "Loading..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <AppHeader/>

                <div class="dashboard-page__body">
                    <p class="dashboard-page__greeting">{greeting}</p>

                    <Show when=email_unverified>
                        <p class="dashboard-page__banner">
                            "Your email address is not verified yet. Check your inbox for the verification link."
                        </p>
                    </Show>

                    <div class="dashboard-page__tiles">
                        <PermissionGuard permission=Permission::new(Resource::Note, Action::Read)>
                            <A attr:class="dashboard-tile" href="/notes">
                                <h2>"Notes"</h2>
                                <p>"Capture free-form thoughts."</p>
                            </A>
                        </PermissionGuard>
                        <PermissionGuard permission=Permission::new(Resource::Todo, Action::Read)>
                            <A attr:class="dashboard-tile" href="/todos">
                                <h2>"Todos"</h2>
                                <p>"Track what needs doing."</p>
                            </A>
                        </PermissionGuard>
                        <PermissionGuard permission=Permission::new(Resource::Diary, Action::Read)>
                            <A attr:class="dashboard-tile" href="/diary">
                                <h2>"Diary"</h2>
                                <p>"A private daily journal."</p>
                            </A>
                        </PermissionGuard>
                        <PermissionGuard permission=Permission::new(Resource::Project, Action::Read)>
                            <A attr:class="dashboard-tile" href="/projects">
                                <h2>"Projects"</h2>
                                <p>"Group related work."</p>
                            </A>
                        </PermissionGuard>
                        <PermissionGuard permission=Permission::new(Resource::ResourceLink, Action::Read)>
                            <A attr:class="dashboard-tile" href="/resources">
                                <h2>"Resources"</h2>
                                <p>"Save links worth keeping."</p>
                            </A>
                        </PermissionGuard>
                        <AnyRoleGuard roles=vec![Role::Admin]>
                            <div class="dashboard-tile dashboard-tile--admin">
                                <h2>"Administration"</h2>
                                <p>"User accounts and grants are managed through the API console."</p>
                            </div>
                        </AnyRoleGuard>
                    </div>
                </div>
            </div>
        </Show>
    }
}
