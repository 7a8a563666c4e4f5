//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, diary::DiaryPage, forgot_password::ForgotPasswordPage,
    login::LoginPage, notes::NotesPage, projects::ProjectsPage, register::RegisterPage,
    reset_password::ResetPasswordPage, resources::ResourcesPage, todos::TodosPage,
    verify_email::VerifyEmailPage,
};
use crate::state::diary::DiaryState;
use crate::state::notes::NotesState;
use crate::state::projects::ProjectsState;
use crate::state::resources::ResourcesState;
use crate::state::session::SessionState;
use crate::state::todos::TodosState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and shared state contexts, resolves the session via
/// token verification on the client, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Shared state contexts for all child components. The session signal is
    // the explicit handle every permission check flows through.
    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let notes = RwSignal::new(NotesState::default());
    let todos = RwSignal::new(TodosState::default());
    let diary = RwSignal::new(DiaryState::default());
    let projects = RwSignal::new(ProjectsState::default());
    let resources = RwSignal::new(ResourcesState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(notes);
    provide_context(todos);
    provide_context(diary);
    provide_context(projects);
    provide_context(resources);

    #[cfg(feature = "hydrate")]
    {
        // Resolve Unknown -> Authenticated/Unauthenticated exactly once per
        // load. Verification failure is "no session", not an error.
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_token().await {
                Some(user) => session.update(|s| s.establish(user)),
                None => session.update(SessionState::clear),
            }
        });

        let dark = crate::util::dark_mode::init();
        ui.update(|u| u.dark_mode = dark);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/lifeboard.css"/>
        <Title text="Lifeboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("notes") view=NotesPage/>
                <Route path=StaticSegment("todos") view=TodosPage/>
                <Route path=StaticSegment("diary") view=DiaryPage/>
                <Route path=StaticSegment("projects") view=ProjectsPage/>
                <Route path=StaticSegment("resources") view=ResourcesPage/>
            </Routes>
        </Router>
    }
}
