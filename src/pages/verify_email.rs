//! Email-verification landing page reached from the emailed link.
//!
//! Fires the verification call once on load with the `?token=` query
//! parameter and reports the server's verdict.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let info = RwSignal::new(String::new());
    let attempted = RwSignal::new(false);

    Effect::new(move || {
        if attempted.get() {
            return;
        }
        attempted.set(true);
        let token = query.with(|q| q.get("token")).unwrap_or_default();
        if token.is_empty() {
            info.set("Missing verification token. Use the link from your email.".to_owned());
            return;
        }
        info.set("Verifying your email...".to_owned());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_email(&token).await {
                Ok(message) | Err(message) => info.set(message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Lifeboard"</h1>
                <p class="login-card__subtitle">"Email Verification"</p>
                <p class="login-message">{move || info.get()}</p>
                <div class="login-divider"></div>
                <p class="login-card__links">
                    <A href="/login">"Continue to sign in"</A>
                </p>
            </div>
        </div>
    }
}
