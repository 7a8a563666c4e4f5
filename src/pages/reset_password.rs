//! Reset-password page reached from the emailed link.
//!
//! The reset token arrives as a `?token=` query parameter and is forwarded
//! verbatim; the server owns token validation and expiry.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::util::validate::validate_reset_password_input;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let token = Signal::derive(move || query.with(|q| q.get("token")).unwrap_or_default());

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let token_value = token.get();
        if token_value.is_empty() {
            info.set("Missing reset token. Use the link from your email.".to_owned());
            return;
        }
        let password_value = match validate_reset_password_input(&password.get(), &confirm.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Updating password...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::reset_password(&token_value, &password_value).await {
                Ok(message) => {
                    info.set(message);
                    done.set(true);
                }
                Err(message) => {
                    info.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Lifeboard"</h1>
                <p class="login-card__subtitle">"Choose a New Password"</p>
                <Show
                    when=move || !done.get()
                    fallback=move || {
                        view! {
                            <p class="login-message">{move || info.get()}</p>
                            <p class="login-card__links">
                                <A href="/login">"Continue to sign in"</A>
                            </p>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="password"
                            placeholder="new password (8+ characters)"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="confirm new password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Set Password"
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="login-message">{move || info.get()}</p>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
