//! REST helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with cookies
//! carrying the session. Server-side (SSR): stubs returning `None`/error
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! API failures are normalized to the server's JSON `message` field, falling
//! back to a generic `"request failed: {status}"`. Callers get
//! `Option`/`Result` outputs instead of panics so auth failures degrade UI
//! behavior without crashing hydration. Token verification is the one
//! exception: failure there means "no session", never an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
#[cfg(feature = "hydrate")]
use super::types::MessageResponse;

/// API base URL, compile-time configurable for deployments where the API
/// lives on another origin. Defaults to the same-origin `/api` prefix.
pub fn api_base() -> &'static str {
    match option_env!("LIFEBOARD_API_URL") {
        Some(base) => base,
        None => "/api",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(path: &str) -> String {
    format!("{}/auth/{path}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Extract the server's `message` field from an error body, falling back to
/// a generic status-based message when the body is not the expected JSON.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str().map(ToOwned::to_owned)))
        .unwrap_or_else(|| request_failed_message(status))
}

#[cfg(feature = "hydrate")]
pub(crate) async fn error_from_response(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_message(&body, status)
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct AuthResponse {
    user: User,
}

/// Create an account via `POST /auth/signup`. The server auto-logs the new
/// account in (session cookie on the response).
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn sign_up(email: &str, password: &str, name: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password, "name": name });
        let resp = gloo_net::http::Request::post(&auth_endpoint("signup"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let body: AuthResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, name);
        Err("not available on server".to_owned())
    }
}

/// Sign in via `POST /auth/signin`.
///
/// # Errors
///
/// Returns the normalized server message if credentials are rejected or the
/// request fails.
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&auth_endpoint("signin"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let body: AuthResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// End the server session via `POST /auth/signout`.
///
/// Callers clear local session state before awaiting this, so the result is
/// only used to surface a message.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&auth_endpoint("signout"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Verify the session cookie via `GET /auth/verify-token`.
/// Returns `None` if not authenticated or on the server.
pub async fn verify_token() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&auth_endpoint("verify-token"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AuthResponse>().await.ok().map(|body| body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Request a password-reset email via `POST /auth/forgot-password`.
/// Returns the server's confirmation message.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn forgot_password(email: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post(&auth_endpoint("forgot-password"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let body: MessageResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn reset_password_endpoint(token: &str) -> String {
    format!("{}/auth/reset-password?token={token}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_email_endpoint(token: &str) -> String {
    format!("{}/auth/verify-email?token={token}", api_base())
}

/// Set a new password via `POST /auth/reset-password?token=...`.
/// Returns the server's confirmation message.
///
/// # Errors
///
/// Returns the normalized server message if the token is invalid/expired or
/// the request fails.
pub async fn reset_password(token: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "password": password });
        let resp = gloo_net::http::Request::post(&reset_password_endpoint(token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let body: MessageResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, password);
        Err("not available on server".to_owned())
    }
}

/// Confirm an email address via `GET /auth/verify-email?token=...`.
/// Returns the server's confirmation message.
///
/// # Errors
///
/// Returns the normalized server message if the token is invalid/expired or
/// the request fails.
pub async fn verify_email(token: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&verify_email_endpoint(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let body: MessageResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}
