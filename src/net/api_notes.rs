//! REST calls for the notes collection.
//!
//! Same hydrate/SSR split and error normalization as [`super::api`]: real
//! `gloo-net` calls in the browser, inert stubs during server rendering.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_notes_test.rs"]
mod api_notes_test;

use super::types::Note;

#[cfg(any(test, feature = "hydrate"))]
fn notes_endpoint() -> String {
    format!("{}/notes", super::api::api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn note_endpoint(id: &str) -> String {
    format!("{}/notes/{id}", super::api::api_base())
}

/// Fetch all notes via `GET /notes`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn list_notes() -> Result<Vec<Note>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&notes_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<Vec<Note>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a note via `POST /notes`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn create_note(title: &str, content: &str) -> Result<Note, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "title": title, "content": content });
        let resp = gloo_net::http::Request::post(&notes_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<Note>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, content);
        Err("not available on server".to_owned())
    }
}

/// Update a note via `PUT /notes/{id}`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn update_note(id: &str, title: &str, content: &str) -> Result<Note, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "title": title, "content": content });
        let resp = gloo_net::http::Request::put(&note_endpoint(id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<Note>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, title, content);
        Err("not available on server".to_owned())
    }
}

/// Delete a note via `DELETE /notes/{id}`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn delete_note(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&note_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
