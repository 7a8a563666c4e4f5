//! REST calls for the diary collection.
//!
//! Same hydrate/SSR split and error normalization as [`super::api`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_diary_test.rs"]
mod api_diary_test;

use super::types::DiaryEntry;

#[cfg(any(test, feature = "hydrate"))]
fn diary_endpoint() -> String {
    format!("{}/diary", super::api::api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn diary_entry_endpoint(id: &str) -> String {
    format!("{}/diary/{id}", super::api::api_base())
}

/// Fetch all diary entries via `GET /diary`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn list_entries() -> Result<Vec<DiaryEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&diary_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<Vec<DiaryEntry>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a diary entry via `POST /diary`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn create_entry(
    title: &str,
    content: &str,
    entry_date: Option<&str>,
    mood: Option<&str>,
) -> Result<DiaryEntry, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "title": title,
            "content": content,
            "entry_date": entry_date,
            "mood": mood,
        });
        let resp = gloo_net::http::Request::post(&diary_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<DiaryEntry>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, content, entry_date, mood);
        Err("not available on server".to_owned())
    }
}

/// Update a diary entry via `PUT /diary/{id}`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn update_entry(id: &str, entry: &DiaryEntry) -> Result<DiaryEntry, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "title": entry.title,
            "content": entry.content,
            "entry_date": entry.entry_date,
            "mood": entry.mood,
        });
        let resp = gloo_net::http::Request::put(&diary_entry_endpoint(id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<DiaryEntry>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, entry);
        Err("not available on server".to_owned())
    }
}

/// Delete a diary entry via `DELETE /diary/{id}`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn delete_entry(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&diary_entry_endpoint(id))
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
