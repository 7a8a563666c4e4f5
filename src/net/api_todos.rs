//! REST calls for the todos collection.
//!
//! Same hydrate/SSR split and error normalization as [`super::api`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_todos_test.rs"]
mod api_todos_test;

use super::types::Todo;

#[cfg(any(test, feature = "hydrate"))]
fn todos_endpoint() -> String {
    format!("{}/todos", super::api::api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn todo_endpoint(id: &str) -> String {
    format!("{}/todos/{id}", super::api::api_base())
}

/// Fetch all todos via `GET /todos`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn list_todos() -> Result<Vec<Todo>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&todos_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<Vec<Todo>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a todo via `POST /todos`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn create_todo(
    title: &str,
    due_date: Option<&str>,
    priority: Option<&str>,
) -> Result<Todo, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "title": title,
            "due_date": due_date,
            "priority": priority,
        });
        let resp = gloo_net::http::Request::post(&todos_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<Todo>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, due_date, priority);
        Err("not available on server".to_owned())
    }
}

/// Update a todo via `PUT /todos/{id}`. Sends the full editable record,
/// including completion state, so the same call serves edits and toggles.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn update_todo(id: &str, todo: &Todo) -> Result<Todo, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "title": todo.title,
            "completed": todo.completed,
            "due_date": todo.due_date,
            "priority": todo.priority,
        });
        let resp = gloo_net::http::Request::put(&todo_endpoint(id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<Todo>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, todo);
        Err("not available on server".to_owned())
    }
}

/// Delete a todo via `DELETE /todos/{id}`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn delete_todo(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&todo_endpoint(id))
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
