//! REST calls for the projects collection.
//!
//! Same hydrate/SSR split and error normalization as [`super::api`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_projects_test.rs"]
mod api_projects_test;

use super::types::Project;

#[cfg(any(test, feature = "hydrate"))]
fn projects_endpoint() -> String {
    format!("{}/projects", super::api::api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn project_endpoint(id: &str) -> String {
    format!("{}/projects/{id}", super::api::api_base())
}

/// Fetch all projects via `GET /projects`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn list_projects() -> Result<Vec<Project>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&projects_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<Vec<Project>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a project via `POST /projects`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn create_project(name: &str, description: Option<&str>) -> Result<Project, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "description": description });
        let resp = gloo_net::http::Request::post(&projects_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<Project>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, description);
        Err("not available on server".to_owned())
    }
}

/// Update a project via `PUT /projects/{id}`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn update_project(id: &str, project: &Project) -> Result<Project, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "name": project.name,
            "description": project.description,
            "status": project.status,
        });
        let resp = gloo_net::http::Request::put(&project_endpoint(id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<Project>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, project);
        Err("not available on server".to_owned())
    }
}

/// Delete a project via `DELETE /projects/{id}`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn delete_project(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&project_endpoint(id))
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
