//! REST calls for the resources collection.
//!
//! Same hydrate/SSR split and error normalization as [`super::api`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_resources_test.rs"]
mod api_resources_test;

use super::types::ResourceLink;

#[cfg(any(test, feature = "hydrate"))]
fn resources_endpoint() -> String {
    format!("{}/resources", super::api::api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn resource_endpoint(id: &str) -> String {
    format!("{}/resources/{id}", super::api::api_base())
}

/// Fetch all resources via `GET /resources`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn list_resources() -> Result<Vec<ResourceLink>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&resources_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<Vec<ResourceLink>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a resource via `POST /resources`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn create_resource(
    title: &str,
    url: &str,
    description: Option<&str>,
) -> Result<ResourceLink, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "title": title,
            "url": url,
            "description": description,
        });
        let resp = gloo_net::http::Request::post(&resources_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<ResourceLink>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, url, description);
        Err("not available on server".to_owned())
    }
}

/// Update a resource via `PUT /resources/{id}`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn update_resource(id: &str, resource: &ResourceLink) -> Result<ResourceLink, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "title": resource.title,
            "url": resource.url,
            "description": resource.description,
        });
        let resp = gloo_net::http::Request::put(&resource_endpoint(id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(super::api::error_from_response(resp).await);
        }
        resp.json::<ResourceLink>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, resource);
        Err("not available on server".to_owned())
    }
}

/// Delete a resource via `DELETE /resources/{id}`.
///
/// # Errors
///
/// Returns the normalized server message if the request fails.
pub async fn delete_resource(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&resource_endpoint(id))
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
