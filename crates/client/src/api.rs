//! Typed HTTP client for the pinmap API.
//!
//! One method per endpoint; bodies use the wire shapes from
//! `pinmap_core::model`. Non-success responses are turned into
//! [`ClientError::Api`] carrying the server's `{ "error": ... }` message.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use pinmap_core::content::ContentBlock;
use pinmap_core::model::{Pin, RegionBoundary, TagDefinition};
use pinmap_core::settings::MapSettings;
use pinmap_core::types::LatLng;

use crate::error::ClientError;

/// Payload for creating a pin. The server assigns id and timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinDraft {
    pub title: String,
    pub position: LatLng,
    pub main_tag: String,
    pub supporting_tags: Vec<String>,
    pub content: Vec<ContentBlock>,
}

/// Partial pin update; `None` fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentBlock>>,
}

/// Payload for creating or updating a tag definition.
#[derive(Debug, Clone, Serialize)]
pub struct TagDraft {
    pub name: String,
    pub color: String,
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    admin_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            admin_token: None,
        }
    }

    /// Attach an admin token, sent as a bearer token on every mutation.
    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.admin_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // -----------------------------------------------------------------------
    // Pins
    // -----------------------------------------------------------------------

    pub async fn list_pins(&self, tag: Option<&str>) -> Result<Vec<Pin>, ClientError> {
        let mut request = self.http.get(self.url("/api/pins"));
        if let Some(tag) = tag {
            request = request.query(&[("tag", tag)]);
        }
        decode_json(request.send().await?).await
    }

    pub async fn get_pin(&self, id: Uuid) -> Result<Pin, ClientError> {
        let response = self.http.get(self.url(&format!("/api/pins/{id}"))).send().await?;
        decode_json(response).await
    }

    pub async fn create_pin(&self, draft: &PinDraft) -> Result<Pin, ClientError> {
        let request = self.authorize(self.http.post(self.url("/api/pins")).json(draft));
        decode_json(request.send().await?).await
    }

    pub async fn update_pin(&self, id: Uuid, update: &PinUpdate) -> Result<Pin, ClientError> {
        let request = self.authorize(
            self.http
                .put(self.url(&format!("/api/pins/{id}")))
                .json(update),
        );
        decode_json(request.send().await?).await
    }

    pub async fn delete_pin(&self, id: Uuid) -> Result<(), ClientError> {
        let request = self.authorize(self.http.delete(self.url(&format!("/api/pins/{id}"))));
        expect_success(request.send().await?).await
    }

    // -----------------------------------------------------------------------
    // Tags
    // -----------------------------------------------------------------------

    pub async fn list_tags(&self) -> Result<Vec<TagDefinition>, ClientError> {
        decode_json(self.http.get(self.url("/api/tags")).send().await?).await
    }

    pub async fn create_tag(&self, draft: &TagDraft) -> Result<TagDefinition, ClientError> {
        let request = self.authorize(self.http.post(self.url("/api/tags")).json(draft));
        decode_json(request.send().await?).await
    }

    pub async fn update_tag(
        &self,
        id: Uuid,
        name: Option<&str>,
        color: Option<&str>,
    ) -> Result<TagDefinition, ClientError> {
        let body = serde_json::json!({ "name": name, "color": color });
        let request = self.authorize(
            self.http
                .put(self.url(&format!("/api/tags/{id}")))
                .json(&body),
        );
        decode_json(request.send().await?).await
    }

    pub async fn delete_tag(&self, id: Uuid) -> Result<(), ClientError> {
        let request = self.authorize(self.http.delete(self.url(&format!("/api/tags/{id}"))));
        expect_success(request.send().await?).await
    }

    // -----------------------------------------------------------------------
    // Boundary
    // -----------------------------------------------------------------------

    /// Fetch the boundary; absence (404) is a valid state, not an error.
    pub async fn get_boundary(&self) -> Result<Option<RegionBoundary>, ClientError> {
        let response = self.http.get(self.url("/api/boundary")).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode_json(response).await.map(Some)
    }

    pub async fn set_boundary(
        &self,
        boundary: &RegionBoundary,
    ) -> Result<RegionBoundary, ClientError> {
        let request = self.authorize(self.http.put(self.url("/api/boundary")).json(boundary));
        decode_json(request.send().await?).await
    }

    pub async fn delete_boundary(&self) -> Result<(), ClientError> {
        let request = self.authorize(self.http.delete(self.url("/api/boundary")));
        expect_success(request.send().await?).await
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Fetch the stored settings; absence (404) means "use the defaults".
    pub async fn get_settings(&self) -> Result<Option<MapSettings>, ClientError> {
        let response = self.http.get(self.url("/api/settings")).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode_json(response).await.map(Some)
    }

    pub async fn update_settings(&self, settings: &MapSettings) -> Result<MapSettings, ClientError> {
        let request = self.authorize(self.http.put(self.url("/api/settings")).json(settings));
        decode_json(request.send().await?).await
    }
}

/// Decode a success response as JSON, or surface the server's error message.
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = into_api_error(response).await?;
    Ok(response.json().await?)
}

/// Discard a success body, or surface the server's error message.
async fn expect_success(response: Response) -> Result<(), ClientError> {
    into_api_error(response).await?;
    Ok(())
}

async fn into_api_error(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Error bodies are `{ "error": string }`; fall back to the status line
    // when the body is not in that shape.
    let message = match response.json::<serde_json::Value>().await {
        Ok(body) => body["error"]
            .as_str()
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed"))
            .to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
