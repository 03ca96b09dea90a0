//! reqwest-backed implementation of the admin client traits against a
//! Kong-style gateway admin API.

use crate::api::{Plugin, PluginRequest, PluginsAdmin, ScopedConfig, ScopedConfigAdmin};
use crate::error::RemoteError;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Header carrying the admin API key, when one is configured.
const API_KEY_HEADER: &str = "X-API-KEY";

pub struct AdminHttpClient {
    base_url: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl AdminHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: None,
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self.client.request(method, url);
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }
}

/// Non-2xx becomes `RemoteError::Status` with the response body attached.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(RemoteError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// The scoped create endpoint accepts either a JSON document or a flat
/// `key=value&` form body; pick the content type from the payload shape.
fn scoped_content_type(payload: &str) -> &'static str {
    if payload.trim_start().starts_with('{') {
        "application/json"
    } else {
        "application/x-www-form-urlencoded"
    }
}

#[async_trait]
impl PluginsAdmin for AdminHttpClient {
    async fn create(&self, request: &PluginRequest) -> Result<Plugin, RemoteError> {
        debug!(name = %request.name, "admin: create plugin");
        let response = self
            .request(Method::POST, "/plugins")
            .json(request)
            .send()
            .await?;
        check(response)
            .await?
            .json::<Plugin>()
            .await
            .map_err(RemoteError::Transport)
    }

    async fn update_by_id(
        &self,
        id: &str,
        request: &PluginRequest,
    ) -> Result<Plugin, RemoteError> {
        debug!(id, name = %request.name, "admin: update plugin");
        let response = self
            .request(Method::PATCH, &format!("/plugins/{id}"))
            .json(request)
            .send()
            .await?;
        check(response)
            .await?
            .json::<Plugin>()
            .await
            .map_err(RemoteError::Transport)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Plugin>, RemoteError> {
        let response = self
            .request(Method::GET, &format!("/plugins/{id}"))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let plugin = check(response)
            .await?
            .json::<Plugin>()
            .await
            .map_err(RemoteError::Transport)?;
        Ok(Some(plugin))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RemoteError> {
        debug!(id, "admin: delete plugin");
        let response = self
            .request(Method::DELETE, &format!("/plugins/{id}"))
            .send()
            .await?;
        check(response).await.map(|_| ())
    }
}

#[async_trait]
impl ScopedConfigAdmin for AdminHttpClient {
    async fn create_config(
        &self,
        consumer_id: &str,
        plugin_name: &str,
        payload: &str,
    ) -> Result<ScopedConfig, RemoteError> {
        debug!(consumer_id, plugin_name, "admin: create scoped config");
        let response = self
            .request(Method::POST, &format!("/consumers/{consumer_id}/{plugin_name}"))
            .header("Content-Type", scoped_content_type(payload))
            .body(payload.to_string())
            .send()
            .await?;
        let body = check(response).await?.text().await?;
        let id = extract_id(&body)?;
        Ok(ScopedConfig { id, body })
    }

    async fn get_config(
        &self,
        consumer_id: &str,
        plugin_name: &str,
        config_id: &str,
    ) -> Result<Option<ScopedConfig>, RemoteError> {
        let response = self
            .request(
                Method::GET,
                &format!("/consumers/{consumer_id}/{plugin_name}/{config_id}"),
            )
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = check(response).await?.text().await?;
        Ok(Some(ScopedConfig {
            id: config_id.to_string(),
            body,
        }))
    }

    async fn delete_config(
        &self,
        consumer_id: &str,
        plugin_name: &str,
        config_id: &str,
    ) -> Result<(), RemoteError> {
        debug!(consumer_id, plugin_name, config_id, "admin: delete scoped config");
        let response = self
            .request(
                Method::DELETE,
                &format!("/consumers/{consumer_id}/{plugin_name}/{config_id}"),
            )
            .send()
            .await?;
        check(response).await.map(|_| ())
    }
}

/// The scoped create response is a stored-config document; the remote id is
/// its `id` field.
fn extract_id(body: &str) -> Result<String, RemoteError> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("id").and_then(Value::as_str).map(str::to_string))
        .ok_or_else(|| RemoteError::Decode(format!("scoped config response has no id: {body}")))
}
