use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use tokio::time::timeout;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::DataSource;
use crate::config::{ApiConfig, SecureString};
use crate::recipe::NewRecipePayload;

/// [`DataSource`] backed by the REST catalog.
///
/// Every request races a timer; whichever settles first decides what
/// the caller sees. No retries.
pub struct HttpDataSource {
    client: Client,
    base_url: String,
    api_key: Option<SecureString>,
    request_timeout: Duration,
}

impl HttpDataSource {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(|source| ApiError::Connection { source })?;

        let mut base_url = config.base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.resolve_key(),
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    /// Build `{base}{segment}?{params}&key=K`. `segment` is percent-encoded
    /// as a single path segment and skipped when empty. The key is appended
    /// last and omitted when none is configured.
    fn url(&self, segment: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        if !segment.is_empty() {
            url.path_segments_mut()
                .map_err(|()| ApiError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
                .pop_if_empty()
                .push(segment);
        }

        let mut pairs: Vec<(&str, &str)> = params.to_vec();
        if let Some(key) = &self.api_key {
            pairs.push(("key", key.expose()));
        }

        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in pairs {
                query.append_pair(name, value);
            }
        }

        Ok(url)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let result = timeout(self.request_timeout, self.execute(builder)).await;

        match result {
            Ok(response) => response,
            Err(_) => Err(ApiError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|source| ApiError::Connection { source })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Connection { source })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                });
            debug!(status = status.as_u16(), %message, "catalog returned an error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

impl DataSource for HttpDataSource {
    async fn get_recipe(&self, id: &str) -> Result<Value, ApiError> {
        debug!(id, "fetching recipe");
        let url = self.url(id, &[])?;
        self.send(self.client.get(url)).await
    }

    async fn search(&self, query: &str) -> Result<Value, ApiError> {
        debug!(query, "searching recipes");
        let url = self.url("", &[("search", query)])?;
        self.send(self.client.get(url)).await
    }

    async fn create_recipe(&self, payload: &NewRecipePayload) -> Result<Value, ApiError> {
        debug!(title = %payload.title, "uploading recipe");
        let url = self.url("", &[])?;
        self.send(self.client.post(url).json(payload)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base_url: &str) -> HttpDataSource {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            api_key: Some("k".to_string()),
            timeout_seconds: 5,
            connect_timeout_seconds: 1,
        };
        HttpDataSource::new(&config).unwrap()
    }

    #[test]
    fn id_is_a_single_encoded_segment() {
        let source = source("https://catalog.test/api/v2/recipes");
        let url = source.url("a/b?c#d", &[]).unwrap();
        assert_eq!(url.path(), "/api/v2/recipes/a%2Fb%3Fc%23d");
        assert_eq!(url.query(), Some("key=k"));
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn empty_segment_keeps_collection_path() {
        let source = source("https://catalog.test/api/v2/recipes/");
        let url = source.url("", &[("search", "pizza")]).unwrap();
        assert_eq!(url.as_str(), "https://catalog.test/api/v2/recipes/?search=pizza&key=k");
    }
}
