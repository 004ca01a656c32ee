//! HTTP client for the remote CRUD API.

use reqwest::{Client, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::query::QueryParams;
use crate::config::ClientConfig;
use crate::slice::{Page, Resource};

/// Response header carrying the total matching item count for list reads.
pub const TOTAL_ITEMS_HEADER: &str = "total-items";

/// Header carrying a client-generated key so a retried create is not
/// applied twice by the server.
const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

/// Typed CRUD client over the admin API.
///
/// Built once from config and cloned freely; `reqwest::Client` pools
/// connections internally.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to build API client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self, path: &str, params: &QueryParams) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.encode());
        }
        url
    }

    fn entity_url(&self, path: &str, id: &str) -> String {
        format!("{}{}/{}", self.base_url, path, id)
    }

    /// Read one page of a collection.
    ///
    /// The server reports the total matching count in the `total-items`
    /// header; when absent, the page length is used.
    pub async fn list<T: Resource>(&self, params: &QueryParams) -> Result<Page<T>, ApiError> {
        let url = self.collection_url(T::PATH, params);
        tracing::debug!(%url, "list request");
        let response = self.send(self.client.get(&url)).await?;
        let total = parse_total(
            response
                .headers()
                .get(TOTAL_ITEMS_HEADER)
                .and_then(|v| v.to_str().ok()),
        );
        let items: Vec<T> = decode(response).await?;
        let total = total.unwrap_or(items.len() as u64);
        Ok(Page { items, total })
    }

    pub async fn get_one<T: Resource>(&self, id: &str) -> Result<T, ApiError> {
        let url = self.entity_url(T::PATH, id);
        let response = self.send(self.client.get(&url)).await?;
        decode(response).await
    }

    pub async fn create<T: Resource, B: Serialize + ?Sized>(
        &self,
        payload: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, T::PATH);
        let request = self
            .client
            .post(&url)
            .header(IDEMPOTENCY_KEY_HEADER, Uuid::new_v4().to_string())
            .json(payload);
        let response = self.send(request).await?;
        decode(response).await
    }

    pub async fn update<T: Resource, B: Serialize + ?Sized>(
        &self,
        id: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let url = self.entity_url(T::PATH, id);
        let response = self.send(self.client.put(&url).json(payload)).await?;
        decode(response).await
    }

    pub async fn delete<T: Resource>(&self, id: &str) -> Result<(), ApiError> {
        let url = self.entity_url(T::PATH, id);
        self.send(self.client.delete(&url)).await?;
        Ok(())
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Network { source })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), message))
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

fn parse_total(header: Option<&str>) -> Option<u64> {
    header.and_then(|v| v.trim().parse().ok())
}
