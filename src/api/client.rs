// src/api/client.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::error::ApiError;
use crate::api::types::{EvolutionChain, Pokemon, PokemonPage, Species, TypeDetail, TypeIndex};
use crate::config::{BASE_URL, HTTP_TIMEOUT};

/// One operation per upstream resource. The trait is the seam the aggregator
/// and controller depend on, so they can run against a stub backend in tests.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /pokemon?limit=&offset=` — the lightweight reference index.
    async fn entry_index(&self, limit: u32, offset: u32) -> Result<PokemonPage, ApiError>;

    /// `GET /pokemon/{idOrName}` — one full entry.
    async fn entry(&self, name_or_id: &str) -> Result<Pokemon, ApiError>;

    /// `GET /type` — the category index.
    async fn type_index(&self) -> Result<TypeIndex, ApiError>;

    /// `GET /type/{name}` — category member references.
    async fn type_detail(&self, name: &str) -> Result<TypeDetail, ApiError>;

    /// `GET /pokemon-species/{idOrName}` — species metadata, including the
    /// evolution graph locator.
    async fn species(&self, name_or_id: &str) -> Result<Species, ApiError>;

    /// `GET {url}` — the evolution graph behind an absolute locator.
    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain, ApiError>;
}

/// reqwest-backed adapter. Thin by design: one GET per call, non-success
/// status is a failure, the typed payload is returned unmodified. Retries,
/// if any, belong to the caller.
pub struct ApiClient {
    http: ReqwestClient,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(BASE_URL)
    }

    /// Adapter against a non-default base path (tests point this at a mock).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = ReqwestClient::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|err| ApiError::InvalidPayload {
                resource: "http client".to_string(),
                message: err.to_string(),
            })?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        url: &str,
    ) -> Result<T, ApiError> {
        debug!(%url, resource, "GET");
        let response = self.http.get(url).send().await.map_err(|err| {
            warn!(resource, %err, "request failed");
            ApiError::unavailable(resource)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(resource, status = status.as_u16(), "non-success response");
            return Err(ApiError::status(resource, status.as_u16()));
        }

        response.json::<T>().await.map_err(|err| ApiError::InvalidPayload {
            resource: resource.to_string(),
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl CatalogApi for ApiClient {
    async fn entry_index(&self, limit: u32, offset: u32) -> Result<PokemonPage, ApiError> {
        let url = format!("{}/pokemon?limit={limit}&offset={offset}", self.base_url);
        self.get_json("pokemon list", &url).await
    }

    async fn entry(&self, name_or_id: &str) -> Result<Pokemon, ApiError> {
        let url = format!("{}/pokemon/{name_or_id}", self.base_url);
        self.get_json(&format!("pokemon {name_or_id}"), &url).await
    }

    async fn type_index(&self) -> Result<TypeIndex, ApiError> {
        let url = format!("{}/type", self.base_url);
        self.get_json("type list", &url).await
    }

    async fn type_detail(&self, name: &str) -> Result<TypeDetail, ApiError> {
        let url = format!("{}/type/{name}", self.base_url);
        self.get_json(&format!("type {name}"), &url).await
    }

    async fn species(&self, name_or_id: &str) -> Result<Species, ApiError> {
        let url = format!("{}/pokemon-species/{name_or_id}", self.base_url);
        self.get_json(&format!("species {name_or_id}"), &url).await
    }

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain, ApiError> {
        // The locator comes verbatim from species metadata; it is absolute.
        self.get_json("evolution chain", url).await
    }
}
