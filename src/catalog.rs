//! # Breed Catalog Client Module
//!
//! This module wraps the upstream dog-breed catalog API behind a small
//! typed client. It exposes the three read operations the bot needs:
//! the full breed list, a random image, and an image filtered by breed id.
//!
//! The client performs no caching and no retries; every call is a live
//! request, so two consecutive commands may observe different catalog
//! snapshots.

use serde::Deserialize;
use tracing::debug;

// Header carrying the upstream API key
const API_KEY_HEADER: &str = "x-api-key";

/// Weight block of a breed record; `metric` is a free-form string holding
/// either a single number or a hyphen-separated range (e.g. `"4 - 6"`)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BreedWeight {
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub imperial: Option<String>,
}

/// One breed record from the upstream catalog
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Breed {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub life_span: Option<String>,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub weight: Option<BreedWeight>,
}

/// One entry of an image-search response
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BreedImage {
    pub url: String,
}

/// Failure modes of the upstream catalog
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// Transport-level failure (connection, TLS, ...)
    Request(String),
    /// Non-success HTTP status from the catalog
    Status(u16),
    /// Response body could not be decoded as the expected JSON shape
    Decode(String),
    /// An image search returned no candidates
    EmptyResult,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Request(msg) => write!(f, "Catalog request error: {msg}"),
            CatalogError::Status(code) => write!(f, "Catalog returned HTTP status {code}"),
            CatalogError::Decode(msg) => write!(f, "Catalog response decode error: {msg}"),
            CatalogError::EmptyResult => write!(f, "Catalog image search returned no results"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Client for the upstream breed catalog API
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch the full breed list.
    pub async fn fetch_all_breeds(&self) -> Result<Vec<Breed>, CatalogError> {
        let url = format!("{}/breeds", self.base_url);
        let breeds: Vec<Breed> = self.get_json(&url).await?;
        debug!(breed_count = breeds.len(), "Fetched breed catalog");
        Ok(breeds)
    }

    /// Fetch one random dog image.
    pub async fn fetch_random_image(&self) -> Result<BreedImage, CatalogError> {
        let url = format!("{}/images/search", self.base_url);
        self.first_image(&url).await
    }

    /// Fetch one image for a specific breed.
    pub async fn fetch_image_for_breed(&self, breed_id: u32) -> Result<BreedImage, CatalogError> {
        let url = format!("{}/images/search?breed_ids={breed_id}", self.base_url);
        self.first_image(&url).await
    }

    // The image-search endpoint answers with an array; an empty array is a
    // real upstream outcome and must not be indexed into.
    async fn first_image(&self, url: &str) -> Result<BreedImage, CatalogError> {
        let mut images: Vec<BreedImage> = self.get_json(url).await?;
        if images.is_empty() {
            return Err(CatalogError::EmptyResult);
        }
        Ok(images.remove(0))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, CatalogError> {
        debug!(url = %url, "Requesting catalog endpoint");

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}
