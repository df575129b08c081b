//! Provides a client for the ocean digital-twin HTTP API.
//!
//! This module defines the `OceanClient` struct and its methods for fetching
//! geospatial measurement data (chlorophyll concentration and ocean current
//! vectors) as GeoJSON feature collections.

use crate::config::ClientConfig;
use crate::error::{AppError, Result};
use crate::models::{ChlorophyllFeatureCollection, CurrentsFeatureCollection, FeatureCollection};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, error, info};

/// An asynchronous client for the ocean digital-twin API.
///
/// Construct one instance at startup and pass it where needed; it owns a
/// preconfigured `reqwest::Client` (base URL, fixed timeout, JSON content
/// type) and holds no other state. Cloning the inner `reqwest::Client` is
/// cheap, so `OceanClient` can be shared behind a reference or cloned freely.
#[derive(Debug, Clone)]
pub struct OceanClient {
    client: Client,
    base_url: String,
}

impl OceanClient {
    /// Creates a new `OceanClient` from the provided configuration.
    ///
    /// Every request issued by the client carries a
    /// `Content-Type: application/json` header and is subject to the
    /// configured timeout.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetches chlorophyll concentration measurements as a GeoJSON feature collection.
    ///
    /// Corresponds to the `/chlorophyll` endpoint. When `raw_data` is true the
    /// query string `raw_data=true` is appended, requesting unaggregated
    /// measurements from the server; otherwise no query string is sent.
    ///
    /// Transport failures, non-success statuses, and malformed bodies are
    /// returned as distinct error variants; see
    /// [`get_chlorophyll_or_empty`](Self::get_chlorophyll_or_empty) for the
    /// non-failing variant.
    pub async fn get_chlorophyll(&self, raw_data: bool) -> Result<ChlorophyllFeatureCollection> {
        info!("Fetching chlorophyll data (raw_data: {})", raw_data);

        let url = format!("{}/chlorophyll", self.base_url);
        let mut request = self.client.get(&url);
        if raw_data {
            request = request.query(&[("raw_data", "true")]);
        }

        let response = request.send().await.map_err(|e| {
            error!("Error fetching chlorophyll data: {}", e);
            AppError::Api(e.into())
        })?;

        let response = response.error_for_status().map_err(|e| {
            error!(
                "Chlorophyll request failed with status {}: {}",
                e.status()
                    .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
                e
            );
            AppError::Api(e.into())
        })?;

        let body = response.text().await.map_err(|e| {
            error!("Error reading chlorophyll response body: {}", e);
            AppError::Api(e.into())
        })?;
        let collection: ChlorophyllFeatureCollection =
            serde_json::from_str(&body).map_err(|e| {
                error!("Error parsing chlorophyll response JSON: {}", e);
                AppError::JsonParse(e.into())
            })?;

        debug!("Received {} chlorophyll features", collection.len());

        Ok(collection)
    }

    /// Like [`get_chlorophyll`](Self::get_chlorophyll), but never fails:
    /// any error is logged and replaced by the empty feature collection.
    ///
    /// Callers that need to distinguish "no data" from "fetch failed" should
    /// use the `Result`-returning variant instead.
    pub async fn get_chlorophyll_or_empty(&self, raw_data: bool) -> ChlorophyllFeatureCollection {
        match self.get_chlorophyll(raw_data).await {
            Ok(collection) => collection,
            Err(e) => {
                error!("Falling back to empty chlorophyll collection: {}", e);
                FeatureCollection::empty()
            },
        }
    }

    /// Fetches ocean current vector measurements as a GeoJSON feature collection.
    ///
    /// Corresponds to the `/currents` endpoint; same contract as
    /// [`get_chlorophyll`](Self::get_chlorophyll), with two velocity
    /// components per feature instead of one concentration value.
    pub async fn get_currents(&self, raw_data: bool) -> Result<CurrentsFeatureCollection> {
        info!("Fetching currents data (raw_data: {})", raw_data);

        let url = format!("{}/currents", self.base_url);
        let mut request = self.client.get(&url);
        if raw_data {
            request = request.query(&[("raw_data", "true")]);
        }

        let response = request.send().await.map_err(|e| {
            error!("Error fetching currents data: {}", e);
            AppError::Api(e.into())
        })?;

        let response = response.error_for_status().map_err(|e| {
            error!(
                "Currents request failed with status {}: {}",
                e.status()
                    .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
                e
            );
            AppError::Api(e.into())
        })?;

        let body = response.text().await.map_err(|e| {
            error!("Error reading currents response body: {}", e);
            AppError::Api(e.into())
        })?;
        let collection: CurrentsFeatureCollection = serde_json::from_str(&body).map_err(|e| {
            error!("Error parsing currents response JSON: {}", e);
            AppError::JsonParse(e.into())
        })?;

        debug!("Received {} current features", collection.len());

        Ok(collection)
    }

    /// Like [`get_currents`](Self::get_currents), but never fails:
    /// any error is logged and replaced by the empty feature collection.
    pub async fn get_currents_or_empty(&self, raw_data: bool) -> CurrentsFeatureCollection {
        match self.get_currents(raw_data).await {
            Ok(collection) => collection,
            Err(e) => {
                error!("Falling back to empty currents collection: {}", e);
                FeatureCollection::empty()
            },
        }
    }

    /// Issues GET `/count` and returns the raw response.
    ///
    /// The body is not interpreted and the status is not checked; transport
    /// errors propagate to the caller.
    pub async fn get_count(&self) -> Result<reqwest::Response> {
        let url = format!("{}/count", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response)
    }

    /// Issues PUT `/count` and returns the raw response.
    ///
    /// Same contract as [`get_count`](Self::get_count).
    pub async fn update_count(&self) -> Result<reqwest::Response> {
        let url = format!("{}/count", self.base_url);
        let response = self.client.put(&url).send().await?;
        Ok(response)
    }
}
