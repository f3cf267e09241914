// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Async REST client for the status API.
//
// Plain GET requests against a configured base URL:
//   - GET {base}/services
//   - GET {base}/servers
//
// Transport failures map to `OpsdeckError::Network`, non-2xx responses to
// `OpsdeckError::HttpStatus`, and body decode failures to
// `OpsdeckError::Decode`.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use opsdeck_core::error::{OpsdeckError, Result};
use opsdeck_core::types::{ServerInfo, Service};
use opsdeck_store::CollectionSource;

/// Async client for the Opsdeck status API.
///
/// Each instance is bound to a single base URL, typically taken from the
/// persisted application config.  All request methods are async and require
/// a Tokio runtime.
pub struct ApiClient {
    /// Base URL without a trailing slash.
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Create a client for the given base URL.
    ///
    /// A trailing slash on `base_url` is tolerated and trimmed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OpsdeckError::Config(format!("HTTP client construction: {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The base URL this client is targeting.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the service collection.
    #[instrument(skip(self), fields(base = %self.base_url))]
    pub async fn get_services(&self) -> Result<Vec<Service>> {
        self.get_json("services").await
    }

    /// Fetch the server collection.
    #[instrument(skip(self), fields(base = %self.base_url))]
    pub async fn get_servers(&self) -> Result<Vec<ServerInfo>> {
        self.get_json("servers").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let endpoint = format!("{}/{}", self.base_url, path);
        debug!(endpoint = %endpoint, "sending GET");

        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| OpsdeckError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!(endpoint = %endpoint, status = status.as_u16(), "request rejected");
            return Err(OpsdeckError::HttpStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| OpsdeckError::Network(e.to_string()))?;
        debug!(endpoint = %endpoint, bytes = body.len(), "response received");
        decode_body(&body)
    }
}

/// Decode a response body, mapping serde failures to decode errors.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| OpsdeckError::Decode(e.to_string()))
}

impl CollectionSource<Service> for ApiClient {
    fn get_collection(&self) -> impl Future<Output = Result<Vec<Service>>> + Send {
        self.get_services()
    }
}

impl CollectionSource<ServerInfo> for ApiClient {
    fn get_collection(&self) -> impl Future<Output = Result<Vec<ServerInfo>>> + Send {
        self.get_servers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use opsdeck_core::types::{ServiceHealth, ServiceId};

    #[test]
    fn decodes_service_collection_in_order() {
        let body = r#"[{"id":1,"name":"Voxco Support"},{"id":2,"name":"Acme Billing"}]"#;
        let services: Vec<Service> = decode_body(body).expect("decode");
        let ids: Vec<ServiceId> = services.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![ServiceId(1), ServiceId(2)]);
        assert_eq!(services[0].name, "Voxco Support");
    }

    #[test]
    fn decodes_rich_service_payload() {
        let body = r#"[{
            "id": 9,
            "name": "Voxco CRM",
            "health": "degraded",
            "description": "Customer records",
            "updated_at": "2026-07-30T12:00:00Z"
        }]"#;
        let services: Vec<Service> = decode_body(body).expect("decode");
        assert_eq!(services[0].health, ServiceHealth::Degraded);
        assert_eq!(services[0].description.as_deref(), Some("Customer records"));
        assert!(services[0].updated_at.is_some());
    }

    #[test]
    fn decodes_server_collection() {
        let body = r#"[{"id":1,"hostname":"edge-01","region":"eu-west"}]"#;
        let servers: Vec<ServerInfo> = decode_body(body).expect("decode");
        assert_eq!(servers[0].hostname, "edge-01");
        assert_eq!(servers[0].region.as_deref(), Some("eu-west"));
        assert_eq!(servers[0].health, ServiceHealth::Unknown);
    }

    #[test]
    fn decode_failure_maps_to_decode_error() {
        let err = decode_body::<Vec<Service>>("{not json").expect_err("must fail");
        assert!(matches!(err, OpsdeckError::Decode(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client =
            ApiClient::new("http://127.0.0.1:8600/api/", Duration::from_secs(5)).expect("client");
        assert_eq!(client.base_url(), "http://127.0.0.1:8600/api");
    }
}
