// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — the composition root that owns the API client,
// the collection stores, and persisted configuration.
//
// The stores are injected into pages through this struct rather than living
// as globals, so tests (and future pages) can substitute their own sources.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::info;

use opsdeck_client::ApiClient;
use opsdeck_core::AppConfig;
use opsdeck_core::error::Result;
use opsdeck_core::types::{ServerInfo, Service};
use opsdeck_store::CollectionStore;

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// All fields are cheaply cloneable (Arc-wrapped or store handles) so that
/// the struct can be passed into closures and async blocks without lifetime
/// issues.
#[derive(Clone)]
pub struct AppServices {
    api: Arc<Mutex<Arc<ApiClient>>>,
    services: CollectionStore<Service>,
    servers: CollectionStore<ServerInfo>,
    config: Arc<Mutex<AppConfig>>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise all services.  Call once at app startup.
    ///
    /// Creates the data directory, loads the persisted config (or defaults),
    /// and builds the API client from it.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = load_config(&dir).unwrap_or_default();
        let api = build_client(&config)?;

        info!(api = %config.api_base_url, "app services initialised");

        Ok(Self {
            api: Arc::new(Mutex::new(Arc::new(api))),
            services: CollectionStore::new(),
            servers: CollectionStore::new(),
            config: Arc::new(Mutex::new(config)),
            data_dir: dir,
        })
    }

    /// Initialise with default config and no persistence.
    pub fn fallback() -> Result<Self> {
        let config = AppConfig::default();
        let api = build_client(&config)?;
        Ok(Self {
            api: Arc::new(Mutex::new(Arc::new(api))),
            services: CollectionStore::new(),
            servers: CollectionStore::new(),
            config: Arc::new(Mutex::new(config)),
            data_dir: std::env::temp_dir(),
        })
    }

    // -- Collections ---------------------------------------------------------

    /// Handle to the services collection store.
    pub fn services_store(&self) -> CollectionStore<Service> {
        self.services.clone()
    }

    /// Handle to the servers collection store.
    pub fn servers_store(&self) -> CollectionStore<ServerInfo> {
        self.servers.clone()
    }

    /// Fetch the service collection; the outcome lands in the services
    /// store, never in a return value.
    pub async fn fetch_services(&self) {
        let api = self.api();
        self.services.fetch(&*api).await;
    }

    /// Fetch the server collection into the servers store.
    pub async fn fetch_servers(&self) {
        let api = self.api();
        self.servers.fetch(&*api).await;
    }

    // -- API client ----------------------------------------------------------

    /// Current API client handle.
    pub fn api(&self) -> Arc<ApiClient> {
        Arc::clone(&self.api.lock().expect("api lock poisoned"))
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Update and persist the config, rebuilding the API client when the
    /// endpoint settings changed.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        let rebuild = {
            let mut guard = self.config.lock().expect("config lock poisoned");
            let rebuild = guard.api_base_url != config.api_base_url
                || guard.request_timeout_secs != config.request_timeout_secs;
            *guard = config.clone();
            rebuild
        };
        if rebuild {
            let api = build_client(config)?;
            *self.api.lock().expect("api lock poisoned") = Arc::new(api);
            info!(api = %config.api_base_url, "API client rebuilt");
        }
        persist_config(&self.data_dir, config)
    }

    /// Path to the data directory.
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

fn build_client(config: &AppConfig) -> Result<ApiClient> {
    ApiClient::new(
        &config.api_base_url,
        Duration::from_secs(config.request_timeout_secs),
    )
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_persists_and_reloads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            filter_term: "Voxco".into(),
            ..Default::default()
        };
        persist_config(dir.path(), &config).expect("persist");
        let loaded = load_config(dir.path()).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_config_yields_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_config(dir.path()).is_none());
    }

    #[test]
    fn corrupt_config_yields_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), "{not json").expect("write");
        assert!(load_config(dir.path()).is_none());
    }
}
