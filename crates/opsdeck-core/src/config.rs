// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the status API, without a trailing slash.
    pub api_base_url: String,
    /// Request timeout for API calls, in seconds.
    pub request_timeout_secs: u64,
    /// Substring a service name must contain to be listed.
    /// An empty term lists every service.
    pub filter_term: String,
    /// Ignore letter case when matching the filter term.
    pub filter_case_insensitive: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8600/api".into(),
            request_timeout_secs: 10,
            filter_term: String::new(),
            filter_case_insensitive: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = AppConfig {
            api_base_url: "https://status.example.net/api".into(),
            request_timeout_secs: 5,
            filter_term: "Voxco".into(),
            filter_case_insensitive: true,
        };
        let json = serde_json::to_string_pretty(&config).expect("encode");
        let back: AppConfig = serde_json::from_str(&json).expect("decode");
        assert_eq!(back, config);
    }
}
