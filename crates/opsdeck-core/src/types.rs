// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Opsdeck status console.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a monitored service, assigned by the status API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub u64);

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a backend server, assigned by the status API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerId(pub u64);

impl std::fmt::Display for ServerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reported health of a service or server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceHealth {
    /// Fully operational.
    Operational,
    /// Up, but degraded (slow responses, partial outage).
    Degraded,
    /// Down.
    Outage,
    /// Deliberately offline for maintenance.
    Maintenance,
    /// The API did not report a health value.
    #[default]
    Unknown,
}

/// A monitored service as returned by the status API.
///
/// Only `id` and `name` are guaranteed to be present in every API payload;
/// the remaining fields default when the endpoint omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub health: ServiceHealth,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A backend server as returned by the status API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub id: ServerId,
    pub hostname: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub health: ServiceHealth,
}

/// An item that can live in a fetched collection.
///
/// Uniquely keyed within its collection and carrying a display name.  The
/// key drives stable row identity in list views; the display name is what
/// the name filter matches against.
pub trait CollectionItem {
    /// Stable unique key within the collection.
    fn key(&self) -> String;

    /// Name shown in list rows and matched by the name filter.
    fn display_name(&self) -> &str;
}

impl CollectionItem for Service {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl CollectionItem for ServerInfo {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn display_name(&self) -> &str {
        &self.hostname
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_decodes_from_minimal_payload() {
        let svc: Service = serde_json::from_str(r#"{"id":1,"name":"Voxco Support"}"#)
            .expect("minimal payload");
        assert_eq!(svc.id, ServiceId(1));
        assert_eq!(svc.name, "Voxco Support");
        assert_eq!(svc.health, ServiceHealth::Unknown);
        assert!(svc.description.is_none());
        assert!(svc.updated_at.is_none());
    }

    #[test]
    fn health_keyword_round_trip() {
        let json = serde_json::to_string(&ServiceHealth::Degraded).expect("encode");
        assert_eq!(json, r#""degraded""#);
        let back: ServiceHealth = serde_json::from_str(&json).expect("decode");
        assert_eq!(back, ServiceHealth::Degraded);
    }

    #[test]
    fn collection_item_keys_are_stable() {
        let svc: Service = serde_json::from_str(r#"{"id":42,"name":"Acme Billing"}"#)
            .expect("payload");
        assert_eq!(svc.key(), "42");
        assert_eq!(svc.display_name(), "Acme Billing");
    }
}
