// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared presentation components for the collection pages.

use dioxus::prelude::*;

use opsdeck_core::types::ServiceHealth;

/// Loading indicator shown while a collection fetch is in flight.
#[component]
pub fn Loader() -> Element {
    rsx! {
        p { style: "text-align: center; color: #888; margin: 48px 0;",
            "Loading\u{2026}"
        }
    }
}

/// Error indicator shown when a collection fetch failed.
///
/// The message is the failure payload's display text, unmodified.
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { style: "padding: 12px 16px; margin: 24px 0; border: 1px solid #ff3b30; border-radius: 8px; background: #fff5f5;",
            strong { style: "color: #ff3b30;", "Couldn't load data" }
            p { style: "color: #721c24; font-size: 14px; margin: 4px 0;", "{message}" }
        }
    }
}

/// Coloured health badge used on service and server rows.
#[component]
pub fn HealthBadge(health: ServiceHealth) -> Element {
    rsx! {
        span { style: "font-size: 12px; padding: 4px 8px; border-radius: 4px; text-transform: uppercase; font-weight: bold; background: {health_bg(health)}; color: {health_fg(health)};",
            "{health_label(health)}"
        }
    }
}

fn health_bg(h: ServiceHealth) -> &'static str {
    match h {
        ServiceHealth::Operational => "#d4edda",
        ServiceHealth::Degraded => "#fff3cd",
        ServiceHealth::Outage => "#f8d7da",
        ServiceHealth::Maintenance => "#e2e3e5",
        ServiceHealth::Unknown => "#f0f0f0",
    }
}

fn health_fg(h: ServiceHealth) -> &'static str {
    match h {
        ServiceHealth::Operational => "#155724",
        ServiceHealth::Degraded => "#856404",
        ServiceHealth::Outage => "#721c24",
        ServiceHealth::Maintenance => "#383d41",
        ServiceHealth::Unknown => "#333",
    }
}

fn health_label(h: ServiceHealth) -> &'static str {
    match h {
        ServiceHealth::Operational => "Operational",
        ServiceHealth::Degraded => "Degraded",
        ServiceHealth::Outage => "Outage",
        ServiceHealth::Maintenance => "Maintenance",
        ServiceHealth::Unknown => "Unknown",
    }
}
