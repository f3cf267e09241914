// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page — quick navigation and endpoint summary.

use dioxus::prelude::*;

use crate::Route;
use crate::state::AppState;

#[component]
pub fn Home() -> Element {
    let state = use_context::<Signal<AppState>>();

    rsx! {
        div {
            h1 { "Opsdeck" }
            p { style: "color: #666;", "Service status console" }

            // Quick actions
            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin: 24px 0;",
                QuickAction { to: Route::Services {}, label: "Services", icon: "\u{1F4CB}" }
                QuickAction { to: Route::Servers {}, label: "Servers", icon: "\u{1F5A5}" }
                QuickAction { to: Route::Settings {}, label: "Settings", icon: "\u{2699}" }
            }

            h2 { "Endpoint" }
            p { style: "color: #666; font-size: 14px;",
                "{state.read().config.api_base_url}"
            }
            {
                let term = state.read().config.filter_term.clone();
                rsx! {
                    if !term.is_empty() {
                        p { style: "color: #888; font-size: 13px;",
                            "Service filter: \"{term}\""
                        }
                    }
                }
            }

            // Status message
            if let Some(ref msg) = state.read().status_message {
                p { style: "color: #ff9500; font-size: 14px; margin-top: 12px;", "{msg}" }
            }
        }
    }
}

#[component]
fn QuickAction(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 24px 16px; border: 1px solid #e0e0e0; border-radius: 12px; text-decoration: none; color: #333; background: white;",
            span { style: "font-size: 32px; margin-bottom: 8px;", "{icon}" }
            span { style: "font-size: 14px;", "{label}" }
        }
    }
}
