// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Servers page — the server fleet, unfiltered.
//
// Same fetch lifecycle as the services page, against its own slice.

use std::sync::Arc;

use dioxus::prelude::*;

use opsdeck_core::types::ServerInfo;
use opsdeck_store::{FetchStatus, SliceState};

use crate::components::{ErrorMessage, HealthBadge, Loader};
use crate::services::app_services::AppServices;

#[component]
pub fn Servers() -> Element {
    let svc = use_context::<AppServices>();
    let store = use_hook(|| svc.servers_store());
    let mut slice = use_signal(|| store.snapshot());

    let _observer = use_hook({
        let store = store.clone();
        move || {
            let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<SliceState<ServerInfo>>();
            let sub = store.subscribe(move |snapshot| {
                let _ = tx.send(snapshot.clone());
            });
            spawn(async move {
                while let Some(snapshot) = rx.recv().await {
                    slice.set(snapshot);
                }
            });
            Arc::new(sub)
        }
    });

    use_hook(|| {
        let svc = svc.clone();
        spawn(async move {
            svc.fetch_servers().await;
        });
    });

    let status = slice.read().status;

    match status {
        FetchStatus::Loading => rsx! { Loader {} },
        FetchStatus::Failed => {
            let message = slice
                .read()
                .error
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown failure".into());
            rsx! {
                ErrorMessage { message }
            }
        }
        _ => {
            let servers = slice.read().items.clone();
            rsx! {
                div {
                    div { style: "display: flex; justify-content: space-between; align-items: center;",
                        h1 { "Servers" }
                        button {
                            style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 13px;",
                            onclick: {
                                let svc = svc.clone();
                                move |_| {
                                    let svc = svc.clone();
                                    spawn(async move {
                                        svc.fetch_servers().await;
                                    });
                                }
                            },
                            "Refresh"
                        }
                    }

                    if servers.is_empty() {
                        p { style: "text-align: center; color: #aaa; margin: 48px 0;",
                            "No servers to show."
                        }
                    } else {
                        for server in servers.iter() {
                            ServerRow { key: "{server.id}", server: server.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ServerRow(server: ServerInfo) -> Element {
    rsx! {
        div { style: "padding: 8px 16px; border-bottom: 1px solid #ddd;",
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                strong { "{server.hostname}" }
                HealthBadge { health: server.health }
            }
            if let Some(ref region) = server.region {
                p { style: "color: #666; font-size: 14px; margin: 4px 0;", "{region}" }
            }
        }
    }
}
