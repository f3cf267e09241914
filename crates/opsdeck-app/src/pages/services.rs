// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Services page — the filtered service collection.
//
// Renders exactly one of three states from the services slice: loading,
// failed, or the (possibly empty) filtered list.  The fetch is issued once
// per mount; Refresh issues a fresh one explicitly.

use std::sync::Arc;

use dioxus::prelude::*;

use opsdeck_core::types::Service;
use opsdeck_store::{FetchStatus, NameFilter, SliceState};

use crate::components::{ErrorMessage, HealthBadge, Loader};
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Services() -> Element {
    let svc = use_context::<AppServices>();
    let state = use_context::<Signal<AppState>>();
    let store = use_hook(|| svc.services_store());
    let mut slice = use_signal(|| store.snapshot());

    // Mirror the store into a signal for the lifetime of this page.
    // Snapshots arrive on a channel and are applied on the UI scheduler;
    // dropping the guard on unmount unsubscribes, so a fetch resolving
    // after navigation writes the store but not this page.
    let _observer = use_hook({
        let store = store.clone();
        move || {
            let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<SliceState<Service>>();
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

    // Issue the fetch exactly once per mount; re-renders do not re-run hooks.
    use_hook(|| {
        let svc = svc.clone();
        spawn(async move {
            svc.fetch_services().await;
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
            let filter = {
                let state = state.read();
                NameFilter::new(
                    state.config.filter_term.clone(),
                    state.config.filter_case_insensitive,
                )
            };
            let visible = filter.apply(&slice.read().items);
            rsx! {
                div {
                    div { style: "display: flex; justify-content: space-between; align-items: center;",
                        h1 { "Services" }
                        button {
                            style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 13px;",
                            onclick: {
                                let svc = svc.clone();
                                move |_| {
                                    let svc = svc.clone();
                                    spawn(async move {
                                        svc.fetch_services().await;
                                    });
                                }
                            },
                            "Refresh"
                        }
                    }

                    if !filter.term().is_empty() {
                        p { style: "color: #888; font-size: 13px;",
                            "Showing services matching \"{filter.term()}\""
                        }
                    }

                    if visible.is_empty() {
                        p { style: "text-align: center; color: #aaa; margin: 48px 0;",
                            "No services to show."
                        }
                    } else {
                        for service in visible.iter() {
                            ServiceRow { key: "{service.id}", service: service.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceRow(service: Service) -> Element {
    let updated = service
        .updated_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string());
    rsx! {
        div { style: "padding: 8px 16px; border-bottom: 1px solid #ddd;",
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                strong { "{service.name}" }
                HealthBadge { health: service.health }
            }
            if let Some(ref desc) = service.description {
                p { style: "color: #666; font-size: 14px; margin: 4px 0;", "{desc}" }
            }
            if let Some(ref ts) = updated {
                p { style: "color: #999; font-size: 12px;", "Updated {ts}" }
            }
        }
    }
}
