// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fetch lifecycle state for one remote collection.

use std::sync::Arc;

use opsdeck_core::OpsdeckError;

/// Lifecycle states of an asynchronous collection fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch completed and the slice holds its full response.
    Succeeded,
    /// The last fetch failed — see the slice error field.
    Failed,
}

/// One slice of application state: a fetched collection plus its status.
///
/// `items` is only ever replaced wholesale when a fetch completes
/// successfully, in API response order.  `error` is only populated while
/// `status` is `Failed` and is overwritten by the next successful fetch.
#[derive(Debug, Clone)]
pub struct SliceState<T> {
    pub status: FetchStatus,
    pub items: Vec<T>,
    /// Failure payload from the data source, kept untouched for display.
    pub error: Option<Arc<OpsdeckError>>,
}

impl<T> Default for SliceState<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            items: Vec::new(),
            error: None,
        }
    }
}
