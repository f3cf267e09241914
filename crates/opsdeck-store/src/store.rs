// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Centralized fetch state for one remote collection.
//
// A `CollectionStore` owns a single `SliceState` and drives it through the
// Idle -> Loading -> Succeeded|Failed lifecycle.  Views observe it through
// `subscribe`; the returned guard unregisters on drop, so a view that
// unmounts mid-fetch stops receiving notifications while the fetch itself
// runs to completion and writes its terminal state.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, Weak};

use tracing::{debug, error, info};

use opsdeck_core::error::{OpsdeckError, Result};

use crate::slice::{FetchStatus, SliceState};

/// External data source for a collection.
///
/// The transport behind `get_collection` is opaque to the store; only the
/// success/failure contract matters.  Swapped for in-process fakes in tests.
pub trait CollectionSource<T>: Send + Sync {
    /// Fetch the full collection, in display order.
    fn get_collection(&self) -> impl Future<Output = Result<Vec<T>>> + Send;
}

type Callback<T> = Arc<dyn Fn(&SliceState<T>) + Send + Sync>;

struct StoreInner<T> {
    state: SliceState<T>,
    subscribers: HashMap<u64, Callback<T>>,
    next_subscriber: u64,
}

/// Thread-safe store for one collection slice.
///
/// Cheaply cloneable; all clones share the same slice.  The slice is
/// mutated only through [`fetch`](CollectionStore::fetch), which performs
/// the lifecycle transitions and notifies subscribers after each one.
///
/// Stores are owned by the composition root and handed to whoever needs
/// them; there is deliberately no global instance.
pub struct CollectionStore<T> {
    inner: Arc<Mutex<StoreInner<T>>>,
}

impl<T> Clone for CollectionStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> CollectionStore<T> {
    /// Create a store with an empty slice in the `Idle` state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                state: SliceState::default(),
                subscribers: HashMap::new(),
                next_subscriber: 0,
            })),
        }
    }

    /// Snapshot of the current slice state.
    pub fn snapshot(&self) -> SliceState<T> {
        self.inner.lock().expect("store lock poisoned").state.clone()
    }

    /// Register an observer called after every state transition.
    ///
    /// The observer stops firing when the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe(
        &self,
        callback: impl Fn(&SliceState<T>) + Send + Sync + 'static,
    ) -> Subscription<T> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let id = inner.next_subscriber;
        inner.next_subscriber += 1;
        inner.subscribers.insert(id, Arc::new(callback));
        Subscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Fetch the collection from `source` and drive the slice through one
    /// lifecycle attempt.
    ///
    /// Transitions to `Loading` unless a fetch is already in flight, awaits
    /// the source, then writes the terminal state.  Source failures are
    /// absorbed into the `Failed` state here; nothing propagates to the
    /// caller.  Overlapping calls are not deduplicated: each one writes its
    /// own terminal state, so the last call to resolve wins.
    pub async fn fetch<S>(&self, source: &S)
    where
        S: CollectionSource<T>,
    {
        self.begin();
        match source.get_collection().await {
            Ok(items) => self.complete(items),
            Err(e) => self.fail(e),
        }
    }

    fn begin(&self) {
        let entered = {
            let mut inner = self.inner.lock().expect("store lock poisoned");
            if inner.state.status == FetchStatus::Loading {
                debug!("fetch already in flight, not re-entering loading");
                false
            } else {
                inner.state.status = FetchStatus::Loading;
                true
            }
        };
        if entered {
            self.notify();
        }
    }

    fn complete(&self, items: Vec<T>) {
        {
            let mut inner = self.inner.lock().expect("store lock poisoned");
            info!(count = items.len(), "collection fetch succeeded");
            inner.state.items = items;
            inner.state.error = None;
            inner.state.status = FetchStatus::Succeeded;
        }
        self.notify();
    }

    fn fail(&self, err: OpsdeckError) {
        {
            let mut inner = self.inner.lock().expect("store lock poisoned");
            error!(error = %err, "collection fetch failed");
            inner.state.error = Some(Arc::new(err));
            inner.state.status = FetchStatus::Failed;
        }
        self.notify();
    }

    // Callbacks run against a snapshot with the lock released, so an
    // observer may call back into the store.
    fn notify(&self) {
        let (state, callbacks) = {
            let inner = self.inner.lock().expect("store lock poisoned");
            let callbacks: Vec<Callback<T>> = inner.subscribers.values().cloned().collect();
            (inner.state.clone(), callbacks)
        };
        for callback in callbacks {
            callback(&state);
        }
    }
}

impl<T: Clone + Send + 'static> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer registration guard returned by [`CollectionStore::subscribe`].
///
/// Dropping it unregisters the observer.  Holds only a weak handle, so a
/// forgotten guard does not keep the store alive.
pub struct Subscription<T> {
    store: Weak<Mutex<StoreInner<T>>>,
    id: u64,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .lock()
                .expect("store lock poisoned")
                .subscribers
                .remove(&self.id);
        }
    }
}
