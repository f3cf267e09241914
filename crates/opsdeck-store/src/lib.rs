// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Opsdeck — centralized fetch state for remote collections.

pub mod filter;
pub mod slice;
pub mod store;

pub use filter::NameFilter;
pub use slice::{FetchStatus, SliceState};
pub use store::{CollectionSource, CollectionStore, Subscription};
