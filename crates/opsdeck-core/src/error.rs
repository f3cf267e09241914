// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Opsdeck.

use thiserror::Error;

/// Top-level error type for all Opsdeck operations.
#[derive(Debug, Error)]
pub enum OpsdeckError {
    // -- Remote API errors --
    #[error("network request failed: {0}")]
    Network(String),

    #[error("unexpected HTTP status {status} from {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("response decode failed: {0}")]
    Decode(String),

    // -- Configuration --
    #[error("configuration error: {0}")]
    Config(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, OpsdeckError>;
