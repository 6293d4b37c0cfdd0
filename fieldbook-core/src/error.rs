// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Engine Error Types

use thiserror::Error;

/// Errors surfaced by the engine.
///
/// The computational stages are total over well-formed input; these variants
/// only cover caller contract violations and snapshot parsing.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A merge was requested for a group with no members.
    #[error("cannot merge an empty contact group")]
    EmptyGroup,

    /// A referenced contact is not part of the snapshot.
    #[error("contact not found: {0}")]
    ContactNotFound(String),

    /// Duplicate threshold outside (0, 1].
    #[error("invalid duplicate threshold {0}: must be in (0, 1]")]
    InvalidThreshold(f64),

    /// Layout canvas with non-positive or non-finite dimensions.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    /// Any other configuration problem.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Contact snapshot could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
