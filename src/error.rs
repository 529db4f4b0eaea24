// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised at the crate's boundaries.
//!
//! The distance functions themselves cannot fail. What can fail is getting
//! inputs to them: an absent string from JavaScript, a case file that does not
//! parse, a bound that is not a number.

use std::fmt;

/// Error type for everything outside the pure distance computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevError {
    /// An argument was absent or malformed.
    InvalidArgument { name: String, reason: String },
    /// A file could not be read.
    Io { path: String, message: String },
    /// A file was read but its contents are not a valid case set.
    Parse { path: String, message: String },
}

impl LevError {
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        LevError::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LevError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevError::InvalidArgument { name, reason } => {
                write!(f, "invalid argument `{}`: {}", name, reason)
            }
            LevError::Io { path, message } => {
                write!(f, "failed to read '{}': {}", path, message)
            }
            LevError::Parse { path, message } => {
                write!(f, "failed to parse '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for LevError {}
