// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by grouping and search.

/// Grouping was asked to run with an unusable configuration.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum GroupingError {
    /// The proximity threshold is negative, NaN, or infinite.
    #[error("proximity threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
}

/// A stack search could not run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Neither a container number nor a shipping agent was given.
    #[error("enter a container number or a shipping agent")]
    EmptyQuery,
}
