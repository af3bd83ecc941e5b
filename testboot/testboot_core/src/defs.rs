// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Bootstrap error definitions and result type alias.

use thiserror::Error;

/// Errors produced while bringing up the bootstrap environment.
///
/// Running the framework itself cannot fail from the bootstrap's point of
/// view; everything here is init plumbing that runs before any test does.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum TestbootError {
    /// Returned when the global logger cannot be installed.
    #[error("failed to install the global logger")]
    LoggerInstall,
}

/// Result type alias for bootstrap operations using [`TestbootError`].
pub type TestbootResult<T> = Result<T, TestbootError>;
