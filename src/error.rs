// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Unknown algorithm: '{0}'. Type --list to list all known algorithms.")]
    UnknownAlgorithm(String),

    #[error("Input file not found: '{}'", path.display())]
    InputNotFound { path: std::path::PathBuf },

    #[error("Failed to read input '{}': {source}", path.display())]
    InputUnreadable {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Backend operation failed: {0}")]
    BackendFailure(String),

    #[error("Failed to write output: {0}")]
    WriteFailure(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
