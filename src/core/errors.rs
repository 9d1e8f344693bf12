//! ERA-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::PathBuf;

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, ShowcaseError>;

/// Top-level error type for the era showcase core.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("[ERA-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[ERA-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[ERA-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[ERA-1101] era catalog is empty")]
    EmptyCatalog,

    #[error("[ERA-1102] malformed era catalog: {details}")]
    InvalidCatalog { details: String },

    #[error("[ERA-2001] era id {id} out of range for catalog of {len} entries")]
    OutOfRange { id: usize, len: usize },

    #[error("[ERA-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[ERA-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ShowcaseError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "ERA-1001",
            Self::MissingConfig { .. } => "ERA-1002",
            Self::ConfigParse { .. } => "ERA-1003",
            Self::EmptyCatalog => "ERA-1101",
            Self::InvalidCatalog { .. } => "ERA-1102",
            Self::OutOfRange { .. } => "ERA-2001",
            Self::Serialization { .. } => "ERA-2101",
            Self::Io { .. } => "ERA-3002",
        }
    }

    /// Whether the failure indicates controller or catalog misuse
    /// rather than a recoverable runtime condition.
    #[must_use]
    pub const fn is_programmer_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::EmptyCatalog | Self::InvalidCatalog { .. }
        )
    }
}

impl From<serde_json::Error> for ShowcaseError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for ShowcaseError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
