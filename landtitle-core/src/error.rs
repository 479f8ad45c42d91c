//! Error types for landtitle-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{OrgId, TitleId};

/// Failures raised by a [`crate::store::StateStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure, annotated with the path involved.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A ledger file name that is not a key digest.
    #[error("invalid ledger entry name '{name}'")]
    InvalidKey { name: String },

    /// A ledger entry file whose contents cannot be read back.
    #[error("corrupt ledger entry at {path}: {reason}")]
    CorruptEntry { path: PathBuf, reason: String },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or pass --home")]
    HomeNotFound,

    /// Failure reported by a non-filesystem backend.
    #[error("{0}")]
    Backend(String),
}

/// Convenience constructor for [`StoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.into(),
        source,
    }
}

/// Failures resolving the caller's organization credential.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("no caller organization configured")]
    Missing,
}

/// All errors that can arise from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Create was called with an identifier that is already stored.
    #[error("land title {id} already exists")]
    AlreadyExists { id: TitleId },

    #[error("land title {id} does not exist")]
    NotFound { id: TitleId },

    /// The caller's organization is not the record's authorizing organization.
    #[error("access denied: only organization {expected} may perform this action")]
    AccessDenied { expected: OrgId, caller: OrgId },

    /// JSON has no representation for NaN or infinities.
    #[error("cannot encode land title {id}: property value {value} is not a finite number")]
    NonFiniteValue { id: TitleId, value: f64 },

    #[error("failed to encode land title {id}: {source}")]
    Encode {
        id: TitleId,
        #[source]
        source: serde_json::Error,
    },

    /// Stored bytes under `key` are not a valid land title.
    #[error("failed to decode land title at key '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("state store error: {0}")]
    Store(#[from] StoreError),

    #[error("failed to resolve caller organization: {0}")]
    Identity(#[from] IdentityError),
}

/// Coarse classification of a [`RegistryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    AccessDenied,
    Serialization,
    Store,
    Identity,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::AlreadyExists { .. } => ErrorKind::Conflict,
            RegistryError::NotFound { .. } => ErrorKind::NotFound,
            RegistryError::AccessDenied { .. } => ErrorKind::AccessDenied,
            RegistryError::NonFiniteValue { .. }
            | RegistryError::Encode { .. }
            | RegistryError::Decode { .. } => ErrorKind::Serialization,
            RegistryError::Store(_) => ErrorKind::Store,
            RegistryError::Identity(_) => ErrorKind::Identity,
        }
    }
}
