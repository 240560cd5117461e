//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TrapcamError`] via `#[from]` (or, for adapter errors, a manual
//! `From` impl that boxes the source).

/// Top-level error shared by the domain, the application layer and adapters.
#[derive(Debug, thiserror::Error)]
pub enum TrapcamError {
    /// An operation referenced a gallery that was never registered.
    #[error("unknown gallery")]
    UnknownGallery(#[from] UnknownGalleryError),

    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A network or decoding failure reported by an adapter.
    #[error("fetch failure: {0}")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The gallery identifier is not present in the registry.
///
/// Always caused by a misconfigured identifier, never by external input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("gallery `{id}` is not registered")]
pub struct UnknownGalleryError {
    pub id: String,
}

/// Invariant violations detected while building or projecting domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("gallery identifier must not be empty")]
    EmptyGalleryId,

    #[error("gallery `{0}` is registered twice")]
    DuplicateGalleryId(String),

    #[error("malformed status timestamp `{0}`")]
    MalformedTimestamp(String),

    #[error("capture hour {0} is outside 0..24")]
    InvalidCaptureHour(u32),
}
