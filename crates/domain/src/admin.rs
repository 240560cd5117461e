//! Admin wire types — the clear-data request and the backend's verdict.

use serde::{Deserialize, Serialize};

/// Status text the backend returns when the data log was wiped.
pub const CLEARED_STATUS: &str = "Database cleared";

/// Body posted to the clear-data endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearRequest {
    pub password: String,
}

/// Backend reply to a clear-data request.
///
/// Rejections (wrong password, …) carry a human-readable reason in `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearResponse {
    pub status: String,
}

impl ClearResponse {
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.status == CLEARED_STATUS
    }
}
