//! Admin service — password-gated data wipe and CSV export.

use crate::ports::{AdminGateway, HostUi};

/// Prompt shown before wiping the data log.
pub const CLEAR_PROMPT: &str = "Enter admin password to clear the database:";

/// Notice shown after a successful wipe.
pub const CLEARED_NOTICE: &str = "Database has been cleared.";

/// Notice shown when the wipe request could not be completed.
pub const CLEAR_FAILED_NOTICE: &str = "Error clearing database.";

/// What happened to a [`AdminService::clear_database`] request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The operator dismissed the prompt or entered nothing; no request sent.
    Cancelled,
    /// The backend wiped its data; the host was asked to reload.
    Cleared,
    /// The backend refused, with its reason.
    Rejected(String),
    /// The request did not complete.
    Failed,
}

/// Application service for the operator actions.
///
/// Never touches gallery state: every result is reported through
/// [`HostUi::alert`] and the returned outcome.
pub struct AdminService<G, H> {
    gateway: G,
    host: H,
}

impl<G: AdminGateway, H: HostUi> AdminService<G, H> {
    /// Create a new service backed by the given gateway and host.
    pub fn new(gateway: G, host: H) -> Self {
        Self { gateway, host }
    }

    /// Prompt for the admin password and ask the backend to wipe its data.
    pub async fn clear_database(&self) -> ClearOutcome {
        let Some(password) = self
            .host
            .prompt(CLEAR_PROMPT)
            .await
            .filter(|password| !password.is_empty())
        else {
            tracing::debug!("clear database cancelled");
            return ClearOutcome::Cancelled;
        };

        match self.gateway.clear_data(&password).await {
            Ok(response) if response.is_cleared() => {
                tracing::info!("database cleared");
                self.host.alert(CLEARED_NOTICE);
                self.host.reload();
                ClearOutcome::Cleared
            }
            Ok(response) => {
                tracing::warn!(status = %response.status, "clear database rejected");
                self.host.alert(&response.status);
                ClearOutcome::Rejected(response.status)
            }
            Err(err) => {
                tracing::error!(error = %err, "clear database request failed");
                self.host.alert(CLEAR_FAILED_NOTICE);
                ClearOutcome::Failed
            }
        }
    }

    /// Send the host to the CSV export location.
    pub fn download_csv(&self) {
        let location = self.gateway.export_location();
        tracing::info!(%location, "downloading data log");
        self.host.navigate(&location);
    }
}
