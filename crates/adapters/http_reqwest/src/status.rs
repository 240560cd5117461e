//! [`StatusSource`] over HTTP.

use trapcam_app::ports::StatusSource;
use trapcam_domain::error::TrapcamError;
use trapcam_domain::status::StatusReading;

use crate::client::{HttpBackend, STATUS_PATH};

impl StatusSource for HttpBackend {
    async fn fetch_status(&self) -> Result<StatusReading, TrapcamError> {
        Ok(self.get_json(STATUS_PATH).await?)
    }
}
