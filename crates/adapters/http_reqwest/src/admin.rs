//! [`AdminGateway`] over HTTP.

use trapcam_app::ports::AdminGateway;
use trapcam_domain::admin::{ClearRequest, ClearResponse};
use trapcam_domain::error::TrapcamError;

use crate::client::{CLEAR_PATH, EXPORT_PATH, HttpBackend};
use crate::error::HttpError;

impl HttpBackend {
    async fn post_clear(&self, password: &str) -> Result<ClearResponse, HttpError> {
        let url = self.url(CLEAR_PATH);
        let response = self
            .client()
            .post(&url)
            .json(&ClearRequest {
                password: password.to_string(),
            })
            .send()
            .await?;

        // rejections come back as a non-2xx status with a `status` body
        let status = response.status();
        match response.json::<ClearResponse>().await {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(HttpError::Status { url, status }),
            Err(err) => Err(err.into()),
        }
    }
}

impl AdminGateway for HttpBackend {
    async fn clear_data(&self, password: &str) -> Result<ClearResponse, TrapcamError> {
        Ok(self.post_clear(password).await?)
    }

    fn export_location(&self) -> String {
        self.url(EXPORT_PATH)
    }
}
