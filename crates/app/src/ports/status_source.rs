//! Status source port — clock and temperature readings.

use std::future::Future;

use trapcam_domain::error::TrapcamError;
use trapcam_domain::status::StatusReading;

/// Produces the station's current status reading.
pub trait StatusSource {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusReading, TrapcamError>> + Send;
}

impl<T: StatusSource + Send + Sync> StatusSource for std::sync::Arc<T> {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusReading, TrapcamError>> + Send {
        (**self).fetch_status()
    }
}
