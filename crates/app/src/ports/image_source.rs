//! Image source port — retrieval of gallery image lists.

use std::future::Future;

use trapcam_domain::error::TrapcamError;
use trapcam_domain::gallery::ImageListing;

/// Produces the image list published at an endpoint.
pub trait ImageSource {
    /// Fetch the listing for `endpoint` (e.g. `/images`).
    ///
    /// Network and decoding failures are reported as [`TrapcamError::Fetch`].
    fn fetch_images(
        &self,
        endpoint: &str,
    ) -> impl Future<Output = Result<ImageListing, TrapcamError>> + Send;
}

impl<T: ImageSource + Send + Sync> ImageSource for std::sync::Arc<T> {
    fn fetch_images(
        &self,
        endpoint: &str,
    ) -> impl Future<Output = Result<ImageListing, TrapcamError>> + Send {
        (**self).fetch_images(endpoint)
    }
}
