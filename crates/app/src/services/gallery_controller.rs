//! Gallery controller — loads image lists into the registry and keeps the
//! render sink in step with every change.

use std::sync::{Mutex, MutexGuard, PoisonError};

use trapcam_domain::display::DisplayPayload;
use trapcam_domain::error::TrapcamError;
use trapcam_domain::gallery::{GalleryRegistry, GalleryState};

use crate::ports::{ImageSource, RenderSink};

/// Where a gallery's image list is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySource {
    pub gallery_id: String,
    pub endpoint: String,
}

impl GallerySource {
    pub fn new(gallery_id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            gallery_id: gallery_id.into(),
            endpoint: endpoint.into(),
        }
    }
}

/// Result of a single [`GalleryController::load_images`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The gallery now holds this many images and was re-rendered.
    Loaded(usize),
    /// The source answered with no images; the gallery kept its state.
    EmptyResult,
    /// The source could not be reached or decoded; the gallery kept its state.
    FetchFailed,
}

/// Application service driving the galleries of one session.
///
/// The registry lock is never held across an `.await`: a load fetches
/// first, then applies the list and renders under one lock acquisition.
/// Overlapping loads for the same gallery are not serialised, so the
/// response that resolves last wins.
pub struct GalleryController<S, R> {
    registry: Mutex<GalleryRegistry>,
    source: S,
    sink: R,
}

impl<S: ImageSource, R: RenderSink> GalleryController<S, R> {
    /// Create a controller owning `registry`, fetching through `source` and
    /// rendering into `sink`.
    pub fn new(registry: GalleryRegistry, source: S, sink: R) -> Self {
        Self {
            registry: Mutex::new(registry),
            source,
            sink,
        }
    }

    fn registry(&self) -> MutexGuard<'_, GalleryRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the image list at `endpoint` and install it in `gallery_id`.
    ///
    /// An empty answer or a fetch failure is logged and leaves the gallery
    /// untouched; neither is returned as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::UnknownGallery`] (before any request is made)
    /// when `gallery_id` is not registered.
    pub async fn load_images(
        &self,
        gallery_id: &str,
        endpoint: &str,
    ) -> Result<LoadOutcome, TrapcamError> {
        self.registry().get(gallery_id)?;

        let images = match self.source.fetch_images(endpoint).await {
            Ok(listing) => listing.into_images(),
            Err(err) => {
                tracing::error!(gallery = gallery_id, endpoint, error = %err, "failed to fetch images");
                return Ok(LoadOutcome::FetchFailed);
            }
        };

        if images.is_empty() {
            tracing::warn!(gallery = gallery_id, endpoint, "no images found");
            return Ok(LoadOutcome::EmptyResult);
        }

        let count = images.len();
        let mut registry = self.registry();
        registry.set_images(gallery_id, images)?;
        let payload = registry.display(gallery_id)?;
        self.sink.render(gallery_id, &payload);
        tracing::debug!(gallery = gallery_id, count, "gallery loaded");
        Ok(LoadOutcome::Loaded(count))
    }

    /// Load every source in order, returning one outcome per source.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::UnknownGallery`] for the first source naming
    /// an unregistered gallery; earlier sources stay loaded.
    pub async fn load_all(
        &self,
        sources: &[GallerySource],
    ) -> Result<Vec<LoadOutcome>, TrapcamError> {
        let mut outcomes = Vec::with_capacity(sources.len());
        for source in sources {
            outcomes.push(self.load_images(&source.gallery_id, &source.endpoint).await?);
        }
        Ok(outcomes)
    }

    /// Step the cursor of `gallery_id` and render the new selection.
    ///
    /// On an empty gallery the cursor stays put and the empty state is
    /// rendered.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::UnknownGallery`] when `gallery_id` is not registered.
    pub fn navigate(&self, gallery_id: &str, direction: i64) -> Result<DisplayPayload, TrapcamError> {
        let mut registry = self.registry();
        registry.advance(gallery_id, direction)?;
        let payload = registry.display(gallery_id)?;
        self.sink.render(gallery_id, &payload);
        Ok(payload)
    }

    /// Render the current selection of `gallery_id` without changing it.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::UnknownGallery`] when `gallery_id` is not registered.
    pub fn render(&self, gallery_id: &str) -> Result<DisplayPayload, TrapcamError> {
        let payload = self.registry().display(gallery_id)?;
        self.sink.render(gallery_id, &payload);
        Ok(payload)
    }

    /// Copy of the current state of `gallery_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::UnknownGallery`] when `gallery_id` is not registered.
    pub fn snapshot(&self, gallery_id: &str) -> Result<GalleryState, TrapcamError> {
        self.registry().get(gallery_id).cloned()
    }

    /// Registered gallery identifiers.
    pub fn gallery_ids(&self) -> Vec<String> {
        self.registry().ids().map(str::to_string).collect()
    }
}
