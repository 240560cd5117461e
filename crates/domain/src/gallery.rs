//! Gallery — a named, cyclically navigable list of image paths with a cursor.
//!
//! [`GalleryRegistry`] owns every gallery of a session. The set of
//! identifiers is fixed once the registry is built; loads replace a
//! gallery's image list and navigation only moves its cursor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::display::DisplayPayload;
use crate::error::{TrapcamError, UnknownGalleryError, ValidationError};

/// Identifier of the capture gallery.
pub const GALLERY: &str = "gallery";

/// Identifier of the inference (annotated captures) gallery.
pub const INFERENCE: &str = "inference";

/// Image list as returned by the backend.
///
/// A missing or `null` `images` field is treated the same as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageListing {
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl ImageListing {
    /// Build a listing from a sequence of paths.
    #[must_use]
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: Some(images.into_iter().map(Into::into).collect()),
        }
    }

    /// Consume the listing, yielding the paths in display order.
    #[must_use]
    pub fn into_images(self) -> Vec<String> {
        self.images.unwrap_or_default()
    }
}

/// Ordered image paths plus the index of the displayed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    images: Vec<String>,
    current_index: usize,
}

impl GalleryState {
    /// Image paths in display order.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Cursor position; only meaningful while the gallery is non-empty.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Replace the list and move the cursor back to the first image.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.images = images;
        self.current_index = 0;
    }

    /// Move the cursor by `direction` steps, wrapping at both ends.
    ///
    /// Returns the newly selected path, or `None` (cursor untouched) when the
    /// gallery holds no images.
    pub fn advance(&mut self, direction: i64) -> Option<&str> {
        if self.images.is_empty() {
            return None;
        }
        let len = self.images.len() as i128;
        let next = (self.current_index as i128 + i128::from(direction)).rem_euclid(len);
        // rem_euclid keeps `next` in 0..len
        self.current_index = usize::try_from(next).unwrap_or_default();
        self.current_image()
    }

    /// Path under the cursor, if any.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }

    /// Project the current selection to a display payload.
    #[must_use]
    pub fn display(&self) -> DisplayPayload {
        self.current_image()
            .map_or(DisplayPayload::Empty, DisplayPayload::for_image)
    }

    /// Set the cursor directly. Returns `false` (cursor untouched) when
    /// `index` is out of range.
    #[cfg(test)]
    pub(crate) fn select(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.current_index = index;
            true
        } else {
            false
        }
    }
}

/// Every gallery of a session, keyed by identifier.
#[derive(Debug, Clone)]
pub struct GalleryRegistry {
    order: Vec<String>,
    galleries: HashMap<String, GalleryState>,
}

impl Default for GalleryRegistry {
    /// Registry holding the two standard galleries, `gallery` and `inference`.
    fn default() -> Self {
        let order = vec![GALLERY.to_string(), INFERENCE.to_string()];
        let galleries = order
            .iter()
            .map(|id| (id.clone(), GalleryState::default()))
            .collect();
        Self { order, galleries }
    }
}

impl GalleryRegistry {
    /// Create a builder for constructing a [`GalleryRegistry`].
    #[must_use]
    pub fn builder() -> GalleryRegistryBuilder {
        GalleryRegistryBuilder::default()
    }

    /// Registered identifiers, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, gallery_id: &str) -> bool {
        self.galleries.contains_key(gallery_id)
    }

    /// Borrow the state of a gallery.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::UnknownGallery`] if `gallery_id` is not registered.
    pub fn get(&self, gallery_id: &str) -> Result<&GalleryState, TrapcamError> {
        self.galleries
            .get(gallery_id)
            .ok_or_else(|| unknown(gallery_id))
    }

    /// Mutably borrow the state of a gallery.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::UnknownGallery`] if `gallery_id` is not registered.
    pub fn get_mut(&mut self, gallery_id: &str) -> Result<&mut GalleryState, TrapcamError> {
        self.galleries
            .get_mut(gallery_id)
            .ok_or_else(|| unknown(gallery_id))
    }

    /// Replace a gallery's images and reset its cursor to 0.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::UnknownGallery`] if `gallery_id` is not registered.
    pub fn set_images(&mut self, gallery_id: &str, images: Vec<String>) -> Result<(), TrapcamError> {
        self.get_mut(gallery_id)?.set_images(images);
        Ok(())
    }

    /// Step a gallery's cursor, returning the newly selected path.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::UnknownGallery`] if `gallery_id` is not registered.
    pub fn advance(
        &mut self,
        gallery_id: &str,
        direction: i64,
    ) -> Result<Option<String>, TrapcamError> {
        Ok(self
            .get_mut(gallery_id)?
            .advance(direction)
            .map(str::to_string))
    }

    /// Path under a gallery's cursor.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::UnknownGallery`] if `gallery_id` is not registered.
    pub fn current_image(&self, gallery_id: &str) -> Result<Option<String>, TrapcamError> {
        Ok(self.get(gallery_id)?.current_image().map(str::to_string))
    }

    /// Display payload for a gallery's current selection.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::UnknownGallery`] if `gallery_id` is not registered.
    pub fn display(&self, gallery_id: &str) -> Result<DisplayPayload, TrapcamError> {
        Ok(self.get(gallery_id)?.display())
    }
}

fn unknown(gallery_id: &str) -> TrapcamError {
    UnknownGalleryError {
        id: gallery_id.to_string(),
    }
    .into()
}

/// Step-by-step builder for [`GalleryRegistry`].
#[derive(Debug, Default)]
pub struct GalleryRegistryBuilder {
    ids: Vec<String>,
}

impl GalleryRegistryBuilder {
    #[must_use]
    pub fn gallery(mut self, id: impl Into<String>) -> Self {
        self.ids.push(id.into());
        self
    }

    /// Consume the builder, validate, and return a [`GalleryRegistry`] whose
    /// galleries all start empty.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::Validation`] if an identifier is empty or
    /// registered more than once.
    pub fn build(self) -> Result<GalleryRegistry, TrapcamError> {
        let mut galleries = HashMap::with_capacity(self.ids.len());
        for id in &self.ids {
            if id.is_empty() {
                return Err(ValidationError::EmptyGalleryId.into());
            }
            if galleries.insert(id.clone(), GalleryState::default()).is_some() {
                return Err(ValidationError::DuplicateGalleryId(id.clone()).into());
            }
        }
        Ok(GalleryRegistry {
            order: self.ids,
            galleries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_registry() -> GalleryRegistry {
        let mut registry = GalleryRegistry::default();
        registry
            .set_images(
                GALLERY,
                vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()],
            )
            .unwrap();
        registry
    }

    fn state_with(len: usize) -> GalleryState {
        let mut state = GalleryState::default();
        state.set_images((0..len).map(|i| format!("img_{i}.jpg")).collect());
        state
    }

    #[test]
    fn should_register_standard_galleries_by_default() {
        let registry = GalleryRegistry::default();
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(ids, vec![GALLERY, INFERENCE]);
        assert!(registry.get(GALLERY).unwrap().is_empty());
        assert_eq!(registry.get(INFERENCE).unwrap().current_index(), 0);
    }

    #[test]
    fn should_build_registry_with_custom_ids() {
        let registry = GalleryRegistry::builder()
            .gallery("daylight")
            .gallery("night")
            .build()
            .unwrap();
        assert!(registry.contains("daylight"));
        assert!(registry.contains("night"));
        assert!(!registry.contains(GALLERY));
    }

    #[test]
    fn should_reject_empty_gallery_id() {
        let result = GalleryRegistry::builder().gallery("").build();
        assert!(matches!(
            result,
            Err(TrapcamError::Validation(ValidationError::EmptyGalleryId))
        ));
    }

    #[test]
    fn should_reject_duplicate_gallery_id() {
        let result = GalleryRegistry::builder()
            .gallery("gallery")
            .gallery("gallery")
            .build();
        assert!(matches!(
            result,
            Err(TrapcamError::Validation(ValidationError::DuplicateGalleryId(ref id))) if id == "gallery"
        ));
    }

    #[test]
    fn should_return_unknown_gallery_error_for_every_operation() {
        let mut registry = GalleryRegistry::default();
        assert!(matches!(
            registry.set_images("galery", vec![]),
            Err(TrapcamError::UnknownGallery(_))
        ));
        assert!(matches!(
            registry.advance("galery", 1),
            Err(TrapcamError::UnknownGallery(_))
        ));
        assert!(matches!(
            registry.current_image("galery"),
            Err(TrapcamError::UnknownGallery(_))
        ));
        assert!(matches!(
            registry.display("galery"),
            Err(TrapcamError::UnknownGallery(_))
        ));
    }

    #[test]
    fn should_walk_back_then_wrap_forward() {
        let mut registry = abc_registry();
        assert!(registry.get_mut(GALLERY).unwrap().select(2));

        let prev = registry.advance(GALLERY, -1).unwrap();
        assert_eq!(prev.as_deref(), Some("b.jpg"));
        assert_eq!(registry.get(GALLERY).unwrap().current_index(), 1);

        registry.advance(GALLERY, 1).unwrap();
        assert_eq!(registry.get(GALLERY).unwrap().current_index(), 2);
        let last = registry.advance(GALLERY, 1).unwrap();
        assert_eq!(registry.get(GALLERY).unwrap().current_index(), 0);
        assert_eq!(last.as_deref(), Some("a.jpg"));
    }

    #[test]
    fn should_visit_every_image_once_per_full_cycle() {
        for len in 1..=7 {
            for start in 0..len {
                let mut state = state_with(len);
                assert!(state.select(start));
                let mut seen: Vec<String> = (0..len)
                    .map(|_| state.advance(1).unwrap().to_string())
                    .collect();
                assert_eq!(state.current_index(), start);
                seen.sort();
                let mut expected = state.images().to_vec();
                expected.sort();
                assert_eq!(seen, expected);
            }
        }
    }

    #[test]
    fn should_keep_cursor_in_range_for_any_direction() {
        for len in 1..=5 {
            let mut state = state_with(len);
            for direction in [-1, 1, -7, 13, i64::MIN, i64::MAX, 0] {
                for _ in 0..len + 2 {
                    state.advance(direction);
                    assert!(state.current_index() < len);
                }
            }
        }
    }

    #[test]
    fn should_ignore_advance_on_empty_gallery() {
        let mut registry = GalleryRegistry::default();
        assert_eq!(registry.advance(INFERENCE, 1).unwrap(), None);
        assert_eq!(registry.advance(INFERENCE, -1).unwrap(), None);
        assert_eq!(registry.get(INFERENCE).unwrap().current_index(), 0);
    }

    #[test]
    fn should_reset_cursor_when_images_replaced() {
        let mut registry = abc_registry();
        registry.advance(GALLERY, 2).unwrap();

        registry
            .set_images(GALLERY, vec!["x.png".to_string(), "y.png".to_string()])
            .unwrap();
        assert_eq!(registry.get(GALLERY).unwrap().current_index(), 0);

        registry.advance(GALLERY, 1).unwrap();
        registry.set_images(GALLERY, vec![]).unwrap();
        assert_eq!(registry.get(GALLERY).unwrap().current_index(), 0);
    }

    #[test]
    fn should_have_no_current_image_after_empty_load() {
        let mut registry = abc_registry();
        registry.set_images(GALLERY, Vec::new()).unwrap();
        assert_eq!(registry.current_image(GALLERY).unwrap(), None);
        assert_eq!(registry.display(GALLERY).unwrap(), DisplayPayload::Empty);
    }

    #[test]
    fn should_not_move_cursor_when_selecting_out_of_range() {
        let mut state = state_with(2);
        assert!(!state.select(2));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn should_treat_missing_and_null_images_as_empty() {
        let missing: ImageListing = serde_json::from_str("{}").unwrap();
        let null: ImageListing = serde_json::from_str(r#"{"images": null}"#).unwrap();
        assert!(missing.into_images().is_empty());
        assert!(null.into_images().is_empty());

        let listing: ImageListing =
            serde_json::from_str(r#"{"images": ["static/a.jpg", "static/b.jpg"]}"#).unwrap();
        assert_eq!(listing.into_images(), vec!["static/a.jpg", "static/b.jpg"]);
    }
}
