//! Display payloads handed to render sinks.

/// Text shown in place of an image when a gallery is empty.
pub const EMPTY_MESSAGE: &str = "No images to display";

/// What a render sink should show for one gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayPayload {
    /// An image with its file name.
    Image {
        image_path: String,
        filename_label: String,
    },
    /// The gallery has nothing to show.
    Empty,
}

impl DisplayPayload {
    /// Payload for `image_path`, labelled with its last `/`-separated segment.
    #[must_use]
    pub fn for_image(image_path: &str) -> Self {
        Self::Image {
            image_path: image_path.to_string(),
            filename_label: filename_of(image_path).to_string(),
        }
    }

    /// Path of the displayed image, `None` for the empty state.
    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        match self {
            Self::Image { image_path, .. } => Some(image_path),
            Self::Empty => None,
        }
    }
}

fn filename_of(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
