//! Display ports — sinks that own the visible surfaces.
//!
//! The application layer only computes payloads; committing them to a
//! screen, a terminal or a DOM node is the sink's job.

use trapcam_domain::display::DisplayPayload;
use trapcam_domain::status::StatusDisplay;

/// Shows the current selection of a gallery.
pub trait RenderSink {
    fn render(&self, gallery_id: &str, payload: &DisplayPayload);
}

/// Shows the latest status reading.
pub trait StatusSink {
    fn show_status(&self, status: &StatusDisplay);
}

impl<T: RenderSink> RenderSink for std::sync::Arc<T> {
    fn render(&self, gallery_id: &str, payload: &DisplayPayload) {
        (**self).render(gallery_id, payload);
    }
}

impl<T: StatusSink> StatusSink for std::sync::Arc<T> {
    fn show_status(&self, status: &StatusDisplay) {
        (**self).show_status(status);
    }
}
