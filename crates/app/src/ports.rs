//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod admin;
pub mod display;
pub mod image_source;
pub mod status_source;

pub use admin::{AdminGateway, HostUi};
pub use display::{RenderSink, StatusSink};
pub use image_source::ImageSource;
pub use status_source::StatusSource;
