//! # trapcam-adapter-http-reqwest
//!
//! HTTP adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the outbound ports defined in `trapcam-app::ports`
//!   (`ImageSource`, `StatusSource`, `AdminGateway`) against the station
//!   backend
//! - Map JSON bodies into domain types
//! - Map transport and status failures into [`HttpError`], which converts
//!   into the domain's fetch failure
//!
//! ## Endpoints
//!
//! | Port | Method | Path |
//! |------|--------|------|
//! | `ImageSource` | `GET` | configured per gallery (e.g. `/images`) |
//! | `StatusSource` | `GET` | `/data` |
//! | `AdminGateway::clear_data` | `POST` | `/clear-data` |
//! | `AdminGateway::export_location` | — | `/download-data` |
//!
//! ## Dependency rule
//! Depends on `trapcam-app` (for port traits) and `trapcam-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod admin;
mod client;
mod error;
mod images;
mod status;

pub use client::{CLEAR_PATH, Config, EXPORT_PATH, HttpBackend, STATUS_PATH};
pub use error::HttpError;
