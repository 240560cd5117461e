//! # trapcam-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ImageSource` — fetch a gallery's image list
//!   - `StatusSource` — fetch the station's clock/temperature reading
//!   - `AdminGateway` — wipe the data log, locate the CSV export
//!   - `RenderSink` / `StatusSink` — commit payloads to a visible surface
//!   - `HostUi` — prompts, alerts, reload and navigation of the host
//! - Define **driving/inbound ports** as use-case structs:
//!   - `GalleryController` — load, navigate and render galleries
//!   - `StatusService` — poll and display the station status
//!   - `AdminService` — clear the database, export CSV
//! - Orchestrate domain objects without knowing *how* IO or rendering works
//!
//! ## Dependency rule
//! Depends on `trapcam-domain` only (plus `tokio` for timers and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
