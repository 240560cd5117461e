//! # trapcam-domain
//!
//! Pure domain model for the trapcam station viewer.
//!
//! ## Responsibilities
//! - Error conventions shared by every layer
//! - Define **Galleries** (named image lists with a wrapping cursor) and the
//!   **registry** that owns them for a session
//! - Define **Display payloads** (what a render sink should show)
//! - Define **Status readings** (clock + temperature) and the capture schedule
//! - Define the **admin** wire types (clear-data request/response)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod admin;
pub mod display;
pub mod gallery;
pub mod status;
