//! Wire models shared by the HTTP API.
//!
//! These DTOs are the only shapes clients see. Server-side domain models are converted
//! into them at the controller boundary and never serialized directly.

pub mod api;
pub mod camp;
pub mod speaker;
pub mod talk;
