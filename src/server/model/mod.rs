//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Each entity/domain/wire pair has its
//! own explicit conversion function; nothing is mapped by matching field names.

pub mod camp;
pub mod speaker;
pub mod talk;
