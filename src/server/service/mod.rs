//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They work with domain models only, decide which missing resource is a 404 and which
//! is a 400, and check preconditions (unique moniker, existing camp and speaker) before
//! any save. Each service borrows the repository capability trait, so tests can swap
//! the store without touching this layer.

pub mod camp;
pub mod speaker;
pub mod talk;

#[cfg(test)]
mod test;
