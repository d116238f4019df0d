//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through
//! axum's state extraction. Both fields are cheap to clone: the repository sits behind
//! an `Arc` and the link generator only holds the parsed application URL.

use std::sync::Arc;

use crate::server::{data::Repository, link::LinkGenerator};

#[derive(Clone)]
pub struct AppState {
    /// Data access for all resources.
    ///
    /// Production uses `SeaOrmRepository` over the SQLite pool; tests may substitute
    /// any other implementation of the capability traits.
    pub repository: Arc<dyn Repository>,

    /// Builds the `Location` header of created resources.
    pub links: LinkGenerator,
}

impl AppState {
    pub fn new(repository: Arc<dyn Repository>, links: LinkGenerator) -> Self {
        Self { repository, links }
    }
}
