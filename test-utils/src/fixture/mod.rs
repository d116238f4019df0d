//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as the default
//! values of the factories. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let camp = fixture::camp::entity();
//!
//! let other = fixture::camp::entity_builder()
//!     .moniker("SEA2019")
//!     .build();
//! ```

pub mod camp;
pub mod speaker;
pub mod talk;

pub use camp::{entity as camp_entity, entity_builder as camp_entity_builder};
pub use speaker::{entity as speaker_entity, entity_builder as speaker_entity_builder};
pub use talk::{entity as talk_entity, entity_builder as talk_entity_builder};
