//! Code Camp Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the code
//! camp API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories that insert entities with sensible defaults, and fixtures
//! that build entity models without touching a database.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_talk() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_camp_tables().build().await?;
//!     let db = test.database().await?;
//!
//!     let (camp, speaker, talk) = factory::helpers::create_talk_with_dependencies(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
