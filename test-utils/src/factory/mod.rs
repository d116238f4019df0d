//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults sourced from the fixtures, reducing
//! boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let speaker = factory::create_speaker(&db).await?;
//! let camp = factory::camp::CampFactory::new(&db)
//!     .moniker("ATL2020")
//!     .build()
//!     .await?;
//! let talk = factory::create_talk(&db, camp.id, speaker.id).await?;
//! ```

pub mod camp;
pub mod helpers;
pub mod speaker;
pub mod talk;

pub use camp::create_camp;
pub use speaker::create_speaker;
pub use talk::create_talk;
