//! Database repository layer for camps, talks and speakers.
//!
//! The repository is exposed as capability traits (`CampRepository`, `TalkRepository`,
//! `SpeakerRepository`, combined as `Repository`) so services never see the ORM. The
//! SeaORM-backed `SeaOrmRepository` is the production implementation; it uses entity
//! models internally and returns domain models. Every mutating call is one committed
//! save and reports failure as a `DbErr`, never as a boolean.

pub mod camp;
pub mod speaker;
pub mod talk;

use sea_orm::DatabaseConnection;

pub use camp::CampRepository;
pub use speaker::SpeakerRepository;
pub use talk::TalkRepository;

/// The complete data-access surface used by the services.
pub trait Repository: CampRepository + TalkRepository + SpeakerRepository {}

impl<T> Repository for T where T: CampRepository + TalkRepository + SpeakerRepository {}

/// Repository backed by a SeaORM connection pool.
#[derive(Clone)]
pub struct SeaOrmRepository {
    db: DatabaseConnection,
}

impl SeaOrmRepository {
    /// Creates a repository over the given connection pool.
    ///
    /// `DatabaseConnection` clones share the pool, so the caller may keep its own handle.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[cfg(test)]
mod test;
