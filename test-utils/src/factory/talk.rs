//! Talk factory for creating test talk entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test talks for an existing camp and speaker.
pub struct TalkFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::talk::Model,
}

impl<'a> TalkFactory<'a> {
    /// Creates a new factory with defaults from `fixture::talk::entity()`.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `camp_id` - ID of the camp the talk belongs to
    /// - `speaker_id` - ID of the speaker giving the talk
    pub fn new(db: &'a DatabaseConnection, camp_id: i32, speaker_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::talk::entity_builder()
            .camp_id(camp_id)
            .speaker_id(speaker_id)
            .title(format!("Talk {}", id))
            .build();

        Self { db, entity }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.entity.level = level;
        self
    }

    /// Builds and inserts the talk entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::talk::Model)` - Created talk entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::talk::Model, DbErr> {
        let entity = self.entity;

        entity::talk::ActiveModel {
            id: ActiveValue::NotSet,
            camp_id: ActiveValue::Set(entity.camp_id),
            speaker_id: ActiveValue::Set(entity.speaker_id),
            title: ActiveValue::Set(entity.title),
            abstract_text: ActiveValue::Set(entity.abstract_text),
            level: ActiveValue::Set(entity.level),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a talk with default values for the given camp and speaker.
///
/// Shorthand for `TalkFactory::new(db, camp_id, speaker_id).build().await`.
pub async fn create_talk(
    db: &DatabaseConnection,
    camp_id: i32,
    speaker_id: i32,
) -> Result<entity::talk::Model, DbErr> {
    TalkFactory::new(db, camp_id, speaker_id).build().await
}
