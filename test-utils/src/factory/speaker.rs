//! Speaker factory for creating test speaker entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test speakers with customizable fields.
pub struct SpeakerFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::speaker::Model,
}

impl<'a> SpeakerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::speaker::entity_builder()
            .last_name(format!("Speaker {}", id))
            .build();

        Self { db, entity }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.entity.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.entity.last_name = last_name.into();
        self
    }

    pub fn company(mut self, company: Option<&str>) -> Self {
        self.entity.company = company.map(str::to_string);
        self
    }

    /// Builds and inserts the speaker entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::speaker::Model)` - Created speaker entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::speaker::Model, DbErr> {
        let entity = self.entity;

        entity::speaker::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(entity.first_name),
            last_name: ActiveValue::Set(entity.last_name),
            middle_name: ActiveValue::Set(entity.middle_name),
            company: ActiveValue::Set(entity.company),
            company_url: ActiveValue::Set(entity.company_url),
            blog_url: ActiveValue::Set(entity.blog_url),
            twitter: ActiveValue::Set(entity.twitter),
            git_hub: ActiveValue::Set(entity.git_hub),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a speaker with default values.
///
/// Shorthand for `SpeakerFactory::new(db).build().await`.
pub async fn create_speaker(db: &DatabaseConnection) -> Result<entity::speaker::Model, DbErr> {
    SpeakerFactory::new(db).build().await
}
