//! Camp factory for creating test camp entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test camps with customizable fields.
///
/// Defaults come from `fixture::camp::entity()` with a unique moniker so several camps
/// can be created in the same test.
///
/// # Example
///
/// ```rust,ignore
/// let camp = CampFactory::new(&db)
///     .moniker("ATL2020")
///     .event_date(NaiveDate::from_ymd_opt(2020, 10, 18).unwrap())
///     .build()
///     .await?;
/// ```
pub struct CampFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::camp::Model,
}

impl<'a> CampFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::camp::entity_builder()
            .moniker(format!("CAMP{}", id))
            .name(format!("Code Camp {}", id))
            .build();

        Self { db, entity }
    }

    pub fn moniker(mut self, moniker: impl Into<String>) -> Self {
        self.entity.moniker = moniker.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn event_date(mut self, event_date: NaiveDate) -> Self {
        self.entity.event_date = event_date;
        self
    }

    pub fn venue_name(mut self, venue_name: Option<&str>) -> Self {
        self.entity.venue_name = venue_name.map(str::to_string);
        self
    }

    /// Builds and inserts the camp entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::camp::Model)` - Created camp entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::camp::Model, DbErr> {
        let entity = self.entity;

        entity::camp::ActiveModel {
            id: ActiveValue::NotSet,
            moniker: ActiveValue::Set(entity.moniker),
            name: ActiveValue::Set(entity.name),
            event_date: ActiveValue::Set(entity.event_date),
            length: ActiveValue::Set(entity.length),
            venue_name: ActiveValue::Set(entity.venue_name),
            address1: ActiveValue::Set(entity.address1),
            address2: ActiveValue::Set(entity.address2),
            address3: ActiveValue::Set(entity.address3),
            city_town: ActiveValue::Set(entity.city_town),
            state_province: ActiveValue::Set(entity.state_province),
            postal_code: ActiveValue::Set(entity.postal_code),
            country: ActiveValue::Set(entity.country),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a camp with default values and a unique moniker.
///
/// Shorthand for `CampFactory::new(db).build().await`.
pub async fn create_camp(db: &DatabaseConnection) -> Result<entity::camp::Model, DbErr> {
    CampFactory::new(db).build().await
}
