use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    data::SeaOrmRepository,
    model::speaker::{Speaker, SpeakerFields},
};

/// Speaker queries and mutations.
#[async_trait]
pub trait SpeakerRepository: Send + Sync {
    async fn get_all_speakers(&self) -> Result<Vec<Speaker>, DbErr>;

    /// Gets the distinct speakers giving talks at a camp.
    async fn get_speakers_by_moniker(&self, moniker: &str) -> Result<Vec<Speaker>, DbErr>;

    async fn get_speaker(&self, id: i32) -> Result<Option<Speaker>, DbErr>;

    async fn create_speaker(&self, fields: SpeakerFields) -> Result<Speaker, DbErr>;

    /// Overwrites the writable fields of a speaker.
    ///
    /// # Returns
    /// - `Ok(Speaker)` - The updated speaker
    /// - `Err(DbErr::RecordNotFound)` - No speaker exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    async fn update_speaker(&self, id: i32, fields: SpeakerFields) -> Result<Speaker, DbErr>;

    /// Deletes a speaker.
    ///
    /// # Returns
    /// - `Ok(())` - Speaker deleted (or didn't exist)
    /// - `Err(DbErr)` - Foreign key violation while talks still reference the speaker,
    ///   or other database error
    async fn delete_speaker(&self, id: i32) -> Result<(), DbErr>;
}

#[async_trait]
impl SpeakerRepository for SeaOrmRepository {
    async fn get_all_speakers(&self) -> Result<Vec<Speaker>, DbErr> {
        let speakers = entity::prelude::Speaker::find()
            .order_by_asc(entity::speaker::Column::Id)
            .all(&self.db)
            .await?;

        Ok(speakers.into_iter().map(Speaker::from_entity).collect())
    }

    async fn get_speakers_by_moniker(&self, moniker: &str) -> Result<Vec<Speaker>, DbErr> {
        let speakers = entity::prelude::Speaker::find()
            .join(JoinType::InnerJoin, entity::speaker::Relation::Talk.def())
            .join(JoinType::InnerJoin, entity::talk::Relation::Camp.def())
            .filter(entity::camp::Column::Moniker.eq(moniker))
            .distinct()
            .order_by_asc(entity::speaker::Column::Id)
            .all(&self.db)
            .await?;

        Ok(speakers.into_iter().map(Speaker::from_entity).collect())
    }

    async fn get_speaker(&self, id: i32) -> Result<Option<Speaker>, DbErr> {
        let speaker = entity::prelude::Speaker::find_by_id(id)
            .one(&self.db)
            .await?;

        Ok(speaker.map(Speaker::from_entity))
    }

    async fn create_speaker(&self, fields: SpeakerFields) -> Result<Speaker, DbErr> {
        let mut active_model = <entity::speaker::ActiveModel as Default>::default();
        set_fields(&mut active_model, fields);

        let entity = active_model.insert(&self.db).await?;

        Ok(Speaker::from_entity(entity))
    }

    async fn update_speaker(&self, id: i32, fields: SpeakerFields) -> Result<Speaker, DbErr> {
        let speaker = entity::prelude::Speaker::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Speaker with id {} not found",
                id
            )))?;

        let mut active_model: entity::speaker::ActiveModel = speaker.into();
        set_fields(&mut active_model, fields);

        let entity = active_model.update(&self.db).await?;

        Ok(Speaker::from_entity(entity))
    }

    async fn delete_speaker(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Speaker::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(())
    }
}

fn set_fields(active_model: &mut entity::speaker::ActiveModel, fields: SpeakerFields) {
    active_model.first_name = ActiveValue::Set(fields.first_name);
    active_model.last_name = ActiveValue::Set(fields.last_name);
    active_model.middle_name = ActiveValue::Set(fields.middle_name);
    active_model.company = ActiveValue::Set(fields.company);
    active_model.company_url = ActiveValue::Set(fields.company_url);
    active_model.blog_url = ActiveValue::Set(fields.blog_url);
    active_model.twitter = ActiveValue::Set(fields.twitter);
    active_model.git_hub = ActiveValue::Set(fields.git_hub);
}
