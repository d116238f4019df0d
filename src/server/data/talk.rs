use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::{
    data::SeaOrmRepository,
    model::talk::{Talk, TalkFields},
};

/// Talk queries and mutations, scoped by the moniker of the owning camp.
#[async_trait]
pub trait TalkRepository: Send + Sync {
    /// Gets the talks of a camp ordered by ID, optionally with their speakers.
    async fn get_talks_by_moniker(
        &self,
        moniker: &str,
        include_speakers: bool,
    ) -> Result<Vec<Talk>, DbErr>;

    /// Gets one talk of a camp, `None` if the camp has no talk with that ID.
    async fn get_talk_by_moniker(
        &self,
        moniker: &str,
        id: i32,
        include_speakers: bool,
    ) -> Result<Option<Talk>, DbErr>;

    /// Inserts a talk for an existing camp and speaker.
    ///
    /// # Returns
    /// - `Ok(Talk)` - The created talk with its speaker loaded
    /// - `Err(DbErr)` - Foreign key violation if camp or speaker is gone, or other database error
    async fn create_talk(
        &self,
        camp_id: i32,
        speaker_id: i32,
        fields: TalkFields,
    ) -> Result<Talk, DbErr>;

    /// Overwrites the writable fields of a talk and, when given, its speaker.
    ///
    /// # Returns
    /// - `Ok(Talk)` - The updated talk with its speaker loaded
    /// - `Err(DbErr::RecordNotFound)` - No talk exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    async fn update_talk(
        &self,
        id: i32,
        fields: TalkFields,
        speaker_id: Option<i32>,
    ) -> Result<Talk, DbErr>;

    async fn delete_talk(&self, id: i32) -> Result<(), DbErr>;
}

#[async_trait]
impl TalkRepository for SeaOrmRepository {
    async fn get_talks_by_moniker(
        &self,
        moniker: &str,
        include_speakers: bool,
    ) -> Result<Vec<Talk>, DbErr> {
        let query = talks_of_camp(moniker).order_by_asc(entity::talk::Column::Id);

        if include_speakers {
            let rows = query
                .find_also_related(entity::prelude::Speaker)
                .all(&self.db)
                .await?;

            Ok(rows
                .into_iter()
                .map(|(talk, speaker)| Talk::from_entity(talk, speaker))
                .collect())
        } else {
            let rows = query.all(&self.db).await?;

            Ok(rows
                .into_iter()
                .map(|talk| Talk::from_entity(talk, None))
                .collect())
        }
    }

    async fn get_talk_by_moniker(
        &self,
        moniker: &str,
        id: i32,
        include_speakers: bool,
    ) -> Result<Option<Talk>, DbErr> {
        let query = talks_of_camp(moniker).filter(entity::talk::Column::Id.eq(id));

        if include_speakers {
            let row = query
                .find_also_related(entity::prelude::Speaker)
                .one(&self.db)
                .await?;

            Ok(row.map(|(talk, speaker)| Talk::from_entity(talk, speaker)))
        } else {
            let row = query.one(&self.db).await?;

            Ok(row.map(|talk| Talk::from_entity(talk, None)))
        }
    }

    async fn create_talk(
        &self,
        camp_id: i32,
        speaker_id: i32,
        fields: TalkFields,
    ) -> Result<Talk, DbErr> {
        let mut active_model = entity::talk::ActiveModel {
            camp_id: ActiveValue::Set(camp_id),
            speaker_id: ActiveValue::Set(speaker_id),
            ..Default::default()
        };
        set_fields(&mut active_model, fields);

        let entity = active_model.insert(&self.db).await?;

        self.with_speaker(entity).await
    }

    async fn update_talk(
        &self,
        id: i32,
        fields: TalkFields,
        speaker_id: Option<i32>,
    ) -> Result<Talk, DbErr> {
        let talk = entity::prelude::Talk::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Talk with id {} not found", id)))?;

        let mut active_model: entity::talk::ActiveModel = talk.into();
        set_fields(&mut active_model, fields);
        if let Some(speaker_id) = speaker_id {
            active_model.speaker_id = ActiveValue::Set(speaker_id);
        }

        let entity = active_model.update(&self.db).await?;

        self.with_speaker(entity).await
    }

    async fn delete_talk(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Talk::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(())
    }
}

impl SeaOrmRepository {
    async fn with_speaker(&self, talk: entity::talk::Model) -> Result<Talk, DbErr> {
        let speaker = entity::prelude::Speaker::find_by_id(talk.speaker_id)
            .one(&self.db)
            .await?;

        Ok(Talk::from_entity(talk, speaker))
    }
}

fn talks_of_camp(moniker: &str) -> Select<entity::prelude::Talk> {
    entity::prelude::Talk::find()
        .join(JoinType::InnerJoin, entity::talk::Relation::Camp.def())
        .filter(entity::camp::Column::Moniker.eq(moniker))
}

fn set_fields(active_model: &mut entity::talk::ActiveModel, fields: TalkFields) {
    active_model.title = ActiveValue::Set(fields.title);
    active_model.abstract_text = ActiveValue::Set(fields.abstract_text);
    active_model.level = ActiveValue::Set(fields.level);
}
