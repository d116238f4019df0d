use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::SeaOrmRepository,
    model::{
        camp::{Camp, CampFields},
        talk::Talk,
    },
};

/// Camp queries and mutations.
#[async_trait]
pub trait CampRepository: Send + Sync {
    /// Gets all camps, newest event first, optionally with talks and their speakers.
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, DbErr>;

    /// Gets the camps held on the given date.
    async fn get_camps_by_event_date(
        &self,
        event_date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, DbErr>;

    /// Gets a camp by moniker, `None` if no camp uses it.
    async fn get_camp(&self, moniker: &str, include_talks: bool)
        -> Result<Option<Camp>, DbErr>;

    /// Inserts a camp under the given moniker.
    ///
    /// # Returns
    /// - `Ok(Camp)` - The created camp with generated ID and no talks
    /// - `Err(DbErr)` - Unique violation if the moniker is taken, or other database error
    async fn create_camp(&self, moniker: String, fields: CampFields) -> Result<Camp, DbErr>;

    /// Overwrites the writable fields of a camp. The moniker never changes.
    ///
    /// # Returns
    /// - `Ok(Camp)` - The updated camp, without talks
    /// - `Err(DbErr::RecordNotFound)` - No camp exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    async fn update_camp(&self, id: i32, fields: CampFields) -> Result<Camp, DbErr>;

    /// Deletes a camp; its talks are removed by the cascading foreign key.
    async fn delete_camp(&self, id: i32) -> Result<(), DbErr>;
}

#[async_trait]
impl CampRepository for SeaOrmRepository {
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, DbErr> {
        let camps = entity::prelude::Camp::find()
            .order_by_desc(entity::camp::Column::EventDate)
            .order_by_asc(entity::camp::Column::Id)
            .all(&self.db)
            .await?;

        self.attach_talks(camps, include_talks).await
    }

    async fn get_camps_by_event_date(
        &self,
        event_date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, DbErr> {
        let camps = entity::prelude::Camp::find()
            .filter(entity::camp::Column::EventDate.eq(event_date))
            .order_by_asc(entity::camp::Column::Id)
            .all(&self.db)
            .await?;

        self.attach_talks(camps, include_talks).await
    }

    async fn get_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, DbErr> {
        let Some(camp) = entity::prelude::Camp::find()
            .filter(entity::camp::Column::Moniker.eq(moniker))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut camps = self.attach_talks(vec![camp], include_talks).await?;

        Ok(camps.pop())
    }

    async fn create_camp(&self, moniker: String, fields: CampFields) -> Result<Camp, DbErr> {
        let mut active_model = entity::camp::ActiveModel {
            moniker: ActiveValue::Set(moniker),
            ..Default::default()
        };
        set_fields(&mut active_model, fields);

        let entity = active_model.insert(&self.db).await?;

        Ok(Camp::from_entity(entity, Vec::new()))
    }

    async fn update_camp(&self, id: i32, fields: CampFields) -> Result<Camp, DbErr> {
        let camp = entity::prelude::Camp::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Camp with id {} not found", id)))?;

        let mut active_model: entity::camp::ActiveModel = camp.into();
        set_fields(&mut active_model, fields);

        let entity = active_model.update(&self.db).await?;

        Ok(Camp::from_entity(entity, Vec::new()))
    }

    async fn delete_camp(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Camp::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(())
    }
}

impl SeaOrmRepository {
    /// Converts camp entities, loading their talks and speakers in one query when asked.
    async fn attach_talks(
        &self,
        camps: Vec<entity::camp::Model>,
        include_talks: bool,
    ) -> Result<Vec<Camp>, DbErr> {
        if !include_talks || camps.is_empty() {
            return Ok(camps
                .into_iter()
                .map(|camp| Camp::from_entity(camp, Vec::new()))
                .collect());
        }

        let camp_ids: Vec<i32> = camps.iter().map(|camp| camp.id).collect();
        let rows = entity::prelude::Talk::find()
            .filter(entity::talk::Column::CampId.is_in(camp_ids))
            .order_by_asc(entity::talk::Column::Id)
            .find_also_related(entity::prelude::Speaker)
            .all(&self.db)
            .await?;

        let mut talks_by_camp: HashMap<i32, Vec<Talk>> = HashMap::new();
        for (talk, speaker) in rows {
            talks_by_camp
                .entry(talk.camp_id)
                .or_default()
                .push(Talk::from_entity(talk, speaker));
        }

        Ok(camps
            .into_iter()
            .map(|camp| {
                let talks = talks_by_camp.remove(&camp.id).unwrap_or_default();
                Camp::from_entity(camp, talks)
            })
            .collect())
    }
}

fn set_fields(active_model: &mut entity::camp::ActiveModel, fields: CampFields) {
    let location = fields.location;

    active_model.name = ActiveValue::Set(fields.name);
    active_model.event_date = ActiveValue::Set(fields.event_date);
    active_model.length = ActiveValue::Set(fields.length);
    active_model.venue_name = ActiveValue::Set(location.venue_name);
    active_model.address1 = ActiveValue::Set(location.address1);
    active_model.address2 = ActiveValue::Set(location.address2);
    active_model.address3 = ActiveValue::Set(location.address3);
    active_model.city_town = ActiveValue::Set(location.city_town);
    active_model.state_province = ActiveValue::Set(location.state_province);
    active_model.postal_code = ActiveValue::Set(location.postal_code);
    active_model.country = ActiveValue::Set(location.country);
}
