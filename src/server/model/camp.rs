//! Camp domain model and its conversions.
//!
//! The camp location lives in the camp row, is nested as `Location` in the domain
//! model and flattened into `venue`/`location*` fields on the wire.

use chrono::NaiveDate;

use crate::{
    model::camp::CampDto,
    server::{error::AppError, model::talk::Talk},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camp {
    pub id: i32,
    pub moniker: String,
    pub name: String,
    pub event_date: NaiveDate,
    pub length: i32,
    pub location: Location,
    /// Talks of the camp; empty unless the query asked for them.
    pub talks: Vec<Talk>,
}

impl Camp {
    /// Converts an entity model and its already loaded talks.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::camp::Model, talks: Vec<Talk>) -> Self {
        Self {
            id: entity.id,
            moniker: entity.moniker,
            name: entity.name,
            event_date: entity.event_date,
            length: entity.length,
            location: Location {
                venue_name: entity.venue_name,
                address1: entity.address1,
                address2: entity.address2,
                address3: entity.address3,
                city_town: entity.city_town,
                state_province: entity.state_province,
                postal_code: entity.postal_code,
                country: entity.country,
            },
            talks,
        }
    }

    pub fn into_dto(self) -> CampDto {
        let location = self.location;

        CampDto {
            name: self.name,
            moniker: self.moniker,
            event_date: self.event_date,
            length: self.length,
            venue: location.venue_name,
            location_address1: location.address1,
            location_address2: location.address2,
            location_address3: location.address3,
            location_city_town: location.city_town,
            location_state_province: location.state_province,
            location_postal_code: location.postal_code,
            location_country: location.country,
            talks: self.talks.into_iter().map(Talk::into_dto).collect(),
        }
    }
}

/// Client-writable camp fields. Moniker and talks are not part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct CampFields {
    pub name: String,
    pub event_date: NaiveDate,
    pub length: i32,
    pub location: Location,
}

impl CampFields {
    fn from_dto(dto: CampDto) -> Result<Self, AppError> {
        if dto.name.trim().is_empty() {
            return Err(AppError::Validation("The Name field is required.".to_string()));
        }

        Ok(Self {
            name: dto.name,
            event_date: dto.event_date,
            length: dto.length,
            location: Location {
                venue_name: dto.venue,
                address1: dto.location_address1,
                address2: dto.location_address2,
                address3: dto.location_address3,
                city_town: dto.location_city_town,
                state_province: dto.location_state_province,
                postal_code: dto.location_postal_code,
                country: dto.location_country,
            },
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateCampParam {
    pub moniker: String,
    pub fields: CampFields,
}

impl CreateCampParam {
    pub fn from_dto(mut dto: CampDto) -> Result<Self, AppError> {
        let moniker = std::mem::take(&mut dto.moniker);

        Ok(Self {
            moniker,
            fields: CampFields::from_dto(dto)?,
        })
    }
}

/// Parameters for updating a camp. The moniker comes from the path, never the body.
#[derive(Debug, Clone)]
pub struct UpdateCampParam {
    pub moniker: String,
    pub fields: CampFields,
}

impl UpdateCampParam {
    pub fn from_dto(moniker: String, dto: CampDto) -> Result<Self, AppError> {
        Ok(Self {
            moniker,
            fields: CampFields::from_dto(dto)?,
        })
    }
}
