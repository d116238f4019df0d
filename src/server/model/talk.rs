//! Talk domain model and its conversions.

use crate::{
    model::talk::{TalkDto, TalkTargetDto},
    server::{error::AppError, model::speaker::Speaker},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Talk {
    pub id: i32,
    pub camp_id: i32,
    pub speaker_id: i32,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
    /// Loaded speaker, `None` when the query did not include speakers.
    pub speaker: Option<Speaker>,
}

impl Talk {
    /// Converts an entity model, with its speaker when one was loaded.
    pub fn from_entity(
        entity: entity::talk::Model,
        speaker: Option<entity::speaker::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            camp_id: entity.camp_id,
            speaker_id: entity.speaker_id,
            title: entity.title,
            abstract_text: entity.abstract_text,
            level: entity.level,
            speaker: speaker.map(Speaker::from_entity),
        }
    }

    pub fn into_dto(self) -> TalkDto {
        TalkDto {
            talk_id: self.id,
            title: self.title,
            abstract_text: self.abstract_text,
            level: self.level,
            speaker: self.speaker.map(Speaker::into_dto),
        }
    }
}

/// Client-writable talk fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TalkFields {
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
}

impl TalkFields {
    fn from_dto(dto: &TalkTargetDto) -> Result<Self, AppError> {
        if dto.title.trim().is_empty() {
            return Err(AppError::Validation("The Title field is required.".to_string()));
        }

        Ok(Self {
            title: dto.title.clone(),
            abstract_text: dto.abstract_text.clone(),
            level: dto.level,
        })
    }
}

/// Parameters for creating a talk in a camp.
#[derive(Debug, Clone)]
pub struct CreateTalkParam {
    pub moniker: String,
    pub fields: TalkFields,
    /// Speaker requested by the client; required, checked by the service.
    pub speaker_id: Option<i32>,
}

impl CreateTalkParam {
    pub fn from_dto(moniker: String, dto: TalkTargetDto) -> Result<Self, AppError> {
        Ok(Self {
            moniker,
            fields: TalkFields::from_dto(&dto)?,
            speaker_id: dto.speaker.map(|s| s.speaker_id),
        })
    }
}

/// Parameters for updating a talk in a camp.
#[derive(Debug, Clone)]
pub struct UpdateTalkParam {
    pub moniker: String,
    pub id: i32,
    pub fields: TalkFields,
    /// Speaker to switch to; ignored when it does not resolve.
    pub speaker_id: Option<i32>,
}

impl UpdateTalkParam {
    pub fn from_dto(moniker: String, id: i32, dto: TalkTargetDto) -> Result<Self, AppError> {
        Ok(Self {
            moniker,
            id,
            fields: TalkFields::from_dto(&dto)?,
            speaker_id: dto.speaker.map(|s| s.speaker_id),
        })
    }
}
