//! Speaker domain model and its conversions.

use crate::{
    model::speaker::{SpeakerDto, SpeakerTargetDto},
    server::error::AppError,
};

/// Maximum length of a speaker's first and last name.
pub const MAX_NAME_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Speaker {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub git_hub: Option<String>,
}

impl Speaker {
    /// Converts an entity model to a speaker at the data layer boundary.
    pub fn from_entity(entity: entity::speaker::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            middle_name: entity.middle_name,
            company: entity.company,
            company_url: entity.company_url,
            blog_url: entity.blog_url,
            twitter: entity.twitter,
            git_hub: entity.git_hub,
        }
    }

    pub fn into_dto(self) -> SpeakerDto {
        SpeakerDto {
            speaker_id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            middle_name: self.middle_name,
            company: self.company,
            company_url: self.company_url,
            blog_url: self.blog_url,
            twitter: self.twitter,
            git_hub: self.git_hub,
        }
    }
}

/// Client-writable speaker fields, used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerFields {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub git_hub: Option<String>,
}

impl SpeakerFields {
    /// Validates and converts the writable speaker shape.
    ///
    /// # Returns
    /// - `Ok(SpeakerFields)` - First and last name present and within length
    /// - `Err(AppError::Validation)` - A name is blank or longer than 50 characters
    pub fn from_dto(dto: SpeakerTargetDto) -> Result<Self, AppError> {
        check_name("FirstName", &dto.first_name)?;
        check_name("LastName", &dto.last_name)?;

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            middle_name: dto.middle_name,
            company: dto.company,
            company_url: dto.company_url,
            blog_url: dto.blog_url,
            twitter: dto.twitter,
            git_hub: dto.git_hub,
        })
    }
}

fn check_name(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("The {} field is required.", field)));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "The field {} must be a string with a maximum length of {}.",
            field, MAX_NAME_LENGTH
        )));
    }
    Ok(())
}
