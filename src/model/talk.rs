use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::speaker::{SpeakerDto, SpeakerRefDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TalkDto {
    pub talk_id: i32,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub level: i32,
    /// Present only when speakers were requested.
    pub speaker: Option<SpeakerDto>,
}

/// Writable shape of a talk used for create and update.
///
/// `speaker` accepts any object carrying a `speakerId`, so a full speaker read
/// shape sent back by a client binds as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TalkTargetDto {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub level: i32,
    pub speaker: Option<SpeakerRefDto>,
}
