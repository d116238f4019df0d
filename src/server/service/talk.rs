use crate::server::{
    data::Repository,
    error::AppError,
    link::LinkGenerator,
    model::talk::{CreateTalkParam, Talk, UpdateTalkParam},
};

pub struct TalkService<'a> {
    repo: &'a dyn Repository,
}

impl<'a> TalkService<'a> {
    pub fn new(repo: &'a dyn Repository) -> Self {
        Self { repo }
    }

    /// Gets the talks of a camp; 404 when the camp does not exist
    pub async fn get_all(
        &self,
        moniker: &str,
        include_speakers: bool,
    ) -> Result<Vec<Talk>, AppError> {
        if self.repo.get_camp(moniker, false).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Could not find camp with moniker: {}",
                moniker
            )));
        }

        Ok(self
            .repo
            .get_talks_by_moniker(moniker, include_speakers)
            .await?)
    }

    pub async fn get_by_id(
        &self,
        moniker: &str,
        id: i32,
        include_speakers: bool,
    ) -> Result<Talk, AppError> {
        self.repo
            .get_talk_by_moniker(moniker, id, include_speakers)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Moniker {} has no talk with id: {}", moniker, id))
            })
    }

    /// Creates a talk in a camp
    ///
    /// Checks run in order and stop at the first failure: the camp exists, a speaker
    /// ID was given, the speaker exists. Nothing is saved unless all pass.
    ///
    /// # Returns
    /// - `Ok((Talk, String))` - The created talk with its speaker, and its location path
    /// - `Err(AppError::BadRequest)` - Camp missing, speaker ID missing or speaker unknown
    pub async fn create(
        &self,
        param: CreateTalkParam,
        links: &LinkGenerator,
    ) -> Result<(Talk, String), AppError> {
        let camp = self
            .repo
            .get_camp(&param.moniker, false)
            .await?
            .ok_or_else(|| AppError::BadRequest("Camp does not exist".to_string()))?;

        let speaker_id = param
            .speaker_id
            .ok_or_else(|| AppError::BadRequest("Speaker ID is required".to_string()))?;

        if self.repo.get_speaker(speaker_id).await?.is_none() {
            return Err(AppError::BadRequest(
                "Speaker could not be found with this SpeakerId".to_string(),
            ));
        }

        let talk = self
            .repo
            .create_talk(camp.id, speaker_id, param.fields)
            .await?;

        let location = links.talk(&camp.moniker, talk.id).ok_or_else(|| {
            AppError::InternalError(format!("No link for talk {} of {}", talk.id, camp.moniker))
        })?;

        tracing::info!("Created talk {} in camp {}", talk.id, camp.moniker);

        Ok((talk, location))
    }

    /// Overwrites the writable fields of a talk
    ///
    /// A speaker ID that does not resolve leaves the current speaker in place.
    pub async fn update(&self, param: UpdateTalkParam) -> Result<Talk, AppError> {
        if self
            .repo
            .get_talk_by_moniker(&param.moniker, param.id, false)
            .await?
            .is_none()
        {
            return Err(not_found(param.id));
        }

        let speaker_id = match param.speaker_id {
            Some(id) if self.repo.get_speaker(id).await?.is_some() => Some(id),
            Some(id) => {
                tracing::debug!("Keeping speaker of talk {}: speaker {} not found", param.id, id);
                None
            }
            None => None,
        };

        let talk = self
            .repo
            .update_talk(param.id, param.fields, speaker_id)
            .await?;

        tracing::info!("Updated talk {} in camp {}", talk.id, param.moniker);

        Ok(talk)
    }

    pub async fn delete(&self, moniker: &str, id: i32) -> Result<(), AppError> {
        if self
            .repo
            .get_talk_by_moniker(moniker, id, false)
            .await?
            .is_none()
        {
            return Err(not_found(id));
        }

        self.repo.delete_talk(id).await?;

        tracing::info!("Deleted talk {} from camp {}", id, moniker);

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Could not find talk with id: {}", id))
}
