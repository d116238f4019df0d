use crate::server::{
    data::Repository,
    error::AppError,
    link::LinkGenerator,
    model::speaker::{Speaker, SpeakerFields},
};

pub struct SpeakerService<'a> {
    repo: &'a dyn Repository,
}

impl<'a> SpeakerService<'a> {
    pub fn new(repo: &'a dyn Repository) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Speaker>, AppError> {
        Ok(self.repo.get_all_speakers().await?)
    }

    /// Gets the distinct speakers of a camp's talks; 404 when the camp does not exist
    pub async fn get_for_camp(&self, moniker: &str) -> Result<Vec<Speaker>, AppError> {
        if self.repo.get_camp(moniker, false).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Could not find camp with moniker: {}",
                moniker
            )));
        }

        let speakers = self.repo.get_speakers_by_moniker(moniker).await?;

        tracing::debug!("Found {} speakers for camp {}", speakers.len(), moniker);

        Ok(speakers)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Speaker, AppError> {
        self.repo
            .get_speaker(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a speaker and returns it with its location path
    pub async fn create(
        &self,
        fields: SpeakerFields,
        links: &LinkGenerator,
    ) -> Result<(Speaker, String), AppError> {
        let speaker = self.repo.create_speaker(fields).await?;

        let location = links.speaker(speaker.id).ok_or_else(|| {
            AppError::InternalError(format!("No link for speaker {}", speaker.id))
        })?;

        tracing::info!("Created speaker {}", speaker.id);

        Ok((speaker, location))
    }

    pub async fn update(&self, id: i32, fields: SpeakerFields) -> Result<Speaker, AppError> {
        if self.repo.get_speaker(id).await?.is_none() {
            return Err(not_found(id));
        }

        let speaker = self.repo.update_speaker(id, fields).await?;

        tracing::info!("Updated speaker {}", id);

        Ok(speaker)
    }

    /// Deletes a speaker
    ///
    /// # Returns
    /// - `Ok(())` - Speaker deleted
    /// - `Err(AppError::NotFound)` - No speaker with the ID
    /// - `Err(AppError::Persistence)` - Talks still reference the speaker
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if self.repo.get_speaker(id).await?.is_none() {
            return Err(not_found(id));
        }

        self.repo.delete_speaker(id).await?;

        tracing::info!("Deleted speaker {}", id);

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Could not find speaker with id: {}", id))
}
