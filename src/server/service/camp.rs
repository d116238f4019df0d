use chrono::NaiveDate;

use crate::server::{
    data::Repository,
    error::AppError,
    link::LinkGenerator,
    model::camp::{Camp, CreateCampParam, UpdateCampParam},
};

pub struct CampService<'a> {
    repo: &'a dyn Repository,
}

impl<'a> CampService<'a> {
    pub fn new(repo: &'a dyn Repository) -> Self {
        Self { repo }
    }

    /// Gets all camps, newest event first
    pub async fn get_all(&self, include_talks: bool) -> Result<Vec<Camp>, AppError> {
        Ok(self.repo.get_all_camps(include_talks).await?)
    }

    /// Gets the camps held on a date
    ///
    /// # Returns
    /// - `Ok(Vec<Camp>)` - At least one camp is held on the date
    /// - `Err(AppError::NotFound)` - No camp is held on the date
    pub async fn search_by_date(
        &self,
        event_date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        let camps = self
            .repo
            .get_camps_by_event_date(event_date, include_talks)
            .await?;

        tracing::debug!("Found {} camps on {}", camps.len(), event_date);

        if camps.is_empty() {
            return Err(AppError::NotFound(format!(
                "Could not find any camps on {}",
                event_date
            )));
        }

        Ok(camps)
    }

    pub async fn get_by_moniker(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Camp, AppError> {
        self.repo
            .get_camp(moniker, include_talks)
            .await?
            .ok_or_else(|| not_found(moniker))
    }

    /// Creates a camp after checking its moniker
    ///
    /// The moniker must be unused and must form a self link. Both checks run before
    /// anything is saved.
    ///
    /// # Returns
    /// - `Ok((Camp, String))` - The created camp and its location path
    /// - `Err(AppError::BadRequest)` - Moniker in use or unusable in a link
    /// - `Err(AppError::Persistence)` - The store rejected the save (concurrent duplicate)
    pub async fn create(
        &self,
        param: CreateCampParam,
        links: &LinkGenerator,
    ) -> Result<(Camp, String), AppError> {
        if self.repo.get_camp(&param.moniker, false).await?.is_some() {
            return Err(AppError::BadRequest(
                "This moniker is already in use".to_string(),
            ));
        }

        let location = links
            .camp(&param.moniker)
            .ok_or_else(|| AppError::BadRequest("Could not use current moniker".to_string()))?;

        let camp = self.repo.create_camp(param.moniker, param.fields).await?;

        tracing::info!("Created camp {} ({})", camp.moniker, camp.id);

        Ok((camp, location))
    }

    /// Overwrites the writable fields of the camp with the moniker
    pub async fn update(&self, param: UpdateCampParam) -> Result<Camp, AppError> {
        let existing = self
            .repo
            .get_camp(&param.moniker, false)
            .await?
            .ok_or_else(|| not_found(&param.moniker))?;

        let camp = self.repo.update_camp(existing.id, param.fields).await?;

        tracing::info!("Updated camp {}", camp.moniker);

        Ok(camp)
    }

    /// Deletes the camp with the moniker together with its talks
    pub async fn delete(&self, moniker: &str) -> Result<(), AppError> {
        let existing = self
            .repo
            .get_camp(moniker, false)
            .await?
            .ok_or_else(|| not_found(moniker))?;

        self.repo.delete_camp(existing.id).await?;

        tracing::info!("Deleted camp {}", moniker);

        Ok(())
    }
}

fn not_found(moniker: &str) -> AppError {
    AppError::NotFound(format!("Could not find camp with moniker: {}", moniker))
}
