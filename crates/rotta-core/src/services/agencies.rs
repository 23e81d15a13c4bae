use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Agency, AgencyPillars};
use crate::error::DomainError;
use crate::ports::AgencyRepository;

/// Agency profile operations needed by the pipeline.
#[derive(Clone)]
pub struct AgencyService {
    agencies: Arc<dyn AgencyRepository>,
}

impl AgencyService {
    pub fn new(agencies: Arc<dyn AgencyRepository>) -> Self {
        Self { agencies }
    }

    pub async fn create(
        &self,
        name: &str,
        city: &str,
        description: &str,
    ) -> Result<Agency, DomainError> {
        let agency = Agency::new(name, city, description)?;
        let saved = self.agencies.insert(agency).await?;
        tracing::info!(agency_id = %saved.id, "Agency created");
        Ok(saved)
    }

    /// Create the default tenant for a caller that has none yet.
    pub async fn create_placeholder(&self) -> Result<Agency, DomainError> {
        let saved = self.agencies.insert(Agency::placeholder()).await?;
        tracing::info!(agency_id = %saved.id, "Placeholder agency created");
        Ok(saved)
    }

    pub async fn get(&self, agency_id: Uuid) -> Result<Agency, DomainError> {
        self.agencies
            .find_by_id(agency_id)
            .await?
            .ok_or_else(|| DomainError::agency_not_found(agency_id))
    }

    pub async fn update_profile(
        &self,
        agency_id: Uuid,
        name: &str,
        city: &str,
        description: &str,
    ) -> Result<Agency, DomainError> {
        let mut agency = self.get(agency_id).await?;
        agency.update_profile(name, city, description)?;
        let saved = self.agencies.update(agency).await?;
        tracing::info!(agency_id = %agency_id, "Agency profile updated");
        Ok(saved)
    }

    pub async fn configure_pillars(
        &self,
        agency_id: Uuid,
        pillars: AgencyPillars,
    ) -> Result<Agency, DomainError> {
        let mut agency = self.get(agency_id).await?;
        agency.set_pillars(pillars);
        let saved = self.agencies.update(agency).await?;
        tracing::info!(agency_id = %agency_id, "Agency pillars configured");
        Ok(saved)
    }
}
