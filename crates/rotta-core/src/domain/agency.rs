use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pillar::{AgencyPillars, Pillar};
use crate::error::DomainError;

/// Agency entity - the tenant that owns check-ins and posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agency {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub description: String,
    pub pillars: Option<AgencyPillars>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Agency {
    /// Create a new agency. Name and city are required.
    pub fn new(name: &str, city: &str, description: &str) -> Result<Self, DomainError> {
        let (name, city) = required_identity(name, city)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            city,
            description: description.trim().to_string(),
            pillars: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace name, city and description. Pillars are kept.
    pub fn update_profile(
        &mut self,
        name: &str,
        city: &str,
        description: &str,
    ) -> Result<(), DomainError> {
        let (name, city) = required_identity(name, city)?;
        self.name = name;
        self.city = city;
        self.description = description.trim().to_string();
        self.updated_at = Utc::now();
        Ok(())
    }

    /// The default tenant created on first use, before onboarding.
    pub fn placeholder() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: "Agenzia".to_string(),
            city: "Milano".to_string(),
            description: String::new(),
            pillars: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_pillars(&self) -> bool {
        self.pillars.as_ref().is_some_and(AgencyPillars::is_complete)
    }

    pub fn set_pillars(&mut self, pillars: AgencyPillars) {
        self.pillars = Some(pillars);
        self.updated_at = Utc::now();
    }

    /// Pillar text handed to the copy generator: the bare tag, or the tag with
    /// the agency's own description when one is configured.
    pub fn pillar_brief(&self, pillar: &Pillar) -> String {
        let description = self
            .pillars
            .as_ref()
            .filter(|p| p.is_complete())
            .and_then(|p| p.describe(pillar));

        match description {
            Some(text) => format!("{}: {}", pillar.as_str(), text),
            None => pillar.as_str().to_string(),
        }
    }
}

fn required_identity(name: &str, city: &str) -> Result<(String, String), DomainError> {
    let name = name.trim();
    let city = city.trim();
    if name.is_empty() {
        return Err(DomainError::Validation("Agency name is required".to_string()));
    }
    if city.is_empty() {
        return Err(DomainError::Validation("Agency city is required".to_string()));
    }
    Ok((name.to_string(), city.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_name_and_city() {
        assert!(Agency::new("  ", "Milano", "").is_err());
        assert!(Agency::new("Immobiliare Rossi", "", "").is_err());

        let agency = Agency::new(" Immobiliare Rossi ", "Milano", "").unwrap();
        assert_eq!(agency.name, "Immobiliare Rossi");
        assert!(!agency.has_pillars());
    }

    #[test]
    fn test_update_profile_keeps_pillars() {
        let mut agency = Agency::placeholder();
        agency.set_pillars(AgencyPillars::new("Famiglia", "Affitti", "Isola").unwrap());

        agency
            .update_profile(" Casa Bianchi ", "Torino", " Dal 1982. ")
            .unwrap();
        assert_eq!(agency.name, "Casa Bianchi");
        assert_eq!(agency.city, "Torino");
        assert_eq!(agency.description, "Dal 1982.");
        assert!(agency.has_pillars());

        assert!(agency.update_profile("Casa Bianchi", " ", "").is_err());
        assert_eq!(agency.city, "Torino");
    }

    #[test]
    fn test_pillar_brief_without_configuration_is_tag() {
        let agency = Agency::placeholder();
        assert_eq!(agency.pillar_brief(&Pillar::ChiSiamo), "chi_siamo");
    }

    #[test]
    fn test_pillar_brief_uses_configured_description() {
        let mut agency = Agency::new("Immobiliare Rossi", "Milano", "").unwrap();
        agency.set_pillars(AgencyPillars::new("Tre generazioni", "Vendite", "Brera").unwrap());

        assert!(agency.has_pillars());
        assert_eq!(
            agency.pillar_brief(&Pillar::ChiSiamo),
            "chi_siamo: Tre generazioni"
        );
        assert_eq!(
            agency.pillar_brief(&Pillar::Custom("evento".into())),
            "evento"
        );
    }
}
