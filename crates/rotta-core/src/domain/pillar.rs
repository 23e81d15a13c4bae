use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Maximum length of a single configured pillar description.
pub const PILLAR_MAX_CHARS: usize = 280;

/// Content theme a post is written around.
///
/// The three standard tags are known; anything else is carried through as a
/// custom tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Pillar {
    /// Who we are.
    #[default]
    ChiSiamo,
    /// What we do.
    CosaFacciamo,
    /// Where we operate.
    DoveLoFacciamo,
    Custom(String),
}

impl Pillar {
    pub fn as_str(&self) -> &str {
        match self {
            Pillar::ChiSiamo => "chi_siamo",
            Pillar::CosaFacciamo => "cosa_facciamo",
            Pillar::DoveLoFacciamo => "dove_lo_facciamo",
            Pillar::Custom(tag) => tag,
        }
    }

    /// Parse a stored tag. Blank input yields the default pillar.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "" | "chi_siamo" => Pillar::ChiSiamo,
            "cosa_facciamo" => Pillar::CosaFacciamo,
            "dove_lo_facciamo" => Pillar::DoveLoFacciamo,
            other => Pillar::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pillar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Pillar::from_tag(&tag))
    }
}

/// An agency's own description of each standard pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyPillars {
    pub who_we_are: String,
    pub what_we_do: String,
    pub where_we_operate: String,
}

impl AgencyPillars {
    /// Build a validated pillar set. Each description is trimmed, required and
    /// capped at [`PILLAR_MAX_CHARS`].
    pub fn new(
        who_we_are: &str,
        what_we_do: &str,
        where_we_operate: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            who_we_are: validate_description("who_we_are", who_we_are)?,
            what_we_do: validate_description("what_we_do", what_we_do)?,
            where_we_operate: validate_description("where_we_operate", where_we_operate)?,
        })
    }

    pub fn is_complete(&self) -> bool {
        !self.who_we_are.trim().is_empty()
            && !self.what_we_do.trim().is_empty()
            && !self.where_we_operate.trim().is_empty()
    }

    /// The agency's description for a standard pillar.
    pub fn describe(&self, pillar: &Pillar) -> Option<&str> {
        match pillar {
            Pillar::ChiSiamo => Some(&self.who_we_are),
            Pillar::CosaFacciamo => Some(&self.what_we_do),
            Pillar::DoveLoFacciamo => Some(&self.where_we_operate),
            Pillar::Custom(_) => None,
        }
    }
}

fn validate_description(field: &str, value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > PILLAR_MAX_CHARS {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {PILLAR_MAX_CHARS} characters"
        )));
    }
    Ok(value.to_string())
}
