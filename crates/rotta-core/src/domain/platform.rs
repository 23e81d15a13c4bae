use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Social platform a post is written for.
///
/// Variant order is the canonical platform ordering used everywhere a set of
/// platforms is presented.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Facebook,
    Instagram,
    Linkedin,
    Tiktok,
    X,
}

impl Platform {
    /// Every platform, in canonical order.
    pub const ALL: [Platform; 5] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Tiktok,
        Platform::X,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
            Platform::X => "x",
        }
    }

    /// Lenient parse used at the edges: anything unrecognised is `Facebook`.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Whether the platform offers a native share deep link.
    pub fn supports_native_share(&self) -> bool {
        matches!(self, Platform::Facebook | Platform::X | Platform::Linkedin)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::Linkedin),
            "tiktok" => Ok(Platform::Tiktok),
            "x" | "twitter" => Ok(Platform::X),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_ord() {
        let mut sorted = Platform::ALL;
        sorted.sort();
        assert_eq!(sorted, Platform::ALL);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("LinkedIn".parse::<Platform>().unwrap(), Platform::Linkedin);
        assert_eq!(" x ".parse::<Platform>().unwrap(), Platform::X);
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_unknown_falls_back_to_facebook() {
        assert_eq!(Platform::parse_or_default("myspace"), Platform::Facebook);
        assert_eq!(Platform::parse_or_default("tiktok"), Platform::Tiktok);
    }

    #[test]
    fn test_native_share_support() {
        let native: Vec<_> = Platform::ALL
            .into_iter()
            .filter(Platform::supports_native_share)
            .collect();
        assert_eq!(native, vec![Platform::Facebook, Platform::Linkedin, Platform::X]);
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Platform::Linkedin).unwrap();
        assert_eq!(json, "\"linkedin\"");
    }
}
