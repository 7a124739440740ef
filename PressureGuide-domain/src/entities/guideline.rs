use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Medical standard whose thresholds are used to classify a reading.
///
/// The serialized tokens are a persisted contract shared with storage and
/// settings; they must not change.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Guideline {
    /// American Heart Association / American College of Cardiology (2017)
    #[default]
    #[serde(rename = "aha_acc")]
    AhaAcc,

    /// European Society of Cardiology / European Society of Hypertension
    #[serde(rename = "esc_esh")]
    EscEsh,

    /// Japanese Society of Hypertension
    #[serde(rename = "jsh")]
    Jsh,

    /// World Health Organization
    #[serde(rename = "who")]
    Who,
}

/// Errors raised by the strict guideline parser
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuidelineError {
    /// Token does not name a supported guideline
    #[error("Unknown guideline: {0}")]
    Unknown(String),
}

/// Outcome of resolving a guideline token with fallback
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct GuidelineSelection {
    /// Guideline that will be applied
    pub guideline: Guideline,

    /// True when the requested token was not recognised and AHA/ACC was used instead
    pub fell_back: bool,
}

impl Guideline {
    /// Every supported guideline, in table order
    pub fn all() -> [Guideline; 4] {
        [Guideline::AhaAcc, Guideline::EscEsh, Guideline::Jsh, Guideline::Who]
    }

    /// Stable storage token
    pub fn token(&self) -> &'static str {
        match self {
            Guideline::AhaAcc => "aha_acc",
            Guideline::EscEsh => "esc_esh",
            Guideline::Jsh => "jsh",
            Guideline::Who => "who",
        }
    }

    /// Human readable name of the issuing body
    pub fn display_name(&self) -> &'static str {
        match self {
            Guideline::AhaAcc => "AHA/ACC",
            Guideline::EscEsh => "ESC/ESH",
            Guideline::Jsh => "JSH",
            Guideline::Who => "WHO",
        }
    }

    /// Resolve a token, falling back to AHA/ACC for anything unrecognised.
    ///
    /// A fallback never fails the call but is logged and reported through
    /// [`GuidelineSelection::fell_back`] so callers can spot bad settings.
    pub fn resolve(token: &str) -> GuidelineSelection {
        match token.parse::<Guideline>() {
            Ok(guideline) => GuidelineSelection { guideline, fell_back: false },
            Err(_) => {
                warn!(token, "Unknown guideline requested, falling back to aha_acc");
                GuidelineSelection { guideline: Guideline::AhaAcc, fell_back: true }
            }
        }
    }

    /// Resolve an optional token; a missing token selects the given default without a fallback flag
    pub fn resolve_or(token: Option<&str>, default: Guideline) -> GuidelineSelection {
        match token {
            Some(token) => Self::resolve(token),
            None => GuidelineSelection { guideline: default, fell_back: false },
        }
    }
}

impl FromStr for Guideline {
    type Err = GuidelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "aha_acc" => Ok(Guideline::AhaAcc),
            "esc_esh" => Ok(Guideline::EscEsh),
            "jsh" => Ok(Guideline::Jsh),
            "who" => Ok(Guideline::Who),
            other => Err(GuidelineError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Guideline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip_through_from_str() {
        for guideline in Guideline::all() {
            assert_eq!(guideline.token().parse::<Guideline>(), Ok(guideline));
        }
    }

    #[test]
    fn test_serde_uses_stable_tokens() {
        assert_eq!(serde_json::to_string(&Guideline::EscEsh).unwrap(), "\"esc_esh\"");
        let parsed: Guideline = serde_json::from_str("\"who\"").unwrap();
        assert_eq!(parsed, Guideline::Who);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let result = "nice".parse::<Guideline>();
        assert_eq!(result, Err(GuidelineError::Unknown("nice".to_string())));
    }

    #[test]
    fn test_resolve_falls_back_to_aha() {
        let selection = Guideline::resolve("AHA");
        assert_eq!(selection.guideline, Guideline::AhaAcc);
        assert!(selection.fell_back);

        let selection = Guideline::resolve("jsh");
        assert_eq!(selection.guideline, Guideline::Jsh);
        assert!(!selection.fell_back);
    }

    #[test]
    fn test_resolve_or_uses_default_when_missing() {
        let selection = Guideline::resolve_or(None, Guideline::Who);
        assert_eq!(selection.guideline, Guideline::Who);
        assert!(!selection.fell_back);
    }
}
