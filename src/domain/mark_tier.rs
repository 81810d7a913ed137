//! Mark-weight policy selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Mark weight of an exam question. Selects the answer length and structure
/// policy. The set is closed: only 2, 5, and 8 mark questions exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MarkTier {
    /// Short definition-style answer.
    #[default]
    Two,
    /// Structured medium-length answer.
    Five,
    /// Long-form sectioned answer with a diagram.
    Eight,
}

impl MarkTier {
    pub const ALL: [MarkTier; 3] = [MarkTier::Two, MarkTier::Five, MarkTier::Eight];

    /// Numeric mark count as it appears in persisted records and prompts.
    pub fn marks(self) -> u8 {
        match self {
            MarkTier::Two => 2,
            MarkTier::Five => 5,
            MarkTier::Eight => 8,
        }
    }
}

impl From<MarkTier> for u8 {
    fn from(tier: MarkTier) -> u8 {
        tier.marks()
    }
}

impl TryFrom<u8> for MarkTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(MarkTier::Two),
            5 => Ok(MarkTier::Five),
            8 => Ok(MarkTier::Eight),
            other => Err(format!("invalid mark weight {}: must be 2, 5, or 8", other)),
        }
    }
}

impl fmt::Display for MarkTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marks())
    }
}

impl FromStr for MarkTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(|value| MarkTier::try_from(value).ok())
            .ok_or_else(|| AppError::InvalidMarkTier(s.to_string()))
    }
}
