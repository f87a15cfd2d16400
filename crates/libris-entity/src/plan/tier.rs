//! Subscription tier enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of subscription tiers.
///
/// Tiers are ordered by entitlement: Unlimited > Premium > Free. Only the
/// free/paid boundary carries a rule — premium books cannot be acquired on
/// the free tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Default tier for new registrations. Basic books only.
    Free,
    /// Paid tier with access to premium books.
    Premium,
    /// Top paid tier.
    Unlimited,
}

impl PlanTier {
    /// Whether this is the free tier.
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// Return the tier as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Premium => "premium",
            Self::Unlimited => "unlimited",
        }
    }
}

impl Default for PlanTier {
    fn default() -> Self {
        Self::Free
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = libris_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "premium" => Ok(Self::Premium),
            "unlimited" => Ok(Self::Unlimited),
            _ => Err(libris_core::AppError::validation(format!(
                "Invalid plan tier: '{s}'. Expected one of: free, premium, unlimited"
            ))),
        }
    }
}
