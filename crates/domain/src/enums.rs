use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a new option is written, in trading days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionCadence {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
}

impl OptionCadence {
    /// All cadences, shortest first.
    pub const ALL: [OptionCadence; 3] = [Self::Weekly, Self::Monthly, Self::Quarterly];

    /// Trading days per option cycle.
    #[must_use]
    pub fn trading_days(&self) -> u32 {
        match self {
            Self::Weekly => 5,
            Self::Monthly => 21,
            Self::Quarterly => 63,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        }
    }
}

impl fmt::Display for OptionCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionCadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" | "w" => Ok(Self::Weekly),
            "monthly" | "m" => Ok(Self::Monthly),
            "quarterly" | "q" => Ok(Self::Quarterly),
            other => Err(format!("unknown option cadence: {other}")),
        }
    }
}

/// Which option the wheel is currently short.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OptionSide {
    /// Cash-secured put, written while holding no shares.
    Put { strike: f64 },
    /// Covered call, written against one contract of shares.
    Call { strike: f64 },
}

impl OptionSide {
    /// Strike of the short option.
    #[must_use]
    pub fn strike(&self) -> f64 {
        match self {
            Self::Put { strike } | Self::Call { strike } => *strike,
        }
    }

    #[must_use]
    pub fn is_call(&self) -> bool {
        matches!(self, Self::Call { .. })
    }
}
