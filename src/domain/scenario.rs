use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScenarioParseError {
    #[error("unknown scenario: {0} (expected conservative, base or optimistic)")]
    UnknownScenario(String),
}

/// Demand scenario applied to the baseline daily-order curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Conservative,
    #[default]
    Base,
    Optimistic,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Conservative, Scenario::Base, Scenario::Optimistic];

    pub fn multiplier(self) -> f64 {
        match self {
            Scenario::Conservative => 0.78,
            Scenario::Base => 1.0,
            Scenario::Optimistic => 1.22,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Scenario::Conservative => "conservative",
            Scenario::Base => "base",
            Scenario::Optimistic => "optimistic",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Scenario::Conservative => "Conservative",
            Scenario::Base => "Base",
            Scenario::Optimistic => "Optimistic",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Scenario {
    type Err = ScenarioParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.key() == value)
            .ok_or_else(|| ScenarioParseError::UnknownScenario(value.to_string()))
    }
}
