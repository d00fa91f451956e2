//! Named car presets

use serde::{Deserialize, Serialize};
use servicing_types::Error;
use std::str::FromStr;

use super::{BatteryKind, EngineKind};

/// A named engine/battery pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarModel {
    Calliope,
    Glissade,
    Palindrome,
    Rorschach,
    Thovex,
}

impl CarModel {
    pub const ALL: [CarModel; 5] = [
        CarModel::Calliope,
        CarModel::Glissade,
        CarModel::Palindrome,
        CarModel::Rorschach,
        CarModel::Thovex,
    ];

    pub fn engine_kind(&self) -> EngineKind {
        match self {
            CarModel::Calliope | CarModel::Thovex => EngineKind::Capulet,
            CarModel::Glissade | CarModel::Rorschach => EngineKind::Willoughby,
            CarModel::Palindrome => EngineKind::Sternman,
        }
    }

    pub fn battery_kind(&self) -> BatteryKind {
        match self {
            CarModel::Calliope | CarModel::Glissade | CarModel::Palindrome => BatteryKind::Spindler,
            CarModel::Rorschach | CarModel::Thovex => BatteryKind::Nubbin,
        }
    }

    /// Whether the preset's engine is driven by a warning light instead of mileage
    pub fn uses_warning_light(&self) -> bool {
        self.engine_kind() == EngineKind::Sternman
    }

    /// Find the preset built from this pairing, if any
    pub fn from_parts(engine: EngineKind, battery: BatteryKind) -> Option<CarModel> {
        Self::ALL
            .into_iter()
            .find(|m| m.engine_kind() == engine && m.battery_kind() == battery)
    }
}

impl std::fmt::Display for CarModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CarModel::Calliope => "calliope",
            CarModel::Glissade => "glissade",
            CarModel::Palindrome => "palindrome",
            CarModel::Rorschach => "rorschach",
            CarModel::Thovex => "thovex",
        };
        f.write_str(name)
    }
}

impl FromStr for CarModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.to_string() == normalized)
            .ok_or_else(|| Error::UnknownModel(s.trim().to_string()))
    }
}
