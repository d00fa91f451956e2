//! Battery variants and their service rules
//!
//! Every battery ages on the same two dates; the variants differ only
//! in how many days they last between services.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use servicing_types::ValidationError;

use super::Serviceable;

/// Days a Spindler battery lasts between services (two years)
pub const SPINDLER_SERVICE_INTERVAL_DAYS: i64 = 730;
/// Days a Nubbin battery lasts between services (four years)
pub const NUBBIN_SERVICE_INTERVAL_DAYS: i64 = 1460;

/// Dates shared by every battery variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryBase {
    pub last_service_date: NaiveDate,
    pub current_date: NaiveDate,
}

impl BatteryBase {
    pub fn new(last_service_date: NaiveDate, current_date: NaiveDate) -> Self {
        Self {
            last_service_date,
            current_date,
        }
    }

    /// Calendar days between the last service and today.
    ///
    /// Negative when the dates are reversed.
    pub fn elapsed_days(&self) -> i64 {
        (self.current_date - self.last_service_date).num_days()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.current_date < self.last_service_date {
            return Err(ValidationError::DateWentBackwards {
                last_service: self.last_service_date,
                current: self.current_date,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpindlerBattery {
    pub base: BatteryBase,
}

impl SpindlerBattery {
    pub fn new(last_service_date: NaiveDate, current_date: NaiveDate) -> Self {
        Self {
            base: BatteryBase::new(last_service_date, current_date),
        }
    }
}

impl Serviceable for SpindlerBattery {
    fn needs_service(&self) -> bool {
        self.base.elapsed_days() >= SPINDLER_SERVICE_INTERVAL_DAYS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NubbinBattery {
    pub base: BatteryBase,
}

impl NubbinBattery {
    pub fn new(last_service_date: NaiveDate, current_date: NaiveDate) -> Self {
        Self {
            base: BatteryBase::new(last_service_date, current_date),
        }
    }
}

impl Serviceable for NubbinBattery {
    fn needs_service(&self) -> bool {
        self.base.elapsed_days() >= NUBBIN_SERVICE_INTERVAL_DAYS
    }
}

/// Battery kind without its dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryKind {
    Spindler,
    Nubbin,
}

impl std::fmt::Display for BatteryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatteryKind::Spindler => write!(f, "spindler"),
            BatteryKind::Nubbin => write!(f, "nubbin"),
        }
    }
}

/// Any battery a car can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Battery {
    Spindler(SpindlerBattery),
    Nubbin(NubbinBattery),
}

impl Battery {
    pub fn kind(&self) -> BatteryKind {
        match self {
            Battery::Spindler(_) => BatteryKind::Spindler,
            Battery::Nubbin(_) => BatteryKind::Nubbin,
        }
    }

    pub fn base(&self) -> &BatteryBase {
        match self {
            Battery::Spindler(b) => &b.base,
            Battery::Nubbin(b) => &b.base,
        }
    }

    pub fn elapsed_days(&self) -> i64 {
        self.base().elapsed_days()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.base().validate()
    }
}

impl Serviceable for Battery {
    fn needs_service(&self) -> bool {
        match self {
            Battery::Spindler(b) => b.needs_service(),
            Battery::Nubbin(b) => b.needs_service(),
        }
    }
}

impl From<SpindlerBattery> for Battery {
    fn from(battery: SpindlerBattery) -> Self {
        Battery::Spindler(battery)
    }
}

impl From<NubbinBattery> for Battery {
    fn from(battery: NubbinBattery) -> Self {
        Battery::Nubbin(battery)
    }
}
