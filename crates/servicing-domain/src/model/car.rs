//! A car made of one engine and one battery

use serde::{Deserialize, Serialize};
use servicing_types::ValidationError;
use tracing::debug;

use super::{Battery, CarModel, Engine, Serviceable};

/// A car owns exactly one engine and one battery, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    engine: Engine,
    battery: Battery,
}

impl Car {
    pub fn new(engine: impl Into<Engine>, battery: impl Into<Battery>) -> Self {
        Self {
            engine: engine.into(),
            battery: battery.into(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn battery(&self) -> &Battery {
        &self.battery
    }

    /// Preset matching this car's pairing, or None for a custom build
    pub fn model(&self) -> Option<CarModel> {
        CarModel::from_parts(self.engine.kind(), self.battery.kind())
    }

    /// Check that every part holds plausible readings.
    ///
    /// The engine is checked first; the first failure is returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.battery.validate()
    }
}

impl Serviceable for Car {
    fn needs_service(&self) -> bool {
        let engine_due = self.engine.needs_service();
        let battery_due = self.battery.needs_service();
        debug!(
            engine = %self.engine.kind(),
            battery = %self.battery.kind(),
            engine_due,
            battery_due,
            "service check"
        );
        engine_due || battery_due
    }
}
