//! Domain model types

pub mod battery;
pub mod car;
pub mod car_model;
pub mod engine;

pub use battery::{Battery, BatteryBase, BatteryKind, NubbinBattery, SpindlerBattery};
pub use car::Car;
pub use car_model::CarModel;
pub use engine::{CapuletEngine, Engine, EngineKind, SternmanEngine, WilloughbyEngine};

/// Anything that can tell whether it is due for maintenance.
///
/// Implementations are pure: asking never mutates the part.
pub trait Serviceable {
    fn needs_service(&self) -> bool;
}
