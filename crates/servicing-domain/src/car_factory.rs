//! Preset constructors
//!
//! Each function fixes one engine/battery pairing and forwards the
//! caller's readings unchanged. See [`CarModel`](crate::CarModel) for the
//! pairing table.

use chrono::NaiveDate;

use crate::model::{
    CapuletEngine, Car, NubbinBattery, SpindlerBattery, SternmanEngine, WilloughbyEngine,
};

/// Capulet engine, Spindler battery
pub fn create_calliope(
    current_date: NaiveDate,
    last_service_date: NaiveDate,
    current_mileage: i64,
    last_service_mileage: i64,
) -> Car {
    Car::new(
        CapuletEngine::new(last_service_mileage, current_mileage),
        SpindlerBattery::new(last_service_date, current_date),
    )
}

/// Willoughby engine, Spindler battery
pub fn create_glissade(
    current_date: NaiveDate,
    last_service_date: NaiveDate,
    current_mileage: i64,
    last_service_mileage: i64,
) -> Car {
    Car::new(
        WilloughbyEngine::new(last_service_mileage, current_mileage),
        SpindlerBattery::new(last_service_date, current_date),
    )
}

/// Sternman engine, Spindler battery
pub fn create_palindrome(
    current_date: NaiveDate,
    last_service_date: NaiveDate,
    warning_light_on: bool,
) -> Car {
    Car::new(
        SternmanEngine::new(warning_light_on),
        SpindlerBattery::new(last_service_date, current_date),
    )
}

/// Willoughby engine, Nubbin battery
pub fn create_rorschach(
    current_date: NaiveDate,
    last_service_date: NaiveDate,
    current_mileage: i64,
    last_service_mileage: i64,
) -> Car {
    Car::new(
        WilloughbyEngine::new(last_service_mileage, current_mileage),
        NubbinBattery::new(last_service_date, current_date),
    )
}

/// Capulet engine, Nubbin battery
pub fn create_thovex(
    current_date: NaiveDate,
    last_service_date: NaiveDate,
    current_mileage: i64,
    last_service_mileage: i64,
) -> Car {
    Car::new(
        CapuletEngine::new(last_service_mileage, current_mileage),
        NubbinBattery::new(last_service_date, current_date),
    )
}
