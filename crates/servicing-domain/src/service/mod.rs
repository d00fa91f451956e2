//! Domain services

pub mod service_check;

pub use service_check::{check_car, check_cars, ServiceReport};
