//! Domain models and services for car servicing checks

pub mod car_factory;
pub mod model;
pub mod service;

pub use model::{Car, CarModel, Serviceable};
