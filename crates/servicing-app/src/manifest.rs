//! Fleet manifest loader from TOML
//!
//! A manifest lists cars by preset name together with the readings the
//! preset needs. Readings a preset does not use are ignored.

use chrono::NaiveDate;
use serde::Deserialize;
use servicing_domain::car_factory;
use servicing_domain::{Car, CarModel};
use servicing_types::{ConfigError, Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// One `[[cars]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub id: Option<String>,
    pub model: String,
    pub current_date: NaiveDate,
    pub last_service_date: NaiveDate,
    pub current_mileage: Option<i64>,
    pub last_service_mileage: Option<i64>,
    pub warning_light_on: Option<bool>,
}

/// Container for parsing a fleet manifest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FleetManifest {
    #[serde(default)]
    pub cars: Vec<ManifestEntry>,
}

impl FleetManifest {
    /// Load a fleet manifest from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read fleet manifest {}: {}",
                path.display(),
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load a fleet manifest from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse fleet manifest TOML: {}",
                e
            )))
        })
    }

    /// Build every listed car, labelled by its id (`#1`, `#2`, ... when unset)
    pub fn build(&self) -> Result<Vec<(String, Car)>> {
        self.cars
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let id = entry
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("#{}", index + 1));
                let car = entry.build(&id)?;
                debug!(%id, model = %entry.model, "built car from manifest");
                Ok((id, car))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

impl ManifestEntry {
    fn build(&self, id: &str) -> Result<Car> {
        let model: CarModel = self.model.parse()?;
        match model {
            CarModel::Calliope => self.build_with_mileage(id, car_factory::create_calliope),
            CarModel::Glissade => self.build_with_mileage(id, car_factory::create_glissade),
            CarModel::Rorschach => self.build_with_mileage(id, car_factory::create_rorschach),
            CarModel::Thovex => self.build_with_mileage(id, car_factory::create_thovex),
            CarModel::Palindrome => Ok(car_factory::create_palindrome(
                self.current_date,
                self.last_service_date,
                require(id, "warning_light_on", self.warning_light_on)?,
            )),
        }
    }

    fn build_with_mileage(
        &self,
        id: &str,
        create: fn(NaiveDate, NaiveDate, i64, i64) -> Car,
    ) -> Result<Car> {
        Ok(create(
            self.current_date,
            self.last_service_date,
            require(id, "current_mileage", self.current_mileage)?,
            require(id, "last_service_mileage", self.last_service_mileage)?,
        ))
    }
}

fn require<T>(id: &str, field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::Manifest(format!("{}: missing field {}", id, field)))
}
