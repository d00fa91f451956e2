//! Service check breakdown for one or many cars

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{BatteryKind, Car, CarModel, EngineKind, Serviceable};

/// Result of a service check for a single car
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceReport {
    pub id: String,
    pub model: Option<CarModel>,
    pub engine: EngineKind,
    pub battery: BatteryKind,
    pub engine_due: bool,
    pub battery_due: bool,
    pub needs_service: bool,
    /// None for warning-light engines
    pub mileage_delta: Option<i64>,
    pub warning_light_on: Option<bool>,
    pub elapsed_days: i64,
}

pub fn check_car(id: impl Into<String>, car: &Car) -> ServiceReport {
    let id = id.into();
    let engine_due = car.engine().needs_service();
    let battery_due = car.battery().needs_service();
    debug!(%id, engine_due, battery_due, "checked car");
    ServiceReport {
        id,
        model: car.model(),
        engine: car.engine().kind(),
        battery: car.battery().kind(),
        engine_due,
        battery_due,
        needs_service: engine_due || battery_due,
        mileage_delta: car.engine().mileage_delta(),
        warning_light_on: car.engine().warning_light_on(),
        elapsed_days: car.battery().elapsed_days(),
    }
}

pub fn check_cars(cars: &[(String, Car)]) -> Vec<ServiceReport> {
    cars.iter().map(|(id, car)| check_car(id.as_str(), car)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::car_factory::{create_calliope, create_palindrome, create_rorschach};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_report_for_calliope() {
        let car = create_calliope(date(2023, 5, 24), date(2020, 5, 24), 40_000, 20_000);
        let report = check_car("van-7", &car);
        assert_eq!(report.id, "van-7");
        assert_eq!(report.model, Some(CarModel::Calliope));
        assert_eq!(report.engine, EngineKind::Capulet);
        assert_eq!(report.battery, BatteryKind::Spindler);
        assert!(!report.engine_due);
        assert!(report.battery_due);
        assert!(report.needs_service);
        assert_eq!(report.mileage_delta, Some(20_000));
        assert_eq!(report.warning_light_on, None);
        assert_eq!(report.elapsed_days, 1095);
    }

    #[test]
    fn test_report_for_palindrome() {
        let today = date(2023, 5, 24);
        let report = check_car("p", &create_palindrome(today, today, true));
        assert!(report.engine_due);
        assert!(!report.battery_due);
        assert_eq!(report.mileage_delta, None);
        assert_eq!(report.warning_light_on, Some(true));
        assert_eq!(report.elapsed_days, 0);
    }

    #[test]
    fn test_report_agrees_with_car() {
        let cars = vec![
            (
                "a".to_string(),
                create_rorschach(date(2023, 5, 24), date(2022, 5, 24), 80_000, 50_000),
            ),
            (
                "b".to_string(),
                create_rorschach(date(2023, 5, 24), date(2018, 5, 24), 80_000, 50_000),
            ),
        ];
        let reports = check_cars(&cars);
        assert_eq!(reports.len(), 2);
        for ((_, car), report) in cars.iter().zip(&reports) {
            assert_eq!(report.needs_service, car.needs_service());
            assert_eq!(report.needs_service, report.engine_due || report.battery_due);
        }
        assert!(!reports[0].needs_service);
        assert!(reports[1].needs_service);
    }
}
