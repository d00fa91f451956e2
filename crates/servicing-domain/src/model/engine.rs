//! Engine variants and their service rules

use serde::{Deserialize, Serialize};
use servicing_types::ValidationError;

use super::Serviceable;

/// Miles a Capulet engine may run between services
pub const CAPULET_SERVICE_INTERVAL: i64 = 30_000;
/// Miles a Willoughby engine may run between services
pub const WILLOUGHBY_SERVICE_INTERVAL: i64 = 60_000;

fn mileage_delta(last_service_mileage: i64, current_mileage: i64) -> i64 {
    current_mileage.saturating_sub(last_service_mileage)
}

fn validate_mileage(last_service_mileage: i64, current_mileage: i64) -> Result<(), ValidationError> {
    for value in [last_service_mileage, current_mileage] {
        if value < 0 {
            return Err(ValidationError::NegativeMileage(value));
        }
    }
    if current_mileage < last_service_mileage {
        return Err(ValidationError::MileageWentBackwards {
            last_service: last_service_mileage,
            current: current_mileage,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapuletEngine {
    pub last_service_mileage: i64,
    pub current_mileage: i64,
}

impl CapuletEngine {
    pub fn new(last_service_mileage: i64, current_mileage: i64) -> Self {
        Self {
            last_service_mileage,
            current_mileage,
        }
    }

    pub fn mileage_delta(&self) -> i64 {
        mileage_delta(self.last_service_mileage, self.current_mileage)
    }
}

impl Serviceable for CapuletEngine {
    fn needs_service(&self) -> bool {
        self.mileage_delta() >= CAPULET_SERVICE_INTERVAL
    }
}

/// Engine whose only service signal is its dashboard warning light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SternmanEngine {
    pub warning_light_on: bool,
}

impl SternmanEngine {
    pub fn new(warning_light_on: bool) -> Self {
        Self { warning_light_on }
    }
}

impl Serviceable for SternmanEngine {
    fn needs_service(&self) -> bool {
        self.warning_light_on
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WilloughbyEngine {
    pub last_service_mileage: i64,
    pub current_mileage: i64,
}

impl WilloughbyEngine {
    pub fn new(last_service_mileage: i64, current_mileage: i64) -> Self {
        Self {
            last_service_mileage,
            current_mileage,
        }
    }

    pub fn mileage_delta(&self) -> i64 {
        mileage_delta(self.last_service_mileage, self.current_mileage)
    }
}

impl Serviceable for WilloughbyEngine {
    fn needs_service(&self) -> bool {
        self.mileage_delta() >= WILLOUGHBY_SERVICE_INTERVAL
    }
}

/// Engine kind without its readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Capulet,
    Sternman,
    Willoughby,
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Capulet => write!(f, "capulet"),
            EngineKind::Sternman => write!(f, "sternman"),
            EngineKind::Willoughby => write!(f, "willoughby"),
        }
    }
}

/// Any engine a car can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Engine {
    Capulet(CapuletEngine),
    Sternman(SternmanEngine),
    Willoughby(WilloughbyEngine),
}

impl Engine {
    pub fn kind(&self) -> EngineKind {
        match self {
            Engine::Capulet(_) => EngineKind::Capulet,
            Engine::Sternman(_) => EngineKind::Sternman,
            Engine::Willoughby(_) => EngineKind::Willoughby,
        }
    }

    /// Miles driven since the last service, for mileage-based engines
    pub fn mileage_delta(&self) -> Option<i64> {
        match self {
            Engine::Capulet(e) => Some(e.mileage_delta()),
            Engine::Willoughby(e) => Some(e.mileage_delta()),
            Engine::Sternman(_) => None,
        }
    }

    pub fn warning_light_on(&self) -> Option<bool> {
        match self {
            Engine::Sternman(e) => Some(e.warning_light_on),
            _ => None,
        }
    }

    /// Check that the readings describe a real engine.
    ///
    /// Does not affect `needs_service`, which stays lenient.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Engine::Capulet(e) => validate_mileage(e.last_service_mileage, e.current_mileage),
            Engine::Willoughby(e) => validate_mileage(e.last_service_mileage, e.current_mileage),
            Engine::Sternman(_) => Ok(()),
        }
    }
}

impl Serviceable for Engine {
    fn needs_service(&self) -> bool {
        match self {
            Engine::Capulet(e) => e.needs_service(),
            Engine::Sternman(e) => e.needs_service(),
            Engine::Willoughby(e) => e.needs_service(),
        }
    }
}

impl From<CapuletEngine> for Engine {
    fn from(engine: CapuletEngine) -> Self {
        Engine::Capulet(engine)
    }
}

impl From<SternmanEngine> for Engine {
    fn from(engine: SternmanEngine) -> Self {
        Engine::Sternman(engine)
    }
}

impl From<WilloughbyEngine> for Engine {
    fn from(engine: WilloughbyEngine) -> Self {
        Engine::Willoughby(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capulet_below_threshold() {
        assert!(!CapuletEngine::new(0, 29_999).needs_service());
    }

    #[test]
    fn test_capulet_at_threshold() {
        assert!(CapuletEngine::new(0, 30_000).needs_service());
        assert!(CapuletEngine::new(20_000, 50_000).needs_service());
    }

    #[test]
    fn test_willoughby_boundary() {
        assert!(!WilloughbyEngine::new(10_000, 69_999).needs_service());
        assert!(WilloughbyEngine::new(10_000, 70_000).needs_service());
    }

    #[test]
    fn test_willoughby_ignores_capulet_threshold() {
        assert!(!WilloughbyEngine::new(0, 30_000).needs_service());
    }

    #[test]
    fn test_sternman_passthrough() {
        assert!(SternmanEngine::new(true).needs_service());
        assert!(!SternmanEngine::new(false).needs_service());
    }

    #[test]
    fn test_negative_delta_is_not_due() {
        let engine = CapuletEngine::new(90_000, 10_000);
        assert_eq!(engine.mileage_delta(), -80_000);
        assert!(!engine.needs_service());
    }

    #[test]
    fn test_extreme_readings_do_not_overflow() {
        let engine = WilloughbyEngine::new(i64::MIN, i64::MAX);
        assert_eq!(engine.mileage_delta(), i64::MAX);
        assert!(engine.needs_service());
    }

    #[test]
    fn test_engine_dispatch() {
        let engine: Engine = CapuletEngine::new(0, 30_000).into();
        assert_eq!(engine.kind(), EngineKind::Capulet);
        assert!(engine.needs_service());
        assert_eq!(engine.mileage_delta(), Some(30_000));
        assert_eq!(engine.warning_light_on(), None);

        let engine: Engine = SternmanEngine::new(false).into();
        assert_eq!(engine.kind(), EngineKind::Sternman);
        assert!(!engine.needs_service());
        assert_eq!(engine.mileage_delta(), None);
        assert_eq!(engine.warning_light_on(), Some(false));
    }

    #[test]
    fn test_validate_mileage() {
        let ok: Engine = WilloughbyEngine::new(100, 100).into();
        assert_eq!(ok.validate(), Ok(()));

        let backwards: Engine = WilloughbyEngine::new(500, 100).into();
        assert_eq!(
            backwards.validate(),
            Err(ValidationError::MileageWentBackwards {
                last_service: 500,
                current: 100
            })
        );

        let negative: Engine = CapuletEngine::new(-1, 100).into();
        assert_eq!(negative.validate(), Err(ValidationError::NegativeMileage(-1)));

        let flag: Engine = SternmanEngine::new(true).into();
        assert_eq!(flag.validate(), Ok(()));
    }

    #[test]
    fn test_engine_json_is_tagged() {
        let engine: Engine = SternmanEngine::new(true).into();
        let json = serde_json::to_value(engine).unwrap();
        assert_eq!(json["kind"], "sternman");
        assert_eq!(json["warning_light_on"], true);

        let back: Engine = serde_json::from_value(json).unwrap();
        assert_eq!(back, engine);
    }
}
