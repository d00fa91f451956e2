//! Fleet inspection and report rendering

use serde::{Deserialize, Serialize};
use servicing_domain::service::{check_car, ServiceReport};
use servicing_domain::Car;
use servicing_types::{Error, OutputFormat, Result, ValidationPolicy};
use tracing::{info, warn};

/// Service reports for a whole fleet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetInspection {
    pub policy: ValidationPolicy,
    pub total: usize,
    pub due_count: usize,
    pub reports: Vec<ServiceReport>,
}

impl FleetInspection {
    pub fn due(&self) -> impl Iterator<Item = &ServiceReport> {
        self.reports.iter().filter(|r| r.needs_service)
    }
}

/// Check every car, validating readings first under `Strict`.
///
/// Under `Strict` the first invalid car aborts the inspection; under
/// `Lenient` invalid cars are checked anyway and logged.
pub fn inspect_fleet(cars: &[(String, Car)], policy: ValidationPolicy) -> Result<FleetInspection> {
    let mut reports = Vec::with_capacity(cars.len());
    for (id, car) in cars {
        if let Err(source) = car.validate() {
            match policy {
                ValidationPolicy::Strict => {
                    return Err(Error::Validation {
                        id: id.clone(),
                        source,
                    })
                }
                ValidationPolicy::Lenient => {
                    warn!(%id, error = %source, "checking car with implausible readings");
                }
            }
        }
        reports.push(check_car(id.as_str(), car));
    }

    let due_count = reports.iter().filter(|r| r.needs_service).count();
    info!(total = reports.len(), due_count, %policy, "fleet inspected");

    Ok(FleetInspection {
        policy,
        total: reports.len(),
        due_count,
        reports,
    })
}

pub fn render(inspection: &FleetInspection, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(inspection)?),
        OutputFormat::Table => Ok(render_table(inspection)),
    }
}

fn render_table(inspection: &FleetInspection) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("              Fleet Service Report                \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Cars inspected:   {}\n", inspection.total));
    report.push_str(&format!("  Needing service:  {}\n", inspection.due_count));
    report.push_str(&format!("  Validation:       {}\n", inspection.policy));
    report.push('\n');

    if inspection.reports.is_empty() {
        report.push_str("[No cars]\n\n");
    } else {
        report.push_str("[Cars]\n");
        report.push_str("-".repeat(72).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<12} {:<11} {:<11} {:>10} {:>7} {:<7} {:<7} {:<4}\n",
            "ID", "Model", "Engine", "Miles", "Days", "Engine", "Battery", "Due"
        ));
        report.push_str("-".repeat(72).as_str());
        report.push('\n');
        for r in &inspection.reports {
            let model = r
                .model
                .map(|m| m.to_string())
                .unwrap_or_else(|| "custom".to_string());
            let miles = match (r.mileage_delta, r.warning_light_on) {
                (Some(delta), _) => delta.to_string(),
                (None, Some(true)) => "light on".to_string(),
                (None, _) => "light off".to_string(),
            };
            report.push_str(&format!(
                "{:<12} {:<11} {:<11} {:>10} {:>7} {:<7} {:<7} {:<4}\n",
                truncate_str(&r.id, 11),
                model,
                r.engine.to_string(),
                miles,
                r.elapsed_days,
                yes_no(r.engine_due),
                yes_no(r.battery_due),
                yes_no(r.needs_service),
            ));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
