//! Batch driver: readings in, summaries out, in input order.

use crate::{dispatch, InfoMessage, Package, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Built-in sample readings, one per workout type
static SAMPLE_PACKAGES: Lazy<Vec<Package>> = Lazy::new(|| {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
});

/// Get a reference to the built-in sample readings
pub fn sample_packages() -> &'static [Package] {
    &SAMPLE_PACKAGES
}

/// What to do when a reading cannot be turned into a workout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the whole run at the first bad reading
    #[default]
    Abort,
    /// Log the bad reading and carry on with the next one
    Skip,
}

/// Compute the summary for a single reading
pub fn summarize(package: &Package) -> Result<InfoMessage> {
    let workout = dispatch(package)?;
    let info = workout.show_training_info();
    tracing::debug!(
        "{}: {:.3} km, {:.3} km/h, {:.3} kcal",
        info.workout_label,
        info.distance_km,
        info.mean_speed_kmh,
        info.calories
    );
    Ok(info)
}

/// Compute summaries for every reading, preserving input order.
///
/// Under [`ErrorPolicy::Skip`] only dispatch errors are skipped.
pub fn run_packages(packages: &[Package], policy: ErrorPolicy) -> Result<Vec<InfoMessage>> {
    let mut messages = Vec::with_capacity(packages.len());

    for (index, package) in packages.iter().enumerate() {
        match summarize(package) {
            Ok(info) => messages.push(info),
            Err(e) if policy == ErrorPolicy::Skip && e.is_dispatch_error() => {
                tracing::warn!("Skipping reading #{} ({}): {}", index + 1, package.code, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_sample_run_output() {
        crate::logging::init_test();

        let messages = run_packages(sample_packages(), ErrorPolicy::Abort).unwrap();
        let lines: Vec<String> = messages.iter().map(InfoMessage::get_message).collect();

        assert_eq!(
            lines,
            vec![
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
                 Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
                 Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
                 Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
            ]
        );
    }

    fn with_bad_reading() -> Vec<Package> {
        vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("XYZ", vec![1.0]),
            Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ]
    }

    #[test]
    fn test_abort_on_unknown_code() {
        match run_packages(&with_bad_reading(), ErrorPolicy::Abort) {
            Err(Error::UnknownWorkoutType(code)) => assert_eq!(code, "XYZ"),
            other => panic!("Expected UnknownWorkoutType, got {:?}", other),
        }
    }

    #[test]
    fn test_skip_keeps_order() {
        crate::logging::init_test();

        let messages = run_packages(&with_bad_reading(), ErrorPolicy::Skip).unwrap();
        let labels: Vec<_> = messages.iter().map(|m| m.workout_label.as_str()).collect();

        assert_eq!(labels, vec!["Running", "Swimming"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(run_packages(&[], ErrorPolicy::Abort).unwrap().is_empty());
    }
}
