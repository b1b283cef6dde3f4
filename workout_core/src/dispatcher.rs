//! Turns a raw reading into a concrete workout.

use crate::{Error, Package, Result, Running, SportsWalking, Swimming, Workout, WorkoutCode};

/// Build the workout for `code`, binding `values` positionally.
///
/// Field order per code:
/// - SWM: action_count, duration_hours, weight_kg, pool_length_m, pool_lengths_count
/// - RUN: action_count, duration_hours, weight_kg
/// - WLK: action_count, duration_hours, weight_kg, height_cm
///
/// A zero duration (or a zero height for WLK) is rejected here, since every
/// formula divides by it.
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout> {
    let workout_code: WorkoutCode = code.parse()?;

    let expected = workout_code.expected_values();
    if values.len() != expected {
        return Err(Error::Arity {
            code: code.to_string(),
            expected,
            got: values.len(),
        });
    }

    let action_count = parse_action_count(workout_code, values[0])?;
    let duration_hours = non_zero(workout_code, "duration_hours", values[1])?;
    let weight_kg = values[2];

    let workout: Workout = match workout_code {
        WorkoutCode::Swm => {
            Swimming::new(action_count, duration_hours, weight_kg, values[3], values[4]).into()
        }
        WorkoutCode::Run => Running::new(action_count, duration_hours, weight_kg).into(),
        WorkoutCode::Wlk => {
            let height_cm = non_zero(workout_code, "height_cm", values[3])?;
            SportsWalking::new(action_count, duration_hours, weight_kg, height_cm).into()
        }
    };

    tracing::debug!("Dispatched {} reading: {:?}", workout_code, workout);
    Ok(workout)
}

/// Dispatch a loaded [`Package`]
pub fn dispatch(package: &Package) -> Result<Workout> {
    read_package(&package.code, &package.values)
}

/// Step and stroke counts must be whole, non-negative numbers
fn parse_action_count(code: WorkoutCode, value: f64) -> Result<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(Error::InvalidValue {
            code: code.to_string(),
            field: "action_count",
            value,
        })
    }
}

/// Divisors in the workout formulas; zero is a division by zero
fn non_zero(code: WorkoutCode, field: &'static str, value: f64) -> Result<f64> {
    if value == 0.0 {
        Err(Error::InvalidValue {
            code: code.to_string(),
            field,
            value,
        })
    } else {
        Ok(value)
    }
}
