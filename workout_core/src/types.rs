//! Core domain types for raw sensor readings.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-letter workout code sent by the tracker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swm,
    Run,
    Wlk,
}

impl WorkoutCode {
    #[cfg(test)]
    const ALL: [WorkoutCode; 3] = [WorkoutCode::Swm, WorkoutCode::Run, WorkoutCode::Wlk];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swm => "SWM",
            WorkoutCode::Run => "RUN",
            WorkoutCode::Wlk => "WLK",
        }
    }

    /// Number of positional values a reading of this type carries
    pub fn expected_values(&self) -> usize {
        match self {
            WorkoutCode::Swm => 5,
            WorkoutCode::Run => 3,
            WorkoutCode::Wlk => 4,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(WorkoutCode::Swm),
            "RUN" => Ok(WorkoutCode::Run),
            "WLK" => Ok(WorkoutCode::Wlk),
            other => Err(Error::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw reading: a workout code plus positional values.
///
/// The code is kept as a plain string so that unknown codes survive
/// loading and are reported by the dispatcher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            values: values.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        for code in WorkoutCode::ALL {
            assert_eq!(code.as_str().parse::<WorkoutCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        match "run".parse::<WorkoutCode>() {
            Err(Error::UnknownWorkoutType(code)) => assert_eq!(code, "run"),
            other => panic!("Expected UnknownWorkoutType, got {:?}", other),
        }
    }

    #[test]
    fn test_package_json_shape() {
        let pkg: Package = serde_json::from_str(r#"{"code": "RUN", "values": [15000, 1, 75]}"#)
            .unwrap();
        assert_eq!(pkg, Package::new("RUN", vec![15000.0, 1.0, 75.0]));
    }
}
