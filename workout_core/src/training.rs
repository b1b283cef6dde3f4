//! Workout calculations.
//!
//! Every workout shares the distance and speed math in [`Training`]; each
//! variant supplies its own calorie formula. Swimming also replaces the
//! stroke length and the speed formula.

use crate::{InfoMessage, WorkoutCode};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Distance covered by one step, in meters
pub const DEFAULT_LEN_STEP: f64 = 0.65;

/// Raw sensor inputs common to every workout
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingBase {
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl TrainingBase {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

/// Shared workout behaviour.
///
/// `duration_hours` must be non-zero; [`crate::read_package`] rejects a zero
/// duration before a workout is built.
pub trait Training {
    /// Name shown in the summary; part of the output contract
    const LABEL: &'static str;

    /// Distance per step (or stroke) in meters
    const LEN_STEP: f64 = DEFAULT_LEN_STEP;

    fn base(&self) -> &TrainingBase;

    /// Distance in km
    fn get_distance(&self) -> f64 {
        self.base().action_count as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.base().duration_hours
    }

    /// Calories burned in kcal
    fn get_spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            workout_label: Self::LABEL.to_string(),
            duration_hours: self.base().duration_hours,
            distance_km: self.get_distance(),
            mean_speed_kmh: self.get_mean_speed(),
            calories: self.get_spent_calories(),
        }
    }
}

// ============================================================================
// Running
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            base: TrainingBase::new(action_count, duration_hours, weight_kg),
        }
    }
}

impl Training for Running {
    const LABEL: &'static str = "Running";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    // Negative at low speeds; not clamped.
    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.get_mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * self.base.weight_kg
            / M_IN_KM
            * self.base.duration_hours
            * MIN_IN_H
    }
}

// ============================================================================
// Sports walking
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    pub height_cm: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const SPEED_EXPONENT: f64 = 2.0;

    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: TrainingBase::new(action_count, duration_hours, weight_kg),
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    const LABEL: &'static str = "SportsWalking";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn get_spent_calories(&self) -> f64 {
        // Exponent first, then floor division by height.
        let speed_by_height =
            floor_div(self.get_mean_speed().powf(Self::SPEED_EXPONENT), self.height_cm);

        (Self::CALORIES_WEIGHT_MULTIPLIER * self.base.weight_kg
            + speed_by_height * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.base.weight_kg)
            * MIN_IN_H
            * self.base.duration_hours
    }
}

/// Float floor division computed from the remainder, not from `a / b`.
///
/// `(a / b).floor()` is off by one when the quotient rounds up to a whole
/// number (`169.0 / 0.1` is `1690.0` but the floored quotient is `1689.0`).
fn floor_div(a: f64, b: f64) -> f64 {
    let m = a % b;
    let mut div = (a - m) / b;
    if m != 0.0 && (b < 0.0) != (m < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

// ============================================================================
// Swimming
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    pub pool_length_m: f64,
    pub pool_lengths_count: f64,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lengths_count: f64,
    ) -> Self {
        Self {
            base: TrainingBase::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_lengths_count,
        }
    }
}

impl Training for Swimming {
    const LABEL: &'static str = "Swimming";
    const LEN_STEP: f64 = 1.38;

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// Pool-based speed; the stroke count plays no part.
    fn get_mean_speed(&self) -> f64 {
        self.pool_length_m * self.pool_lengths_count / M_IN_KM / self.base.duration_hours
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight_kg
    }
}

// ============================================================================
// Closed set of workouts
// ============================================================================

/// Any workout the dispatcher can build
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn code(&self) -> WorkoutCode {
        match self {
            Workout::Running(_) => WorkoutCode::Run,
            Workout::SportsWalking(_) => WorkoutCode::Wlk,
            Workout::Swimming(_) => WorkoutCode::Swm,
        }
    }

    pub fn base(&self) -> &TrainingBase {
        match self {
            Workout::Running(w) => w.base(),
            Workout::SportsWalking(w) => w.base(),
            Workout::Swimming(w) => w.base(),
        }
    }

    pub fn get_distance(&self) -> f64 {
        match self {
            Workout::Running(w) => w.get_distance(),
            Workout::SportsWalking(w) => w.get_distance(),
            Workout::Swimming(w) => w.get_distance(),
        }
    }

    pub fn get_mean_speed(&self) -> f64 {
        match self {
            Workout::Running(w) => w.get_mean_speed(),
            Workout::SportsWalking(w) => w.get_mean_speed(),
            Workout::Swimming(w) => w.get_mean_speed(),
        }
    }

    pub fn get_spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.get_spent_calories(),
            Workout::SportsWalking(w) => w.get_spent_calories(),
            Workout::Swimming(w) => w.get_spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        match self {
            Workout::Running(w) => w.show_training_info(),
            Workout::SportsWalking(w) => w.show_training_info(),
            Workout::Swimming(w) => w.show_training_info(),
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
