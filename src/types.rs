use crate::error::WorkoutError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Activity discriminant carried by every sensor package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Dispatch table, in the order codes are listed to users.
    pub const ALL: [Self; 3] = [Self::Running, Self::SportsWalking, Self::Swimming];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Positional fields a package of this kind binds, base fields first.
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action", "duration", "weight"],
            Self::SportsWalking => &["action", "duration", "weight", "height"],
            Self::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
        }
    }

    pub fn valid_codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.code()).collect()
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType {
                code: code.to_string(),
                valid: Self::valid_codes(),
            })
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of a computed workout, ready to be printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMessage {
    pub workout_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl SummaryMessage {
    pub fn new(
        workout_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            workout_type: workout_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SummaryMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Average speed: {:.3} km/h; Calories spent: {:.3}.",
            self.workout_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
