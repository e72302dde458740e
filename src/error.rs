//! Errors raised while turning a sensor package into a workout.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutError {
    #[error("invalid workout type '{code}'; valid values: {}", quoted(.valid))]
    UnknownWorkoutType {
        code: String,
        valid: Vec<&'static str>,
    },

    #[error("workout type '{code}' takes {expected} values, got {got}")]
    ArgumentCount {
        code: &'static str,
        expected: usize,
        got: usize,
    },
}

fn quoted(codes: &[&str]) -> String {
    codes
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type WorkoutResult<T> = Result<T, WorkoutError>;
