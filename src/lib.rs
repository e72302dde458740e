pub mod cli;
pub mod error;
pub mod package;
pub mod types;
pub mod utils;
pub mod workout;

pub use error::{WorkoutError, WorkoutResult};
pub use package::{Package, read_package};
pub use types::{SummaryMessage, WorkoutKind};
pub use workout::{Running, Session, SportsWalking, Swimming, Training, Workout};
