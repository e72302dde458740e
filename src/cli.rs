use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitness-tracker",
    about = "Print distance, mean speed and calories for workout sensor packages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    /// JSON file of packages, e.g. [["RUN", [15000, 1, 75]]].
    ///
    /// Without it the built-in sample packages are used.
    #[arg(long, value_name = "FILE")]
    pub packages: Option<PathBuf>,

    /// Print each summary as a JSON object instead of a sentence.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Summarize a single package.
    Read {
        /// Workout type code: RUN, WLK or SWM.
        #[arg(value_name = "TYPE")]
        workout_type: String,

        /// Values in field order; see `types`.
        #[arg(value_name = "VALUES", required = true, allow_negative_numbers = true)]
        data: Vec<f64>,
    },

    /// List supported workout types and their fields.
    Types,
}
