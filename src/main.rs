#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use fitness_tracker::{cli, dlog, package, types::WorkoutKind, utils};
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let mut out = io::stdout().lock();

    match cli.cmd {
        Some(cli::Cmd::Read { workout_type, data }) => {
            dlog!("mode=read type={workout_type} values={}", data.len());

            let workout = package::read_package(&workout_type, &data)?;
            package::write_summaries(&mut out, &[workout.summary()], cli.json)
        }
        Some(cli::Cmd::Types) => {
            for kind in WorkoutKind::ALL {
                let fields = kind.fields().join(",");
                writeln!(out, "{}\t{}\t{fields}", kind.code(), kind.label())?;
            }
            Ok(())
        }
        None => {
            let packages = cli
                .packages
                .as_deref()
                .map_or_else(|| Ok(package::sample_packages()), package::load_packages)?;
            dlog!("mode=batch packages={}", packages.len());

            let summaries = package::summarize_all(&packages)?;
            package::write_summaries(&mut out, &summaries, cli.json)
        }
    }
}
