use crate::dlog;
use crate::error::{WorkoutError, WorkoutResult};
use crate::types::{SummaryMessage, WorkoutKind};
use crate::workout::{Running, SportsWalking, Swimming, Workout};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// One sensor reading: a workout type code and its positional values.
///
/// Deserializes from `["SWM", [720, 1, 80, 25, 40]]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package(pub String, pub Vec<f64>);

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self(code.into(), data.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn data(&self) -> &[f64] {
        &self.1
    }

    pub fn read(&self) -> WorkoutResult<Workout> {
        read_package(self.code(), self.data())
    }
}

/// Packages processed when no input is given.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Build the workout named by `code`, binding `data` positionally to its
/// fields (base fields first). Values are taken as given.
///
/// # Errors
/// - `UnknownWorkoutType` if `code` is not one of `RUN`, `WLK`, `SWM`.
/// - `ArgumentCount` if `data` does not hold exactly one value per field.
pub fn read_package(code: &str, data: &[f64]) -> WorkoutResult<Workout> {
    let kind: WorkoutKind = code.parse()?;

    let workout: Workout = match (kind, data) {
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Running::new(action, duration, weight).into()
        }
        (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => {
            SportsWalking::new(action, duration, weight, height).into()
        }
        (WorkoutKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Swimming::new(action, duration, weight, length_pool, count_pool).into()
        }
        _ => {
            return Err(WorkoutError::ArgumentCount {
                code: kind.code(),
                expected: kind.fields().len(),
                got: data.len(),
            });
        }
    };

    dlog!("read_package code={} values={:?}", kind.code(), data);
    Ok(workout)
}

/// Load packages from a JSON file shaped like `[["RUN", [15000, 1, 75]], ...]`.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let shown = path.display();
    let raw = fs::read_to_string(path).with_context(|| format!("reading packages: {shown}"))?;
    let packages: Vec<Package> =
        serde_json::from_str(&raw).with_context(|| format!("parsing packages: {shown}"))?;
    tracing::info!(path = %shown, packages = packages.len(), "loaded packages");
    Ok(packages)
}

/// Summarize every package that builds. Packages that fail are logged and
/// skipped; it is an error only when none of a non-empty batch builds.
pub fn summarize_all(packages: &[Package]) -> Result<Vec<SummaryMessage>> {
    let mut out = Vec::with_capacity(packages.len());
    for (i, p) in packages.iter().enumerate() {
        match p.read() {
            Ok(workout) => out.push(workout.summary()),
            Err(e) => {
                tracing::warn!(index = i, code = p.code(), err = %e, "skipping package");
            }
        }
    }

    if out.is_empty() && !packages.is_empty() {
        bail!("None of the {} packages could be read.", packages.len());
    }
    tracing::info!(summarized = out.len(), skipped = packages.len() - out.len(), "done");
    Ok(out)
}

/// Write one line per summary: the sentence, or a JSON object with `json`.
pub fn write_summaries<W: Write>(
    out: &mut W,
    summaries: &[SummaryMessage],
    json: bool,
) -> Result<()> {
    for msg in summaries {
        if json {
            serde_json::to_writer(&mut *out, msg).context("encoding summary")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{msg}")?;
        }
    }
    out.flush()?;
    Ok(())
}
