//! Schedule export to CSV and JSON.
//!
//! Exports are written atomically: the content goes to a locked temp file in
//! the destination directory, is synced, then renamed over the target.

use crate::{DailySchedule, Error, Result, WeeklySchedule};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(Error::Export(format!("Unknown export format: {}", other))),
        }
    }
}

/// A row in the CSV output
#[derive(Debug, Serialize)]
struct CsvRow {
    day: u32,
    week: u32,
    rest_day: bool,
    under_populated: bool,
    focus: String,
    exercise_ids: String,
    total_sets: u32,
    minutes: u32,
    calories_burned: u32,
    meal_ids: String,
    intake_calories: u32,
    protein_g: f64,
    fasting_protocol: String,
    eating_window: String,
}

impl From<&DailySchedule> for CsvRow {
    fn from(day: &DailySchedule) -> Self {
        let exercise = &day.exercise_plan;
        let meals = &day.meal_plan;

        CsvRow {
            day: day.day_number,
            week: day.week_number,
            rest_day: day.is_rest_day,
            under_populated: day.under_populated,
            focus: exercise
                .focus
                .map(|f| f.label().to_string())
                .unwrap_or_else(|| "rest".to_string()),
            exercise_ids: join_ids(exercise.exercises.iter().map(|e| e.exercise_id.as_str())),
            total_sets: exercise.total_sets,
            minutes: exercise.estimated_minutes,
            calories_burned: exercise.estimated_calories,
            meal_ids: join_ids(meals.meals.iter().map(|m| m.meal_id.as_str())),
            intake_calories: meals.totals.calories,
            protein_g: meals.totals.protein_g,
            fasting_protocol: day.fasting_plan.protocol.to_string(),
            eating_window: day.fasting_plan.eating_window.to_string(),
        }
    }
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    ids.collect::<Vec<_>>().join(";")
}

/// Render weeks as CSV, one row per day
pub fn to_csv(weeks: &[WeeklySchedule]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for day in weeks.iter().flat_map(|w| &w.days) {
        writer.serialize(CsvRow::from(day))?;
    }
    writer
        .into_inner()
        .map_err(|e| Error::Export(format!("Failed to finish CSV: {}", e)))
}

/// Render weeks as pretty JSON
pub fn to_json(weeks: &[WeeklySchedule]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(weeks)?)
}

/// Write the weeks to `path` in the given format
///
/// Returns the number of day rows written.
pub fn export_weeks(
    weeks: &[WeeklySchedule],
    path: &Path,
    format: ExportFormat,
) -> Result<usize> {
    let contents = match format {
        ExportFormat::Csv => to_csv(weeks)?,
        ExportFormat::Json => to_json(weeks)?,
    };
    write_atomic(path, &contents)?;

    let days = weeks.iter().map(|w| w.days.len()).sum();
    tracing::info!("Exported {} days as {:?} to {:?}", days, format, path);
    Ok(days)
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        writer.write_all(contents)?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
