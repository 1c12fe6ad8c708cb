//! Progressive overload by plan week.
//!
//! Difficulty tier never changes over a plan; only the volume of each
//! exercise grows with the week number:
//! - Sets: +1 from week 2 onward, never above 5
//! - Reps: +week, at most +5 over the catalog default
//! - Timed work: +5s per week, at most +30s over the catalog default

use crate::{CatalogExercise, PlannedExercise, WorkPrescription};

pub const MAX_SETS: u32 = 5;
pub const MAX_EXTRA_REPS: u32 = 5;
pub const SECONDS_PER_WEEK: u32 = 5;
pub const MAX_EXTRA_SECONDS: u32 = 30;

/// 1-based plan week containing `day_number`
pub fn week_number(day_number: u32) -> u32 {
    day_number.saturating_sub(1) / 7 + 1
}

/// 1..=7 position of `day_number` inside its week
pub fn week_day(day_number: u32) -> u32 {
    day_number.saturating_sub(1) % 7 + 1
}

pub fn progressed_sets(default_sets: u32, week: u32) -> u32 {
    if week >= 2 && default_sets < MAX_SETS {
        default_sets + 1
    } else {
        default_sets
    }
}

pub fn progressed_reps(default_reps: u32, week: u32) -> u32 {
    default_reps.saturating_add(week.min(MAX_EXTRA_REPS))
}

pub fn progressed_seconds(default_seconds: u32, week: u32) -> u32 {
    default_seconds.saturating_add(week.saturating_mul(SECONDS_PER_WEEK).min(MAX_EXTRA_SECONDS))
}

/// Apply the week's overload to a catalog exercise
pub fn apply_progression(exercise: &CatalogExercise, week: u32) -> PlannedExercise {
    let (reps, duration_seconds) = match exercise.work {
        WorkPrescription::Reps { reps } => (Some(progressed_reps(reps, week)), None),
        WorkPrescription::Timed { seconds } => (None, Some(progressed_seconds(seconds, week))),
    };

    PlannedExercise {
        exercise_id: exercise.id.clone(),
        name: exercise.name.clone(),
        muscle_groups: exercise.muscle_groups.clone(),
        modality: exercise.modality,
        sets: progressed_sets(exercise.default_sets, week),
        reps,
        duration_seconds,
        rest_seconds: exercise.rest_seconds,
        calories: exercise.calories,
    }
}
