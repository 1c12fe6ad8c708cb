//! Exercise selection engine.
//!
//! For a profile and day number:
//! 1. Target muscles from the goal x gender table plus problem areas
//! 2. Day focus from the fixed weekly template, narrowed to the targets
//! 3. Candidate pool of same-tier exercises, padded when too small
//! 4. Day-seeded deterministic selection
//! 5. Progressive overload by week
//! 6. Aggregate totals

use crate::catalog::CatalogRepository;
use crate::progression::{apply_progression, week_day, week_number};
use crate::shuffle::{seeded_permutation, select};
use crate::{
    CatalogExercise, DayFocus, Gender, Goal, MuscleGroup, PersonalizedExercisePlan,
    PlannedExercise, ProblemArea, UserProfile, WorkoutDuration,
};

/// Seconds of work assumed per repetition
pub const SECONDS_PER_REP: u32 = 3;

/// Muscle groups emphasised for a goal, phrased per gender
pub fn goal_muscles(gender: Gender, goal: Goal) -> &'static [MuscleGroup] {
    use MuscleGroup::*;

    match (gender, goal) {
        (Gender::Male, Goal::LoseWeight) => &[Cardio, FullBody, Core, Quads, Glutes],
        (Gender::Male, Goal::BuildMuscle) => &[Chest, Back, Shoulders, Biceps, Triceps, Quads],
        (Gender::Male, Goal::GainMuscleLoseWeight) => {
            &[Chest, Back, Quads, Core, Cardio, FullBody]
        }
        (Gender::Male, Goal::GetFitToned) => &[Chest, Back, Core, Shoulders, FullBody],
        (Gender::Female, Goal::LoseWeight) => &[Cardio, FullBody, Glutes, Core, Quads],
        (Gender::Female, Goal::BuildMuscle) => {
            &[Glutes, Quads, Hamstrings, Back, Shoulders, Core]
        }
        (Gender::Female, Goal::GainMuscleLoseWeight) => {
            &[Glutes, Quads, Core, Back, Cardio, FullBody]
        }
        (Gender::Female, Goal::GetFitToned) => &[Glutes, Core, Hamstrings, Shoulders, FullBody],
    }
}

pub fn problem_area_muscles(area: ProblemArea) -> &'static [MuscleGroup] {
    use MuscleGroup::*;

    match area {
        ProblemArea::Belly => &[Core, Cardio],
        ProblemArea::Arms => &[Biceps, Triceps],
        ProblemArea::Chest => &[Chest],
        ProblemArea::Back => &[Back],
        ProblemArea::Shoulders => &[Shoulders],
        ProblemArea::Glutes => &[Glutes],
        ProblemArea::Legs => &[Quads, Hamstrings, Calves],
    }
}

/// Exercises per session for a workout length
pub fn exercise_count(duration: WorkoutDuration) -> usize {
    match duration {
        WorkoutDuration::Minutes15 => 4,
        WorkoutDuration::Minutes30 => 6,
        WorkoutDuration::Minutes45 => 8,
        WorkoutDuration::Minutes60 => 10,
    }
}

impl DayFocus {
    /// Template for a 1..=7 week day
    pub fn for_week_day(week_day: u32) -> Self {
        match week_day {
            1 => DayFocus::Push,
            2 => DayFocus::Pull,
            3 => DayFocus::Legs,
            4 => DayFocus::CoreCardio,
            5 => DayFocus::Upper,
            6 => DayFocus::LowerCore,
            _ => DayFocus::FullBody,
        }
    }

    pub fn muscles(self) -> &'static [MuscleGroup] {
        use MuscleGroup::*;

        match self {
            DayFocus::Push => &[Chest, Shoulders, Triceps],
            DayFocus::Pull => &[Back, Biceps],
            DayFocus::Legs => &[Quads, Hamstrings, Glutes, Calves],
            DayFocus::CoreCardio => &[Core, Cardio],
            DayFocus::Upper => &[Chest, Back, Shoulders, Biceps, Triceps],
            DayFocus::LowerCore => &[Quads, Hamstrings, Glutes, Core],
            DayFocus::FullBody => &[FullBody, Cardio],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayFocus::Push => "push",
            DayFocus::Pull => "pull",
            DayFocus::Legs => "legs",
            DayFocus::CoreCardio => "core & cardio",
            DayFocus::Upper => "upper body",
            DayFocus::LowerCore => "lower body & core",
            DayFocus::FullBody => "full body",
        }
    }
}

/// Goal muscles followed by any problem-area muscles not already present
pub fn target_muscles(profile: &UserProfile) -> Vec<MuscleGroup> {
    let mut targets = goal_muscles(profile.gender(), profile.goal()).to_vec();
    for area in &profile.problem_areas {
        for group in problem_area_muscles(*area) {
            if !targets.contains(group) {
                targets.push(*group);
            }
        }
    }
    targets
}

/// Template muscles that are targets, plus full-body and cardio anchors
pub fn day_focus_muscles(focus: DayFocus, targets: &[MuscleGroup]) -> Vec<MuscleGroup> {
    focus
        .muscles()
        .iter()
        .copied()
        .filter(|g| g.is_anchor() || targets.contains(g))
        .collect()
}

/// Candidate pool for the day
///
/// Focus exercises of the tier in catalog order. When there are fewer than
/// `required`, the day's permutation of the remaining same-tier exercises
/// tops it up to `required`.
pub fn candidate_pool<'a, C: CatalogRepository + ?Sized>(
    catalog: &'a C,
    focus: &[MuscleGroup],
    profile: &UserProfile,
    required: usize,
    day_number: u32,
) -> Vec<&'a CatalogExercise> {
    let tier = profile.difficulty_tier();
    let mut pool = catalog.exercises_by_muscle_groups(focus, tier);

    if pool.len() < required {
        let padding: Vec<&CatalogExercise> = catalog
            .exercises_by_difficulty(tier)
            .into_iter()
            .filter(|e| !pool.iter().any(|p| p.id == e.id))
            .collect();
        let missing = required - pool.len();

        tracing::debug!(
            "Focus pool has {} of {} exercises, padding from {} same-tier candidates",
            pool.len(),
            required,
            padding.len()
        );

        pool.extend(
            seeded_permutation(&padding, u64::from(day_number))
                .into_iter()
                .take(missing),
        );
    }

    pool
}

/// Build the exercise plan for a training day
///
/// Pure for fixed inputs: the same profile and day always return the same
/// exercises, sets and reps.
pub fn generate_workout<C: CatalogRepository + ?Sized>(
    catalog: &C,
    profile: &UserProfile,
    day_number: u32,
) -> PersonalizedExercisePlan {
    let week = week_number(day_number);
    let focus = DayFocus::for_week_day(week_day(day_number));
    let targets = target_muscles(profile);
    let focus_muscles = day_focus_muscles(focus, &targets);
    let required = exercise_count(profile.duration());
    let difficulty = profile.difficulty_tier();

    let pool = candidate_pool(catalog, &focus_muscles, profile, required, day_number);
    let exercises: Vec<PlannedExercise> = select(&pool, required, day_number)
        .into_iter()
        .map(|e| apply_progression(e, week))
        .collect();

    let mut reasoning = format!(
        "Day {} is a {} day for your goal to {}: {} {:?} exercises, week {} progression.",
        day_number,
        focus.label(),
        profile.goal().label(),
        exercises.len(),
        difficulty,
        week
    );
    if exercises.len() < required {
        reasoning.push_str(&format!(
            " Only {} of {} exercises are available for your settings.",
            exercises.len(),
            required
        ));
        tracing::warn!(
            "Day {}: only {} of {} exercises available",
            day_number,
            exercises.len(),
            required
        );
    }

    tracing::debug!(
        "Day {} focus {:?} -> {:?}, selected {:?}",
        day_number,
        focus,
        focus_muscles,
        exercises.iter().map(|e| &e.exercise_id).collect::<Vec<_>>()
    );

    let totals = WorkoutTotals::from_exercises(&exercises);

    PersonalizedExercisePlan {
        day_number,
        week_number: week,
        focus: Some(focus),
        focus_muscles,
        difficulty,
        exercises,
        total_sets: totals.sets,
        total_volume: totals.volume,
        estimated_minutes: totals.minutes,
        estimated_calories: totals.calories,
        reasoning,
    }
}

/// Aggregates over a list of planned exercises
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkoutTotals {
    pub sets: u32,
    pub volume: u32,
    pub minutes: u32,
    pub calories: u32,
}

impl WorkoutTotals {
    pub fn from_exercises(exercises: &[PlannedExercise]) -> Self {
        let mut totals = WorkoutTotals::default();
        let mut seconds = 0u32;

        // Catalog files are not range-checked, so every sum saturates
        for exercise in exercises {
            let work_per_set = match (exercise.reps, exercise.duration_seconds) {
                (Some(reps), _) => reps.saturating_mul(SECONDS_PER_REP),
                (None, Some(duration)) => duration,
                (None, None) => 0,
            };
            let work = work_per_set.saturating_mul(exercise.sets);
            let rest = exercise
                .rest_seconds
                .saturating_mul(exercise.sets.saturating_sub(1));

            totals.sets = totals.sets.saturating_add(exercise.sets);
            totals.volume = totals
                .volume
                .saturating_add(exercise.work_amount().saturating_mul(exercise.sets));
            totals.calories = totals.calories.saturating_add(exercise.calories);
            seconds = seconds.saturating_add(work).saturating_add(rest);
        }

        totals.minutes = (f64::from(seconds) / 60.0).round() as u32;
        totals
    }
}
