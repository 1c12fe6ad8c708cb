//! Schedule composer.
//!
//! Runs the fasting, exercise and meal engines for a day number and
//! assembles the result. Rest days skip the exercise engine; fasting and
//! meals continue every day.

use crate::catalog::CatalogRepository;
use crate::exercise::generate_workout;
use crate::fasting::generate_fasting_plan;
use crate::meal::plan_meals;
use crate::progression::{week_day, week_number};
use crate::targets::compute_targets;
use crate::{
    DailySchedule, NutritionTargets, PersonalizedExercisePlan, PersonalizedFastingPlan,
    TrainingFrequency, UserProfile, WeekSummary, WeeklySchedule,
};
use chrono::NaiveDate;

/// Week days (1..=7) without training for a frequency preference
pub fn rest_days(frequency: TrainingFrequency) -> &'static [u32] {
    match frequency {
        TrainingFrequency::TwoToThree => &[3, 6, 7],
        TrainingFrequency::FourToFive => &[4, 7],
        TrainingFrequency::SixToSeven => &[7],
    }
}

/// `day_number mod 7`, with 0 read as 7, checked against the rest table
pub fn is_rest_day(frequency: TrainingFrequency, day_number: u32) -> bool {
    let position = match day_number % 7 {
        0 => 7,
        other => other,
    };
    rest_days(frequency).contains(&position)
}

/// Highest day a seven-day week can start on without running past `u32::MAX`
pub const LAST_WEEK_START: u32 = u32::MAX - 6;

/// First day number of a 1-based plan week, clamped to `LAST_WEEK_START`
pub fn week_start_day(week_index: u32) -> u32 {
    week_index
        .saturating_sub(1)
        .saturating_mul(7)
        .saturating_add(1)
        .min(LAST_WEEK_START)
}

/// Compose a single day's schedule
pub fn generate_daily_schedule<C: CatalogRepository + ?Sized>(
    catalog: &C,
    profile: &UserProfile,
    day_number: u32,
    today: NaiveDate,
) -> DailySchedule {
    let targets = compute_targets(profile, today);
    let fasting = generate_fasting_plan(profile);
    compose_day(catalog, profile, day_number, &targets, &fasting)
}

/// Compose a day from the per-profile pieces that don't depend on the day
fn compose_day<C: CatalogRepository + ?Sized>(
    catalog: &C,
    profile: &UserProfile,
    day_number: u32,
    targets: &NutritionTargets,
    fasting: &PersonalizedFastingPlan,
) -> DailySchedule {
    let week = week_number(day_number);
    let rest = is_rest_day(profile.frequency(), day_number);

    let exercise_plan = if rest {
        PersonalizedExercisePlan::rest(day_number, week, profile.difficulty_tier())
    } else {
        generate_workout(catalog, profile, day_number)
    };
    let meal_plan = plan_meals(catalog, targets, fasting, day_number);

    let under_populated =
        meal_plan.meals.len() < 2 || (!rest && exercise_plan.exercises.is_empty());
    if under_populated {
        tracing::warn!(
            "Day {} is under-populated: {} exercises, {} meals",
            day_number,
            exercise_plan.exercises.len(),
            meal_plan.meals.len()
        );
    }

    let reasoning = if rest {
        format!(
            "Day {}: rest day. Keep the {} fast going and eat inside {}.",
            day_number, fasting.protocol, fasting.eating_window
        )
    } else {
        format!(
            "Day {}: {} minute training session, {} fast, {} kcal planned.",
            day_number,
            exercise_plan.estimated_minutes,
            fasting.protocol,
            meal_plan.totals.calories
        )
    };

    DailySchedule {
        day_number,
        week_number: week,
        week_day: week_day(day_number),
        is_rest_day: rest,
        under_populated,
        exercise_plan,
        meal_plan,
        fasting_plan: fasting.clone(),
        reasoning,
    }
}

/// Seven consecutive days starting at `start_day`
///
/// `start_day` is clamped to `1..=LAST_WEEK_START` so the week always has
/// seven days.
pub fn generate_week<C: CatalogRepository + ?Sized>(
    catalog: &C,
    profile: &UserProfile,
    start_day: u32,
    today: NaiveDate,
) -> WeeklySchedule {
    let start_day = start_day.clamp(1, LAST_WEEK_START);
    let targets = compute_targets(profile, today);
    let fasting = generate_fasting_plan(profile);

    let days: Vec<DailySchedule> = (start_day..=start_day + 6)
        .map(|day| compose_day(catalog, profile, day, &targets, &fasting))
        .collect();
    let summary = summarize(&days);

    tracing::info!(
        "Generated week from day {}: {} training, {} rest",
        start_day,
        summary.training_days,
        summary.rest_days
    );

    WeeklySchedule {
        week_number: week_number(start_day),
        start_day,
        days,
        summary,
    }
}

/// Consecutive weeks from week 1
pub fn generate_plan<C: CatalogRepository + ?Sized>(
    catalog: &C,
    profile: &UserProfile,
    weeks: u32,
    today: NaiveDate,
) -> Vec<WeeklySchedule> {
    (1..=weeks)
        .map(|week| generate_week(catalog, profile, week_start_day(week), today))
        .collect()
}

pub fn summarize(days: &[DailySchedule]) -> WeekSummary {
    let mut summary = WeekSummary::default();
    let mut intake = 0u64;

    for day in days {
        if day.is_rest_day {
            summary.rest_days += 1;
        } else {
            summary.training_days += 1;
        }
        if day.under_populated {
            summary.under_populated_days += 1;
        }
        summary.total_exercise_minutes = summary
            .total_exercise_minutes
            .saturating_add(day.exercise_plan.estimated_minutes);
        summary.total_calories_burned = summary
            .total_calories_burned
            .saturating_add(day.exercise_plan.estimated_calories);
        intake = intake.saturating_add(u64::from(day.meal_plan.totals.calories));
    }

    if !days.is_empty() {
        summary.average_daily_intake =
            (intake as f64 / days.len() as f64).round() as u32;
    }
    summary
}
