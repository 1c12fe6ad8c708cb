//! Calorie and protein targets (Mifflin-St Jeor).
//!
//! `today` is passed in explicitly so the calculation stays a pure
//! function of its inputs.

use crate::{ActivityLevel, Gender, Goal, NutritionTargets, UserProfile};
use chrono::NaiveDate;

/// Basal metabolic rate in kcal/day
pub fn bmr(gender: Gender, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

pub fn activity_multiplier(activity: ActivityLevel) -> f64 {
    match activity {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
    }
}

/// Calorie adjustment relative to maintenance
pub fn calorie_multiplier(goal: Goal) -> f64 {
    match goal {
        Goal::LoseWeight => 0.8,
        Goal::BuildMuscle => 1.15,
        Goal::GainMuscleLoseWeight => 0.95,
        Goal::GetFitToned => 1.0,
    }
}

/// Grams of protein per kg of body weight
pub fn protein_per_kg(goal: Goal) -> f64 {
    match goal {
        Goal::BuildMuscle => 2.0,
        Goal::GainMuscleLoseWeight => 1.8,
        Goal::LoseWeight => 1.5,
        Goal::GetFitToned => 1.4,
    }
}

/// Compute the daily calorie and protein targets for a profile
pub fn compute_targets(profile: &UserProfile, today: NaiveDate) -> NutritionTargets {
    let age_years = profile.age_on(today);
    let weight = profile.weight();
    let goal = profile.goal();

    let bmr = bmr(profile.gender(), weight, profile.height(), age_years);
    let tdee = bmr * activity_multiplier(profile.activity());
    let daily_calories = (tdee * calorie_multiplier(goal)).round().max(0.0) as u32;
    let daily_protein_g = (weight * protein_per_kg(goal)).round().max(0.0) as u32;

    tracing::debug!(
        "Targets: age {}, BMR {:.2}, TDEE {:.1}, {} kcal, {} g protein",
        age_years,
        bmr,
        tdee,
        daily_calories,
        daily_protein_g
    );

    NutritionTargets {
        age_years,
        bmr,
        tdee,
        daily_calories,
        daily_protein_g,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_profile() -> UserProfile {
        UserProfile {
            gender: Some(Gender::Male),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 1, 1),
            primary_goal: Some(Goal::GetFitToned),
            activity_level: Some(ActivityLevel::LightlyActive),
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_male_targets() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let targets = compute_targets(&reference_profile(), today);

        assert_eq!(targets.age_years, 30);
        // Derived from the Mifflin-St Jeor formula: 700 + 1093.75 - 150 + 5.
        // The often-quoted 1733.75 / 2384 figures for this profile are wrong.
        assert!((targets.bmr - 1648.75).abs() < 1e-9);
        assert!((targets.tdee - 2267.03125).abs() < 1e-6);
        assert_eq!(targets.daily_calories, 2267);
        assert_eq!(targets.daily_protein_g, 98);
    }

    #[test]
    fn test_female_offset() {
        let male = bmr(Gender::Male, 60.0, 165.0, 30);
        let female = bmr(Gender::Female, 60.0, 165.0, 30);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_goal_multipliers_apply() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut profile = reference_profile();

        profile.primary_goal = Some(Goal::LoseWeight);
        let cut = compute_targets(&profile, today);
        assert_eq!(cut.daily_calories, (2267.03125_f64 * 0.8).round() as u32);
        assert_eq!(cut.daily_protein_g, 105);

        profile.primary_goal = Some(Goal::BuildMuscle);
        let bulk = compute_targets(&profile, today);
        assert_eq!(bulk.daily_calories, (2267.03125_f64 * 1.15).round() as u32);
        assert_eq!(bulk.daily_protein_g, 140);
    }

    #[test]
    fn test_age_depends_on_today() {
        let profile = reference_profile();
        let earlier = compute_targets(&profile, NaiveDate::from_ymd_opt(2020, 6, 1).unwrap());
        let later = compute_targets(&profile, NaiveDate::from_ymd_opt(2030, 6, 1).unwrap());
        assert!((earlier.bmr - later.bmr - 50.0).abs() < 1e-9);
    }
}
