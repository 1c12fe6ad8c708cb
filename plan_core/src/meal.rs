//! Meal plan engine.
//!
//! Every day gets exactly two slots: a light lunch at 35% of the daily
//! targets and a main dinner at 65%. The fasting plan's meal-count intent
//! is reported alongside but does not change the slot count.

use crate::catalog::CatalogRepository;
use crate::fasting::generate_fasting_plan;
use crate::targets::compute_targets;
use crate::{
    CatalogMeal, MealRole, MealType, NutritionTargets, NutritionTotals, PersonalizedFastingPlan,
    PersonalizedMealPlan, PlannedMeal, UserProfile,
};
use chrono::NaiveDate;

pub const LIGHT_SHARE: f64 = 0.35;
pub const MAIN_SHARE: f64 = 0.65;
/// Accepted deviation from a slot's calorie target
pub const CALORIE_TOLERANCE: f64 = 0.2;
/// Closest meals kept when nothing falls inside the tolerance band
pub const FALLBACK_CANDIDATES: usize = 3;

impl MealRole {
    pub fn share(self) -> f64 {
        match self {
            MealRole::Light => LIGHT_SHARE,
            MealRole::Main => MAIN_SHARE,
        }
    }

    /// Catalog meal type that fills this slot
    pub fn meal_type(self) -> MealType {
        match self {
            MealRole::Light => MealType::Lunch,
            MealRole::Main => MealType::Dinner,
        }
    }
}

/// Meals eligible for a slot, in catalog order
///
/// Meals within ±20% of the target; otherwise the three closest by
/// absolute calorie difference.
pub fn slot_candidates<C: CatalogRepository + ?Sized>(
    catalog: &C,
    meal_type: MealType,
    target_calories: f64,
) -> Vec<&CatalogMeal> {
    let within = catalog.meals_by_type_and_calorie_range(
        meal_type,
        target_calories * (1.0 - CALORIE_TOLERANCE),
        target_calories * (1.0 + CALORIE_TOLERANCE),
    );
    if !within.is_empty() {
        return within;
    }

    let mut closest = catalog.meals_by_type(meal_type);
    closest.sort_by(|a, b| {
        let da = (f64::from(a.calories) - target_calories).abs();
        let db = (f64::from(b.calories) - target_calories).abs();
        da.total_cmp(&db)
    });
    closest.truncate(FALLBACK_CANDIDATES);

    tracing::debug!(
        "No {:?} meal within ±{}% of {:.0} kcal, falling back to {} closest",
        meal_type,
        CALORIE_TOLERANCE * 100.0,
        target_calories,
        closest.len()
    );
    closest
}

fn plan_slot<C: CatalogRepository + ?Sized>(
    catalog: &C,
    role: MealRole,
    targets: &NutritionTargets,
    day_number: u32,
) -> Option<PlannedMeal> {
    let target_calories = f64::from(targets.daily_calories) * role.share();
    let target_protein = f64::from(targets.daily_protein_g) * role.share();

    let candidates = slot_candidates(catalog, role.meal_type(), target_calories);
    if candidates.is_empty() {
        tracing::warn!("No {:?} meals available for the {:?} slot", role.meal_type(), role);
        return None;
    }

    let chosen = candidates[day_number as usize % candidates.len()];

    Some(PlannedMeal {
        role,
        meal_id: chosen.id.clone(),
        name: chosen.name.clone(),
        meal_type: chosen.meal_type,
        calories: chosen.calories,
        protein_g: chosen.protein_g,
        carbs_g: chosen.carbs_g,
        fat_g: chosen.fat_g,
        target_calories: target_calories.round() as u32,
        target_protein_g: target_protein.round() as u32,
    })
}

/// Build the day's meal plan from the profile alone
pub fn generate_meal_plan<C: CatalogRepository + ?Sized>(
    catalog: &C,
    profile: &UserProfile,
    day_number: u32,
    today: NaiveDate,
) -> PersonalizedMealPlan {
    let targets = compute_targets(profile, today);
    let fasting = generate_fasting_plan(profile);
    plan_meals(catalog, &targets, &fasting, day_number)
}

/// Build the day's meal plan from precomputed targets and fasting plan
pub fn plan_meals<C: CatalogRepository + ?Sized>(
    catalog: &C,
    targets: &NutritionTargets,
    fasting: &PersonalizedFastingPlan,
    day_number: u32,
) -> PersonalizedMealPlan {
    let meals: Vec<PlannedMeal> = [MealRole::Light, MealRole::Main]
        .into_iter()
        .filter_map(|role| plan_slot(catalog, role, targets, day_number))
        .collect();

    let totals = meals.iter().fold(NutritionTotals::default(), |acc, m| NutritionTotals {
        calories: acc.calories.saturating_add(m.calories),
        protein_g: acc.protein_g + m.protein_g,
        carbs_g: acc.carbs_g + m.carbs_g,
        fat_g: acc.fat_g + m.fat_g,
    });

    let mut reasoning = format!(
        "{} meal(s) inside your {} eating window ({} protocol), aiming for {} kcal and {} g \
         protein split 35/65 between a light lunch and a main dinner.",
        meals.len(),
        fasting.eating_window,
        fasting.protocol,
        targets.daily_calories,
        targets.daily_protein_g
    );

    if usize::from(fasting.meal_count_intent) != meals.len() {
        // Open product question: the protocol's intent is reported, not enforced
        tracing::debug!(
            "Fasting protocol intends {} meal(s), meal plan has {}",
            fasting.meal_count_intent,
            meals.len()
        );
        reasoning.push_str(&format!(
            " Your fasting protocol suggests {} meal(s); both slots are kept so they can be \
             combined if you prefer.",
            fasting.meal_count_intent
        ));
    }

    PersonalizedMealPlan {
        day_number,
        daily_calorie_target: targets.daily_calories,
        daily_protein_target: targets.daily_protein_g,
        meals,
        totals,
        eating_window: fasting.eating_window,
        meal_count_intent: fasting.meal_count_intent,
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_default_catalog;
    use crate::{ActivityLevel, Catalog, Gender, Goal};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn profiles() -> Vec<UserProfile> {
        let base = UserProfile {
            gender: Some(Gender::Male),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 1, 1),
            activity_level: Some(ActivityLevel::LightlyActive),
            primary_goal: Some(Goal::GetFitToned),
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            ..Default::default()
        };

        vec![
            base.clone(),
            UserProfile {
                gender: Some(Gender::Female),
                primary_goal: Some(Goal::LoseWeight),
                height_cm: Some(165.0),
                weight_kg: Some(60.0),
                ..base.clone()
            },
            UserProfile {
                primary_goal: Some(Goal::BuildMuscle),
                activity_level: Some(ActivityLevel::ModeratelyActive),
                weight_kg: Some(90.0),
                ..base.clone()
            },
            UserProfile {
                primary_goal: Some(Goal::GainMuscleLoseWeight),
                activity_level: Some(ActivityLevel::VeryActive),
                ..base
            },
        ]
    }

    #[test]
    fn test_always_two_meals_within_bands() {
        let catalog = get_default_catalog();
        for profile in profiles() {
            let targets = compute_targets(&profile, today());
            let light = f64::from(targets.daily_calories) * LIGHT_SHARE;
            let main = f64::from(targets.daily_calories) * MAIN_SHARE;

            for day in 1..=28 {
                let plan = generate_meal_plan(catalog, &profile, day, today());
                assert_eq!(plan.meals.len(), 2);
                assert_eq!(plan.meals[0].role, MealRole::Light);
                assert_eq!(plan.meals[0].meal_type, MealType::Lunch);
                assert_eq!(plan.meals[1].meal_type, MealType::Dinner);

                let total = f64::from(plan.totals.calories);
                assert!(total >= (light + main) * 0.8, "day {} total {}", day, total);
                assert!(total <= (light + main) * 1.2, "day {} total {}", day, total);
            }
        }
    }

    #[test]
    fn test_rotation_uses_day_modulo() {
        let catalog = get_default_catalog();
        let profile = &profiles()[0];
        let targets = compute_targets(profile, today());
        let light_target = f64::from(targets.daily_calories) * LIGHT_SHARE;
        let candidates = slot_candidates(catalog, MealType::Lunch, light_target);
        let len = candidates.len() as u32;

        for day in 1..=10 {
            let plan = generate_meal_plan(catalog, profile, day, today());
            let expected = candidates[(day % len) as usize];
            assert_eq!(plan.meals[0].meal_id, expected.id);
        }

        let first = generate_meal_plan(catalog, profile, 1, today());
        let wrapped = generate_meal_plan(catalog, profile, 1 + len, today());
        assert_eq!(first.meals[0].meal_id, wrapped.meals[0].meal_id);
    }

    #[test]
    fn test_fallback_to_closest_three() {
        let catalog = get_default_catalog();
        // Far below every lunch in the catalog
        let candidates = slot_candidates(catalog, MealType::Lunch, 100.0);
        let calories: Vec<u32> = candidates.iter().map(|m| m.calories).collect();
        assert_eq!(calories, vec![380, 450, 520]);

        let high = slot_candidates(catalog, MealType::Dinner, 5000.0);
        let calories: Vec<u32> = high.iter().map(|m| m.calories).collect();
        assert_eq!(calories, vec![2300, 1900, 1600]);
    }

    #[test]
    fn test_totals_sum_meals() {
        let catalog = get_default_catalog();
        let plan = generate_meal_plan(catalog, &profiles()[0], 3, today());
        let calories: u32 = plan.meals.iter().map(|m| m.calories).sum();
        let protein: f64 = plan.meals.iter().map(|m| m.protein_g).sum();
        assert_eq!(plan.totals.calories, calories);
        assert!((plan.totals.protein_g - protein).abs() < 1e-9);
        assert_eq!(plan.daily_calorie_target, 2267);
    }

    #[test]
    fn test_eating_window_copied_from_fasting() {
        let catalog = get_default_catalog();
        for profile in profiles() {
            let fasting = generate_fasting_plan(&profile);
            let plan = generate_meal_plan(catalog, &profile, 1, today());
            assert_eq!(plan.eating_window, fasting.eating_window);
            assert_eq!(plan.meal_count_intent, fasting.meal_count_intent);
        }
    }

    #[test]
    fn test_one_meal_intent_still_two_slots() {
        let catalog = get_default_catalog();
        let profile = UserProfile {
            bmi: Some(33.0),
            primary_goal: Some(Goal::LoseWeight),
            activity_level: Some(ActivityLevel::Sedentary),
            ..profiles()[0].clone()
        };
        let plan = generate_meal_plan(catalog, &profile, 1, today());
        assert_eq!(plan.meal_count_intent, 1);
        assert_eq!(plan.meals.len(), 2);
        assert!(plan.reasoning.contains("suggests 1 meal"));
    }

    #[test]
    fn test_empty_catalog_zeroed() {
        let catalog = Catalog::default();
        let plan = generate_meal_plan(&catalog, &profiles()[0], 1, today());
        assert!(plan.meals.is_empty());
        assert_eq!(plan.totals, NutritionTotals::default());
    }
}
