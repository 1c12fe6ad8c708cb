//! Content catalog of exercises and meals.
//!
//! The engines only see the catalog through [`CatalogRepository`], so the
//! built-in static content can be swapped for a JSON file (or any other
//! store) without touching engine logic.

use crate::types::*;
use crate::Result;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

/// Read-only query access to exercise and meal content
///
/// Implementations must be safe for concurrent reads; the engines never write.
pub trait CatalogRepository {
    fn exercises(&self) -> &[CatalogExercise];

    fn meals(&self) -> &[CatalogMeal];

    /// All exercises of one difficulty tier, in catalog order
    fn exercises_by_difficulty(&self, tier: DifficultyTier) -> Vec<&CatalogExercise> {
        self.exercises()
            .iter()
            .filter(|e| e.difficulty == tier)
            .collect()
    }

    /// Exercises of a tier that hit at least one of `groups`
    fn exercises_by_muscle_groups(
        &self,
        groups: &[MuscleGroup],
        tier: DifficultyTier,
    ) -> Vec<&CatalogExercise> {
        self.exercises()
            .iter()
            .filter(|e| e.difficulty == tier && e.targets_any(groups))
            .collect()
    }

    fn meals_by_type(&self, meal_type: MealType) -> Vec<&CatalogMeal> {
        self.meals()
            .iter()
            .filter(|m| m.meal_type == meal_type)
            .collect()
    }

    /// Meals of a type whose calories fall inside `[min, max]`
    fn meals_by_type_and_calorie_range(
        &self,
        meal_type: MealType,
        min: f64,
        max: f64,
    ) -> Vec<&CatalogMeal> {
        self.meals()
            .iter()
            .filter(|m| {
                let calories = f64::from(m.calories);
                m.meal_type == meal_type && calories >= min && calories <= max
            })
            .collect()
    }
}

impl CatalogRepository for Catalog {
    fn exercises(&self) -> &[CatalogExercise] {
        &self.exercises
    }

    fn meals(&self) -> &[CatalogMeal] {
        &self.meals
    }
}

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds a fresh copy of the built-in catalog
///
/// **Note**: prefer `get_default_catalog()` outside tests.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

#[allow(clippy::too_many_arguments)]
fn exercise(
    id: &str,
    name: &str,
    muscle_groups: &[MuscleGroup],
    difficulty: DifficultyTier,
    modality: Modality,
    default_sets: u32,
    work: WorkPrescription,
    rest_seconds: u32,
    calories: u32,
) -> CatalogExercise {
    CatalogExercise {
        id: id.into(),
        name: name.into(),
        muscle_groups: muscle_groups.to_vec(),
        difficulty,
        modality,
        default_sets,
        work,
        rest_seconds,
        calories,
    }
}

fn meal(
    id: &str,
    name: &str,
    meal_type: MealType,
    calories: u32,
    (protein_g, carbs_g, fat_g): (f64, f64, f64),
    tags: &[&str],
) -> CatalogMeal {
    CatalogMeal {
        id: id.into(),
        name: name.into(),
        meal_type,
        calories,
        protein_g,
        carbs_g,
        fat_g,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn reps(reps: u32) -> WorkPrescription {
    WorkPrescription::Reps { reps }
}

fn timed(seconds: u32) -> WorkPrescription {
    WorkPrescription::Timed { seconds }
}

#[rustfmt::skip]
fn build_default_catalog_internal() -> Catalog {
    use DifficultyTier::*;
    use Modality::{Cardio as CardioWork, Flexibility, Hiit, Strength};
    use MuscleGroup::*;

    // ========================================================================
    // Exercises
    // ========================================================================

    let exercises = vec![
        // Beginner
        exercise("b_knee_push_up", "Knee Push-up", &[Chest, Triceps], Beginner, Strength, 3, reps(10), 60, 25),
        exercise("b_band_pull_apart", "Band Pull-apart", &[Back, Shoulders], Beginner, Strength, 3, reps(12), 45, 15),
        exercise("b_superman_hold", "Superman Hold", &[Back, Core], Beginner, Strength, 3, timed(20), 45, 15),
        exercise("b_light_curl", "Light Dumbbell Curl", &[Biceps], Beginner, Strength, 3, reps(12), 45, 15),
        exercise("b_bent_knee_dip", "Bent-knee Bench Dip", &[Triceps, Chest], Beginner, Strength, 3, reps(8), 60, 20),
        exercise("b_arm_circles", "Arm Circles", &[Shoulders], Beginner, Flexibility, 2, timed(30), 30, 10),
        exercise("b_bodyweight_squat", "Bodyweight Squat", &[Quads, Glutes], Beginner, Strength, 3, reps(12), 60, 30),
        exercise("b_glute_bridge", "Glute Bridge", &[Glutes, Hamstrings], Beginner, Strength, 3, reps(12), 45, 20),
        exercise("b_calf_raise", "Standing Calf Raise", &[Calves], Beginner, Strength, 3, reps(15), 30, 10),
        exercise("b_forearm_plank", "Forearm Plank", &[Core], Beginner, Strength, 3, timed(20), 45, 15),
        exercise("b_dead_bug", "Dead Bug", &[Core], Beginner, Strength, 3, reps(10), 45, 15),
        exercise("b_marching", "Marching in Place", &[Cardio], Beginner, CardioWork, 2, timed(60), 30, 30),
        exercise("b_jumping_jacks", "Jumping Jacks", &[Cardio, FullBody], Beginner, CardioWork, 3, timed(30), 30, 35),
        exercise("b_reverse_lunge", "Step-back Lunge", &[Quads, Glutes, Hamstrings], Beginner, Strength, 3, reps(8), 60, 30),
        exercise("b_inchworm", "Inchworm", &[FullBody, Hamstrings, Shoulders], Beginner, Flexibility, 2, reps(6), 45, 20),
        exercise("b_cat_cow", "Cat-Cow Stretch", &[Back, Core], Beginner, Flexibility, 2, timed(45), 15, 8),
        exercise("b_step_burpee", "Step-out Burpee", &[FullBody, Cardio], Beginner, Hiit, 3, reps(6), 60, 35),
        // Intermediate
        exercise("i_push_up", "Push-up", &[Chest, Triceps, Shoulders], Intermediate, Strength, 3, reps(12), 60, 35),
        exercise("i_dumbbell_row", "Dumbbell Row", &[Back, Biceps], Intermediate, Strength, 3, reps(10), 60, 35),
        exercise("i_pike_push_up", "Pike Push-up", &[Shoulders, Triceps], Intermediate, Strength, 3, reps(8), 60, 30),
        exercise("i_hammer_curl", "Hammer Curl", &[Biceps], Intermediate, Strength, 3, reps(12), 45, 20),
        exercise("i_bench_dip", "Bench Dip", &[Triceps], Intermediate, Strength, 3, reps(12), 60, 25),
        exercise("i_goblet_squat", "Goblet Squat", &[Quads, Glutes], Intermediate, Strength, 4, reps(12), 75, 45),
        exercise("i_romanian_deadlift", "Romanian Deadlift", &[Hamstrings, Glutes, Back], Intermediate, Strength, 4, reps(10), 75, 45),
        exercise("i_walking_lunge", "Walking Lunge", &[Quads, Glutes], Intermediate, Strength, 3, reps(12), 60, 40),
        exercise("i_single_calf_raise", "Single-leg Calf Raise", &[Calves], Intermediate, Strength, 3, reps(12), 30, 12),
        exercise("i_plank", "Plank", &[Core], Intermediate, Strength, 3, timed(45), 45, 20),
        exercise("i_bicycle_crunch", "Bicycle Crunch", &[Core], Intermediate, Strength, 3, reps(20), 45, 20),
        exercise("i_mountain_climber", "Mountain Climber", &[Cardio, Core], Intermediate, Hiit, 3, timed(40), 30, 45),
        exercise("i_burpee", "Burpee", &[FullBody, Cardio], Intermediate, Hiit, 3, reps(10), 60, 50),
        exercise("i_jump_rope", "Jump Rope", &[Cardio, Calves], Intermediate, CardioWork, 3, timed(60), 45, 55),
        exercise("i_kettlebell_swing", "Kettlebell Swing", &[FullBody, Glutes, Hamstrings], Intermediate, Strength, 3, reps(15), 60, 50),
        exercise("i_hip_thrust", "Hip Thrust", &[Glutes], Intermediate, Strength, 3, reps(12), 60, 30),
        exercise("i_worlds_greatest_stretch", "World's Greatest Stretch", &[FullBody], Intermediate, Flexibility, 2, timed(45), 15, 10),
        // Advanced
        exercise("a_decline_push_up", "Decline Push-up", &[Chest, Triceps], Advanced, Strength, 4, reps(12), 75, 45),
        exercise("a_pull_up", "Pull-up", &[Back, Biceps], Advanced, Strength, 4, reps(8), 90, 45),
        exercise("a_handstand_push_up", "Handstand Push-up", &[Shoulders, Triceps], Advanced, Strength, 4, reps(6), 90, 40),
        exercise("a_chin_up", "Chin-up", &[Biceps, Back], Advanced, Strength, 4, reps(8), 90, 40),
        exercise("a_bar_dip", "Parallel Bar Dip", &[Triceps, Chest], Advanced, Strength, 4, reps(12), 75, 45),
        exercise("a_back_squat", "Barbell Back Squat", &[Quads, Glutes], Advanced, Strength, 5, reps(8), 120, 70),
        exercise("a_deadlift", "Barbell Deadlift", &[Hamstrings, Glutes, Back], Advanced, Strength, 5, reps(6), 150, 75),
        exercise("a_split_squat", "Bulgarian Split Squat", &[Quads, Glutes], Advanced, Strength, 4, reps(10), 75, 55),
        exercise("a_weighted_calf_raise", "Weighted Calf Raise", &[Calves], Advanced, Strength, 4, reps(15), 45, 18),
        exercise("a_hanging_leg_raise", "Hanging Leg Raise", &[Core], Advanced, Strength, 4, reps(12), 60, 30),
        exercise("a_ab_wheel", "Ab Wheel Rollout", &[Core], Advanced, Strength, 4, reps(10), 60, 30),
        exercise("a_sprint_intervals", "Sprint Intervals", &[Cardio], Advanced, Hiit, 5, timed(30), 60, 90),
        exercise("a_burpee_tuck_jump", "Burpee Tuck Jump", &[FullBody, Cardio], Advanced, Hiit, 4, reps(10), 60, 70),
        exercise("a_thruster", "Dumbbell Thruster", &[FullBody, Quads, Shoulders], Advanced, Strength, 4, reps(10), 90, 70),
        exercise("a_box_jump", "Box Jump", &[Quads, Calves, Cardio], Advanced, Hiit, 4, reps(10), 60, 50),
        exercise("a_nordic_curl", "Nordic Hamstring Curl", &[Hamstrings], Advanced, Strength, 3, reps(6), 90, 30),
        exercise("a_l_sit", "L-sit Hold", &[Core], Advanced, Strength, 4, timed(20), 60, 20),
    ];

    // ========================================================================
    // Meals
    // ========================================================================

    let meals = vec![
        meal("bf_overnight_oats", "Berry Overnight Oats", MealType::Breakfast, 420, (22.0, 60.0, 10.0), &["vegetarian"]),
        meal("bf_veggie_omelette", "Veggie Omelette & Toast", MealType::Breakfast, 480, (30.0, 35.0, 22.0), &["vegetarian"]),
        meal("bf_protein_pancakes", "Protein Pancakes", MealType::Breakfast, 560, (38.0, 65.0, 14.0), &[]),
        meal("lu_greek_chicken_salad", "Greek Chicken Salad", MealType::Lunch, 380, (32.0, 18.0, 20.0), &["low_carb"]),
        meal("lu_tuna_nicoise", "Tuna Nicoise", MealType::Lunch, 450, (35.0, 30.0, 20.0), &["pescatarian"]),
        meal("lu_turkey_quinoa_bowl", "Turkey Quinoa Bowl", MealType::Lunch, 520, (38.0, 55.0, 16.0), &[]),
        meal("lu_salmon_poke", "Salmon Poke Bowl", MealType::Lunch, 600, (36.0, 65.0, 20.0), &["pescatarian"]),
        meal("lu_chicken_burrito_bowl", "Chicken Burrito Bowl", MealType::Lunch, 680, (45.0, 75.0, 20.0), &[]),
        meal("lu_lentil_curry", "Lentil Curry with Rice", MealType::Lunch, 720, (30.0, 110.0, 16.0), &["vegan"]),
        meal("lu_beef_noodles", "Beef Stir-fry Noodles", MealType::Lunch, 800, (45.0, 90.0, 26.0), &[]),
        meal("lu_pesto_pasta", "Chicken Pesto Pasta", MealType::Lunch, 880, (50.0, 95.0, 30.0), &[]),
        meal("lu_steak_sweet_potato", "Steak & Sweet Potato", MealType::Lunch, 950, (60.0, 85.0, 38.0), &["high_protein"]),
        meal("lu_protein_wrap_plate", "Loaded Protein Wrap Plate", MealType::Lunch, 1100, (70.0, 110.0, 38.0), &["high_protein"]),
        meal("lu_double_rice_bowl", "Double Chicken Rice Bowl", MealType::Lunch, 1300, (90.0, 140.0, 36.0), &["high_protein"]),
        meal("di_baked_cod", "Baked Cod & Roast Vegetables", MealType::Dinner, 550, (45.0, 35.0, 22.0), &["pescatarian", "low_carb"]),
        meal("di_chicken_stir_fry", "Chicken Stir-fry", MealType::Dinner, 650, (48.0, 55.0, 22.0), &[]),
        meal("di_turkey_meatballs", "Turkey Meatballs & Zoodles", MealType::Dinner, 720, (52.0, 40.0, 36.0), &["low_carb"]),
        meal("di_salmon_quinoa", "Salmon, Quinoa & Greens", MealType::Dinner, 800, (50.0, 60.0, 36.0), &["pescatarian"]),
        meal("di_beef_chili", "Lean Beef Chili", MealType::Dinner, 880, (60.0, 80.0, 30.0), &[]),
        meal("di_chicken_fajitas", "Chicken Fajita Plate", MealType::Dinner, 950, (62.0, 95.0, 32.0), &[]),
        meal("di_teriyaki_salmon", "Teriyaki Salmon & Rice", MealType::Dinner, 1050, (58.0, 120.0, 34.0), &["pescatarian"]),
        meal("di_steak_potatoes", "Steak, Potatoes & Broccoli", MealType::Dinner, 1150, (70.0, 100.0, 48.0), &["high_protein"]),
        meal("di_pasta_bolognese", "Pasta Bolognese", MealType::Dinner, 1250, (65.0, 150.0, 40.0), &[]),
        meal("di_roast_chicken", "Roast Chicken Dinner", MealType::Dinner, 1400, (85.0, 140.0, 52.0), &["high_protein"]),
        meal("di_ribeye_mash", "Ribeye & Mash", MealType::Dinner, 1600, (90.0, 130.0, 75.0), &["high_protein"]),
        meal("di_burrito_feast", "Double Burrito Feast", MealType::Dinner, 1900, (100.0, 210.0, 65.0), &["high_protein"]),
        meal("di_athlete_plate", "Athlete Double Plate", MealType::Dinner, 2300, (130.0, 250.0, 80.0), &["high_protein"]),
    ];

    Catalog { exercises, meals }
}

impl Catalog {
    /// Load a catalog from a JSON file with `exercises` and `meals` arrays
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&contents)?;
        tracing::info!(
            "Loaded catalog from {:?} ({} exercises, {} meals)",
            path,
            catalog.exercises.len(),
            catalog.meals.len()
        );
        Ok(catalog)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for exercise in &self.exercises {
            if exercise.id.is_empty() {
                errors.push(format!("Exercise '{}' has empty ID", exercise.name));
            } else if !seen.insert(exercise.id.as_str()) {
                errors.push(format!("Duplicate exercise ID '{}'", exercise.id));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", exercise.id));
            }
            if exercise.muscle_groups.is_empty() {
                errors.push(format!("Exercise '{}' has no muscle groups", exercise.id));
            }
            if exercise.default_sets == 0 {
                errors.push(format!("Exercise '{}' has zero sets", exercise.id));
            }
            if exercise.work.amount() == 0 {
                errors.push(format!("Exercise '{}' has no work per set", exercise.id));
            }
        }

        for tier in [
            DifficultyTier::Beginner,
            DifficultyTier::Intermediate,
            DifficultyTier::Advanced,
        ] {
            if self.exercises_by_difficulty(tier).is_empty() {
                errors.push(format!("Catalog has no {:?} exercises", tier));
            }
        }

        let mut seen = HashSet::new();
        for meal in &self.meals {
            if meal.id.is_empty() {
                errors.push(format!("Meal '{}' has empty ID", meal.name));
            } else if !seen.insert(meal.id.as_str()) {
                errors.push(format!("Duplicate meal ID '{}'", meal.id));
            }
            if meal.name.is_empty() {
                errors.push(format!("Meal '{}' has empty name", meal.id));
            }
            if meal.protein_g < 0.0 || meal.carbs_g < 0.0 || meal.fat_g < 0.0 {
                errors.push(format!("Meal '{}' has negative macros", meal.id));
            }
        }

        // The meal engine fills its two slots from lunch and dinner
        for meal_type in [MealType::Lunch, MealType::Dinner] {
            if self.meals_by_type(meal_type).is_empty() {
                errors.push(format!("Catalog has no {:?} meals", meal_type));
            }
        }

        errors
    }
}
