//! Core domain types for the personalized plan engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - The onboarding profile and its enumerated answers
//! - Catalog exercises and meals
//! - Engine outputs (fasting, exercise, meal plans) and composed schedules

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Enumerations
// ============================================================================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    #[default]
    Female,
}

/// Primary goal picked during onboarding
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    BuildMuscle,
    GainMuscleLoseWeight,
    #[default]
    GetFitToned,
}

impl Goal {
    /// Goals that put fat loss first
    pub fn is_weight_loss(self) -> bool {
        matches!(self, Goal::LoseWeight | Goal::GainMuscleLoseWeight)
    }

    pub fn is_muscle_building(self) -> bool {
        matches!(self, Goal::BuildMuscle)
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::LoseWeight => "lose weight",
            Goal::BuildMuscle => "build muscle",
            Goal::GainMuscleLoseWeight => "gain muscle and lose weight",
            Goal::GetFitToned => "get fit and toned",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MetabolicType {
    Slow,
    #[default]
    Normal,
    Fast,
}

/// Sessions per week the user is willing to train
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TrainingFrequency {
    #[serde(rename = "2-3")]
    TwoToThree,
    #[default]
    #[serde(rename = "4-5")]
    FourToFive,
    #[serde(rename = "6-7")]
    SixToSeven,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum WorkoutDuration {
    #[serde(rename = "15_min")]
    Minutes15,
    #[default]
    #[serde(rename = "30_min")]
    Minutes30,
    #[serde(rename = "45_min")]
    Minutes45,
    #[serde(rename = "60_min")]
    Minutes60,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgeCategory {
    #[serde(rename = "18_29")]
    From18To29,
    #[serde(rename = "30_39")]
    From30To39,
    #[serde(rename = "40_49")]
    From40To49,
    #[serde(rename = "50_plus")]
    FiftyPlus,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    Ectomorph,
    Mesomorph,
    Endomorph,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Body areas the user wants to work on
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProblemArea {
    Belly,
    Arms,
    Chest,
    Back,
    Shoulders,
    Glutes,
    Legs,
}

/// Self-assessed fitness scores on a 1-5 scale
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct FitnessAssessment {
    #[serde(default)]
    pub strength: Option<u8>,
    #[serde(default)]
    pub endurance: Option<u8>,
}

// ============================================================================
// Onboarding Profile
// ============================================================================

/// Static onboarding profile. Every optional answer has a documented default
/// (see the accessors in `profile.rs`), so a sparse profile is always usable.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub age_category: Option<AgeCategory>,
    #[serde(default)]
    pub primary_goal: Option<Goal>,
    #[serde(default)]
    pub body_type: Option<BodyType>,
    #[serde(default)]
    pub problem_areas: Vec<ProblemArea>,
    #[serde(default)]
    pub desired_body: Option<String>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub fitness_assessment: FitnessAssessment,
    #[serde(default)]
    pub metabolic_type: Option<MetabolicType>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub training_frequency: Option<TrainingFrequency>,
    #[serde(default)]
    pub workout_duration: Option<WorkoutDuration>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub bmi: Option<f64>,
}

// ============================================================================
// Catalog Types
// ============================================================================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Core,
    Glutes,
    Quads,
    Hamstrings,
    Calves,
    FullBody,
    Cardio,
}

impl MuscleGroup {
    /// Groups kept in a day's focus even when the goal doesn't target them
    pub fn is_anchor(self) -> bool {
        matches!(self, MuscleGroup::FullBody | MuscleGroup::Cardio)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Strength,
    Cardio,
    Flexibility,
    Hiit,
}

/// How a single set is prescribed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkPrescription {
    Reps { reps: u32 },
    Timed { seconds: u32 },
}

impl WorkPrescription {
    /// Reps or seconds, whichever applies
    pub fn amount(&self) -> u32 {
        match self {
            WorkPrescription::Reps { reps } => *reps,
            WorkPrescription::Timed { seconds } => *seconds,
        }
    }
}

/// A static exercise definition
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogExercise {
    pub id: String,
    pub name: String,
    pub muscle_groups: Vec<MuscleGroup>,
    pub difficulty: DifficultyTier,
    pub modality: Modality,
    pub default_sets: u32,
    pub work: WorkPrescription,
    pub rest_seconds: u32,
    /// Flat estimate for the whole exercise at default volume
    pub calories: u32,
}

impl CatalogExercise {
    pub fn targets_any(&self, groups: &[MuscleGroup]) -> bool {
        self.muscle_groups.iter().any(|g| groups.contains(g))
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

/// A static meal definition
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogMeal {
    pub id: String,
    pub name: String,
    pub meal_type: MealType,
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The complete catalog of exercises and meals, in stable insertion order
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub exercises: Vec<CatalogExercise>,
    #[serde(default)]
    pub meals: Vec<CatalogMeal>,
}

// ============================================================================
// Fasting Plan
// ============================================================================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// The closed set of supported fasting ratios
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FastingProtocol {
    #[serde(rename = "12:12")]
    TwelveTwelve,
    #[serde(rename = "14:10")]
    FourteenTen,
    #[serde(rename = "16:8")]
    SixteenEight,
    #[serde(rename = "18:6")]
    EighteenSix,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EatingWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl std::fmt::Display for EatingWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PersonalizedFastingPlan {
    pub protocol: FastingProtocol,
    pub fasting_hours: u8,
    pub eating_hours: u8,
    pub eating_window: EatingWindow,
    /// Meals the protocol intends; the meal engine still allocates two slots
    pub meal_count_intent: u8,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub reasoning: String,
}

// ============================================================================
// Exercise Plan
// ============================================================================

/// Fixed weekly rotation of training emphasis
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayFocus {
    Push,
    Pull,
    Legs,
    CoreCardio,
    Upper,
    LowerCore,
    FullBody,
}

/// A catalog exercise with week-progressed volume
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlannedExercise {
    pub exercise_id: String,
    pub name: String,
    pub muscle_groups: Vec<MuscleGroup>,
    pub modality: Modality,
    pub sets: u32,
    pub reps: Option<u32>,
    pub duration_seconds: Option<u32>,
    pub rest_seconds: u32,
    pub calories: u32,
}

impl PlannedExercise {
    /// Reps or seconds for one set
    pub fn work_amount(&self) -> u32 {
        self.reps.or(self.duration_seconds).unwrap_or(0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PersonalizedExercisePlan {
    pub day_number: u32,
    pub week_number: u32,
    pub focus: Option<DayFocus>,
    pub focus_muscles: Vec<MuscleGroup>,
    pub difficulty: DifficultyTier,
    pub exercises: Vec<PlannedExercise>,
    pub total_sets: u32,
    pub total_volume: u32,
    pub estimated_minutes: u32,
    pub estimated_calories: u32,
    pub reasoning: String,
}

impl PersonalizedExercisePlan {
    /// Zeroed plan used for rest days
    pub fn rest(day_number: u32, week_number: u32, difficulty: DifficultyTier) -> Self {
        Self {
            day_number,
            week_number,
            focus: None,
            focus_muscles: Vec::new(),
            difficulty,
            exercises: Vec::new(),
            total_sets: 0,
            total_volume: 0,
            estimated_minutes: 0,
            estimated_calories: 0,
            reasoning: "Rest day: recovery, light walking and mobility only.".to_string(),
        }
    }
}

// ============================================================================
// Nutrition
// ============================================================================

/// Energy and protein targets derived from the profile
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NutritionTargets {
    pub age_years: u32,
    pub bmr: f64,
    pub tdee: f64,
    pub daily_calories: u32,
    pub daily_protein_g: u32,
}

/// Which of the two daily slots a meal fills
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealRole {
    Light,
    Main,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlannedMeal {
    pub role: MealRole,
    pub meal_id: String,
    pub name: String,
    pub meal_type: MealType,
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub target_calories: u32,
    pub target_protein_g: u32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NutritionTotals {
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PersonalizedMealPlan {
    pub day_number: u32,
    pub daily_calorie_target: u32,
    pub daily_protein_target: u32,
    pub meals: Vec<PlannedMeal>,
    pub totals: NutritionTotals,
    pub eating_window: EatingWindow,
    /// Copied from the fasting plan; may disagree with `meals.len()`
    pub meal_count_intent: u8,
    pub reasoning: String,
}

// ============================================================================
// Composed Schedules
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DailySchedule {
    pub day_number: u32,
    pub week_number: u32,
    /// 1..=7 position inside the weekly rotation
    pub week_day: u32,
    pub is_rest_day: bool,
    /// Valid day that the catalog could not fully populate
    pub under_populated: bool,
    pub exercise_plan: PersonalizedExercisePlan,
    pub meal_plan: PersonalizedMealPlan,
    pub fasting_plan: PersonalizedFastingPlan,
    pub reasoning: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct WeekSummary {
    pub training_days: u32,
    pub rest_days: u32,
    pub under_populated_days: u32,
    pub total_exercise_minutes: u32,
    pub total_calories_burned: u32,
    pub average_daily_intake: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklySchedule {
    pub week_number: u32,
    pub start_day: u32,
    pub days: Vec<DailySchedule>,
    pub summary: WeekSummary,
}
