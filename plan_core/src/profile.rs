//! Onboarding profile loading and defaulted accessors.
//!
//! Profiles arrive already validated by onboarding. Every accessor here
//! substitutes the documented default for a missing answer instead of
//! failing, so the engines can stay total.

use crate::{
    ActivityLevel, AgeCategory, BmiCategory, DifficultyTier, ExperienceLevel, Gender, Goal,
    MetabolicType, Result, TrainingFrequency, UserProfile, WorkoutDuration,
};
use chrono::{Datelike, NaiveDate};
use std::path::Path;

pub const DEFAULT_BMI: f64 = 25.0;
pub const DEFAULT_AGE: u32 = 30;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

impl UserProfile {
    /// Load an onboarding profile from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let profile: UserProfile = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded profile from {:?}", path);
        Ok(profile)
    }

    pub fn gender(&self) -> Gender {
        self.gender.unwrap_or_default()
    }

    pub fn goal(&self) -> Goal {
        self.primary_goal.unwrap_or_default()
    }

    pub fn activity(&self) -> ActivityLevel {
        self.activity_level.unwrap_or_default()
    }

    pub fn metabolism(&self) -> MetabolicType {
        self.metabolic_type.unwrap_or_default()
    }

    pub fn frequency(&self) -> TrainingFrequency {
        self.training_frequency.unwrap_or_default()
    }

    pub fn duration(&self) -> WorkoutDuration {
        self.workout_duration.unwrap_or_default()
    }

    pub fn height(&self) -> f64 {
        self.height_cm.unwrap_or(DEFAULT_HEIGHT_CM)
    }

    pub fn weight(&self) -> f64 {
        self.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG)
    }

    /// Provided BMI, else derived from height and weight, else 25
    pub fn bmi(&self) -> f64 {
        if let Some(bmi) = self.bmi {
            return bmi;
        }
        match (self.height_cm, self.weight_kg) {
            (Some(height), Some(weight)) if height > 0.0 => {
                let meters = height / 100.0;
                weight / (meters * meters)
            }
            _ => DEFAULT_BMI,
        }
    }

    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::classify(self.bmi())
    }

    /// Whole years as of `today`, falling back to the age category midpoint
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        if let Some(dob) = self.date_of_birth {
            let mut years = today.year() - dob.year();
            if (today.month(), today.day()) < (dob.month(), dob.day()) {
                years -= 1;
            }
            return years.max(0) as u32;
        }

        match self.age_category {
            Some(AgeCategory::From18To29) => 24,
            Some(AgeCategory::From30To39) => 35,
            Some(AgeCategory::From40To49) => 45,
            Some(AgeCategory::FiftyPlus) => 55,
            None => DEFAULT_AGE,
        }
    }

    /// Difficulty tier for the whole plan
    ///
    /// Mean of the assessment scores when any are present, otherwise the
    /// stated experience level, otherwise beginner.
    pub fn difficulty_tier(&self) -> DifficultyTier {
        let scores: Vec<f64> = [
            self.fitness_assessment.strength,
            self.fitness_assessment.endurance,
        ]
        .iter()
        .flatten()
        .map(|s| f64::from(*s))
        .collect();

        if !scores.is_empty() {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            return if mean < 2.5 {
                DifficultyTier::Beginner
            } else if mean < 4.0 {
                DifficultyTier::Intermediate
            } else {
                DifficultyTier::Advanced
            };
        }

        match self.experience_level {
            Some(ExperienceLevel::Intermediate) => DifficultyTier::Intermediate,
            Some(ExperienceLevel::Advanced) => DifficultyTier::Advanced,
            Some(ExperienceLevel::Beginner) | None => DifficultyTier::Beginner,
        }
    }
}
