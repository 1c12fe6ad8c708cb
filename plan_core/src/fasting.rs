//! Fasting protocol assignment.
//!
//! The protocol depends only on BMI, activity level, metabolic type and
//! goal. It never looks at the day number, so callers may cache one result
//! per profile.

use crate::{
    ActivityLevel, BmiCategory, EatingWindow, FastingProtocol, Goal, MetabolicType,
    PersonalizedFastingPlan, UserProfile,
};
use chrono::NaiveTime;

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl FastingProtocol {
    pub fn label(self) -> &'static str {
        match self {
            FastingProtocol::TwelveTwelve => "12:12",
            FastingProtocol::FourteenTen => "14:10",
            FastingProtocol::SixteenEight => "16:8",
            FastingProtocol::EighteenSix => "18:6",
        }
    }

    /// (fasting hours, eating hours)
    pub fn hours(self) -> (u8, u8) {
        match self {
            FastingProtocol::TwelveTwelve => (12, 12),
            FastingProtocol::FourteenTen => (14, 10),
            FastingProtocol::SixteenEight => (16, 8),
            FastingProtocol::EighteenSix => (18, 6),
        }
    }

    /// Fixed clock window for the protocol
    pub fn eating_window(self) -> EatingWindow {
        let (start, end) = match self {
            FastingProtocol::TwelveTwelve => (8, 20),
            FastingProtocol::FourteenTen => (9, 19),
            FastingProtocol::SixteenEight => (12, 20),
            FastingProtocol::EighteenSix => (12, 18),
        };
        EatingWindow {
            start: NaiveTime::from_hms_opt(start, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(end, 0, 0).unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for FastingProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Assign a fasting protocol to the profile
pub fn generate_fasting_plan(profile: &UserProfile) -> PersonalizedFastingPlan {
    assign_protocol(
        profile.bmi(),
        profile.activity(),
        profile.metabolism(),
        profile.goal(),
    )
}

/// Pure assignment from the four inputs
pub fn assign_protocol(
    bmi: f64,
    activity: ActivityLevel,
    metabolism: MetabolicType,
    goal: Goal,
) -> PersonalizedFastingPlan {
    let category = BmiCategory::classify(bmi);

    let (mut protocol, meal_count_intent, mut reasoning) = match category {
        BmiCategory::Obese => (
            FastingProtocol::EighteenSix,
            1,
            format!(
                "Aggressive 18:6 protocol with one main meal: BMI {:.1} is in the obese range, \
                 so a longer daily fast supports steady fat loss.",
                bmi
            ),
        ),
        BmiCategory::Overweight if goal.is_weight_loss() => (
            FastingProtocol::EighteenSix,
            2,
            format!(
                "18:6 protocol: BMI {:.1} is above the healthy range and your goal is to {}.",
                bmi,
                goal.label()
            ),
        ),
        BmiCategory::Overweight => (
            FastingProtocol::SixteenEight,
            2,
            format!(
                "16:8 protocol: BMI {:.1} is slightly above the healthy range; a moderate fast \
                 supports your goal to {}.",
                bmi,
                goal.label()
            ),
        ),
        BmiCategory::Normal if goal.is_muscle_building() => (
            FastingProtocol::FourteenTen,
            2,
            format!(
                "14:10 protocol: BMI {:.1} is healthy and a wider eating window leaves room to \
                 fuel muscle growth.",
                bmi
            ),
        ),
        BmiCategory::Normal => (
            FastingProtocol::SixteenEight,
            2,
            format!(
                "16:8 protocol: BMI {:.1} is healthy; the classic 16:8 split helps you {}.",
                bmi,
                goal.label()
            ),
        ),
        BmiCategory::Underweight => (
            FastingProtocol::TwelveTwelve,
            2,
            format!(
                "Gentle 12:12 protocol: BMI {:.1} is below the healthy range, so the fast is \
                 kept short to protect energy intake.",
                bmi
            ),
        ),
    };

    if activity == ActivityLevel::VeryActive && protocol == FastingProtocol::EighteenSix {
        protocol = FastingProtocol::SixteenEight;
        reasoning.push_str(
            " Adjusted to 16:8 because a very active lifestyle needs a longer eating window \
             for recovery.",
        );
        tracing::debug!("Fasting protocol downgraded to 16:8 for very active user");
    }

    if metabolism == MetabolicType::Slow && protocol == FastingProtocol::TwelveTwelve {
        protocol = FastingProtocol::FourteenTen;
        reasoning.push_str(" Extended to 14:10 to account for a slower metabolism.");
        tracing::debug!("Fasting protocol upgraded to 14:10 for slow metabolism");
    }

    let (fasting_hours, eating_hours) = protocol.hours();

    tracing::debug!(
        "Assigned fasting protocol {} (BMI {:.1}, {:?})",
        protocol,
        bmi,
        category
    );

    PersonalizedFastingPlan {
        protocol,
        fasting_hours,
        eating_hours,
        eating_window: protocol.eating_window(),
        meal_count_intent,
        bmi,
        bmi_category: category,
        reasoning,
    }
}
