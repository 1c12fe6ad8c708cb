use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use plan_core::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(about = "Personalized fasting, training and meal plans", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Onboarding profile (JSON); defaults to the configured profile path
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Catalog file (JSON) replacing the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Date used for age calculation (YYYY-MM-DD), defaults to today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the schedule for one day (default)
    Day {
        /// Day number, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        day: u32,
    },

    /// Show seven days starting at a plan week
    Week {
        /// Week number, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        week: u32,
    },

    /// Show the fasting protocol
    Fasting,

    /// Show calorie and protein targets
    Targets,

    /// Export consecutive weeks to a file
    Export {
        /// Number of weeks from week 1
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
        weeks: u32,

        /// Destination file
        #[arg(long)]
        out: PathBuf,

        /// csv or json
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
    },

    /// Validate and summarize the active catalog
    Catalog,
}

/// Everything a command needs, resolved from flags and config
struct Context {
    profile: UserProfile,
    catalog: Option<Catalog>,
    today: NaiveDate,
    json: bool,
}

impl Context {
    fn catalog(&self) -> &Catalog {
        match &self.catalog {
            Some(catalog) => catalog,
            None => get_default_catalog(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        plan_core::logging::init_with_level("debug");
    } else {
        plan_core::logging::init();
    }

    let config = Config::load()?;
    let ctx = build_context(&cli, &config)?;

    match cli.command {
        Some(Commands::Day { day }) => cmd_day(&ctx, day),
        Some(Commands::Week { week }) => cmd_week(&ctx, week),
        Some(Commands::Fasting) => cmd_fasting(&ctx),
        Some(Commands::Targets) => cmd_targets(&ctx),
        Some(Commands::Export { weeks, out, format }) => cmd_export(&ctx, weeks, &out, format),
        Some(Commands::Catalog) => cmd_catalog(&ctx),
        None => {
            // Default to "day" command
            cmd_day(&ctx, 1)
        }
    }
}

fn build_context(cli: &Cli, config: &Config) -> Result<Context> {
    // An explicit --profile must exist; the configured default may not yet
    let profile = match &cli.profile {
        Some(path) => UserProfile::load(path)?,
        None if config.profile.path.exists() => UserProfile::load(&config.profile.path)?,
        None => {
            tracing::warn!(
                "No profile at {:?}, planning with default answers",
                config.profile.path
            );
            UserProfile::default()
        }
    };

    let catalog = match cli.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => Some(Catalog::load_from(path)?),
        None => None,
    };

    let json = cli.json || config.output.format == OutputFormat::Json;
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    Ok(Context {
        profile,
        catalog,
        today,
        json,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_day(ctx: &Context, day: u32) -> Result<()> {
    let schedule = generate_daily_schedule(ctx.catalog(), &ctx.profile, day, ctx.today);
    if ctx.json {
        return print_json(&schedule);
    }
    display_day(&schedule);
    Ok(())
}

fn cmd_week(ctx: &Context, week: u32) -> Result<()> {
    let schedule = generate_week(ctx.catalog(), &ctx.profile, week_start_day(week), ctx.today);
    if ctx.json {
        return print_json(&schedule);
    }

    println!("\n╭─────────────────────────────────────────╮");
    let last_day = schedule.days.last().map_or(schedule.start_day, |d| d.day_number);
    println!("│  WEEK {} (days {}-{})", week, schedule.start_day, last_day);
    println!("╰─────────────────────────────────────────╯");
    for day in &schedule.days {
        display_day(day);
    }

    let summary = &schedule.summary;
    println!("─────────────────────────────────────────");
    println!(
        "  {} training / {} rest days",
        summary.training_days, summary.rest_days
    );
    println!(
        "  {} min training, ~{} kcal burned",
        summary.total_exercise_minutes, summary.total_calories_burned
    );
    println!("  Average intake: {} kcal/day", summary.average_daily_intake);
    if summary.under_populated_days > 0 {
        println!(
            "  ⚠ {} day(s) could not be fully populated from the catalog",
            summary.under_populated_days
        );
    }
    println!();
    Ok(())
}

fn cmd_fasting(ctx: &Context) -> Result<()> {
    let plan = generate_fasting_plan(&ctx.profile);
    if ctx.json {
        return print_json(&plan);
    }

    println!(
        "  Protocol: {} ({} h fast / {} h eating)",
        plan.protocol, plan.fasting_hours, plan.eating_hours
    );
    println!("  Eating window: {}", plan.eating_window);
    println!("  Meals: {}", plan.meal_count_intent);
    println!("  BMI: {:.1} ({:?})", plan.bmi, plan.bmi_category);
    println!();
    println!("  {}", plan.reasoning);
    Ok(())
}

fn cmd_targets(ctx: &Context) -> Result<()> {
    let targets = compute_targets(&ctx.profile, ctx.today);
    if ctx.json {
        return print_json(&targets);
    }

    println!("  Age: {}", targets.age_years);
    println!("  BMR: {:.0} kcal", targets.bmr);
    println!("  TDEE: {:.0} kcal", targets.tdee);
    println!("  Daily calories: {} kcal", targets.daily_calories);
    println!("  Daily protein: {} g", targets.daily_protein_g);
    Ok(())
}

fn cmd_export(ctx: &Context, weeks: u32, out: &Path, format: ExportFormat) -> Result<()> {
    let plan = generate_plan(ctx.catalog(), &ctx.profile, weeks, ctx.today);
    let days = export_weeks(&plan, out, format)?;

    println!("✓ Exported {} days to {}", days, out.display());
    Ok(())
}

fn cmd_catalog(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let errors = catalog.validate();

    println!(
        "Catalog: {} exercises, {} meals",
        catalog.exercises().len(),
        catalog.meals().len()
    );
    for tier in [
        DifficultyTier::Beginner,
        DifficultyTier::Intermediate,
        DifficultyTier::Advanced,
    ] {
        println!(
            "  {:?}: {} exercises",
            tier,
            catalog.exercises_by_difficulty(tier).len()
        );
    }
    for meal_type in [MealType::Breakfast, MealType::Lunch, MealType::Dinner] {
        println!(
            "  {:?}: {} meals",
            meal_type,
            catalog.meals_by_type(meal_type).len()
        );
    }

    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation(format!("{} problem(s)", errors.len())));
    }

    println!("✓ Catalog is valid");
    Ok(())
}

fn display_day(day: &DailySchedule) {
    let exercise = &day.exercise_plan;

    println!();
    match exercise.focus {
        Some(focus) if !day.is_rest_day => {
            println!("Day {} (week {}) · {}", day.day_number, day.week_number, focus.label())
        }
        _ => println!("Day {} (week {}) · Rest", day.day_number, day.week_number),
    }

    println!(
        "  Fasting: {} · eat {}",
        day.fasting_plan.protocol, day.fasting_plan.eating_window
    );

    if !day.is_rest_day {
        println!(
            "  Workout: {:?}, ~{} min, ~{} kcal",
            exercise.difficulty, exercise.estimated_minutes, exercise.estimated_calories
        );
        for planned in &exercise.exercises {
            match (planned.reps, planned.duration_seconds) {
                (Some(reps), _) => {
                    println!("    → {} · {} x {} reps", planned.name, planned.sets, reps)
                }
                (None, Some(seconds)) => {
                    println!("    → {} · {} x {}s", planned.name, planned.sets, seconds)
                }
                (None, None) => println!("    → {} · {} sets", planned.name, planned.sets),
            }
        }
    }

    for meal in &day.meal_plan.meals {
        println!(
            "  {:?}: {} ({} kcal, {:.0} g protein)",
            meal.role, meal.name, meal.calories, meal.protein_g
        );
    }
    println!(
        "  Intake: {} / {} kcal",
        day.meal_plan.totals.calories, day.meal_plan.daily_calorie_target
    );

    if day.under_populated {
        println!("  ⚠ Not enough catalog content to fill this day");
    }
}
