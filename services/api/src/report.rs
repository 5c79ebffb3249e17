use crate::infra::build_estimator;
use crate::routes::{estimate_profile, factors_view, EstimateResponse, FactorsResponse};
use clap::{Args, ValueEnum};
use lions_odds::config::AppConfig;
use lions_odds::error::AppError;
use lions_odds::estimator::{
    AgencySize, BrandProminence, BudgetLevel, CampaignResults, Category, Country,
    CreativeApproach, SubmissionProfile,
};
use lions_odds::telemetry;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Award category, e.g. "Social & Influencer" or social-influencer
    #[arg(long)]
    pub(crate) category: Category,
    /// Country of submission
    #[arg(long)]
    pub(crate) country: Country,
    /// Agency size
    #[arg(long)]
    pub(crate) agency_size: AgencySize,
    /// Wins in the last three years (0-50)
    #[arg(long)]
    pub(crate) previous_wins: u32,
    /// Years submitting to the festival (0-30)
    #[arg(long)]
    pub(crate) years_experience: u32,
    /// Production budget level
    #[arg(long)]
    pub(crate) budget_level: BudgetLevel,
    /// Client brand prominence
    #[arg(long)]
    pub(crate) brand_prominence: BrandProminence,
    /// Campaign results
    #[arg(long)]
    pub(crate) campaign_results: CampaignResults,
    /// Creative approach
    #[arg(long)]
    pub(crate) creative_approach: CreativeApproach,
    /// CSV of multiplier overrides (Dimension,Option,Multiplier)
    #[arg(long)]
    pub(crate) factor_tables: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: OutputFormat,
}

impl EstimateArgs {
    pub(crate) fn profile(&self) -> SubmissionProfile {
        SubmissionProfile {
            category: self.category,
            country: self.country,
            agency_size: self.agency_size,
            previous_wins: self.previous_wins,
            years_experience: self.years_experience,
            budget_level: self.budget_level,
            brand_prominence: self.brand_prominence,
            campaign_results: self.campaign_results,
            creative_approach: self.creative_approach,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct TablesArgs {
    /// CSV of multiplier overrides (Dimension,Option,Multiplier)
    #[arg(long)]
    pub(crate) factor_tables: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let profile = args.profile();
    let estimator = build_estimator(&config.model, args.factor_tables)?;
    let response = estimate_profile(&estimator, profile)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => print!("{}", render_estimate(&response)),
    }

    Ok(())
}

pub(crate) fn run_tables(args: TablesArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let estimator = build_estimator(&config.model, args.factor_tables)?;
    let view = factors_view(&estimator);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Text => print!("{}", render_tables(&view)),
    }

    Ok(())
}

pub(crate) fn render_estimate(response: &EstimateResponse) -> String {
    let estimate = &response.estimate;
    let profile = &response.profile;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Your estimated probability of winning: {}",
        response.probability_percent
    );

    let _ = writeln!(out, "\nCategory competitiveness");
    let _ = writeln!(
        out,
        "- The {} category received approximately {} entries in 2024.",
        profile.category, estimate.category_entries
    );
    let _ = writeln!(
        out,
        "- Average win rate in this category: {:.1}%",
        estimate.comparative.category_average * 100.0
    );
    let _ = writeln!(out, "- {}", response.comparative_summary);

    let _ = writeln!(out, "\nCountry insight");
    let _ = writeln!(out, "- {}", estimate.country_insight);

    let _ = writeln!(out, "\nFactor breakdown");
    for factor in &estimate.factors {
        let _ = writeln!(out, "- {}: {}", factor.dimension_label, factor.impact);
    }

    let _ = writeln!(out, "\nStrength profile");
    for strength in &estimate.strength_profile {
        let _ = writeln!(out, "- {}: {:.2}", strength.axis_label, strength.score);
    }

    if estimate.tips.is_empty() {
        let _ = writeln!(out, "\nTips: none");
    } else {
        let _ = writeln!(out, "\nTips to improve your chances");
        for tip in &estimate.tips {
            let _ = writeln!(out, "- {}", tip.message);
        }
    }

    out
}

pub(crate) fn render_tables(view: &FactorsResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Base rate: {:.1}%", view.base_rate * 100.0);
    let _ = writeln!(
        out,
        "Probability ceiling: {:.0}%",
        view.probability_ceiling * 100.0
    );

    let mut current = None;
    for entry in &view.factors {
        if current != Some(entry.dimension) {
            let _ = writeln!(out, "\n{}", entry.dimension_label);
            current = Some(entry.dimension);
        }
        let _ = writeln!(out, "- {}: {:.2}x", entry.option, entry.multiplier);
    }

    out
}
