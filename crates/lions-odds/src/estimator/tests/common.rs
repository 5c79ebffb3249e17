use crate::estimator::domain::{
    AgencySize, BrandProminence, BudgetLevel, CampaignResults, Category, Country,
    CreativeApproach, SubmissionProfile,
};
use crate::estimator::tables::{FactorTables, ModelConfig, BASE_RATE};
use crate::estimator::WinProbabilityEstimator;

pub(super) fn estimator() -> WinProbabilityEstimator {
    WinProbabilityEstimator::default()
}

/// Every factor at its largest default multiplier.
pub(super) fn strongest_profile(previous_wins: u32, years_experience: u32) -> SubmissionProfile {
    let tables = FactorTables::default();
    SubmissionProfile {
        category: tables.category.strongest().0,
        country: tables.country.strongest().0,
        agency_size: tables.agency_size.strongest().0,
        previous_wins,
        years_experience,
        budget_level: tables.budget_level.strongest().0,
        brand_prominence: tables.brand_prominence.strongest().0,
        campaign_results: tables.campaign_results.strongest().0,
        creative_approach: tables.creative_approach.strongest().0,
    }
}

/// Every factor at its smallest default multiplier.
pub(super) fn weakest_profile() -> SubmissionProfile {
    SubmissionProfile {
        category: Category::RadioAudio,
        country: Country::Other,
        agency_size: AgencySize::InHouse,
        previous_wins: 0,
        years_experience: 0,
        budget_level: BudgetLevel::Low,
        brand_prominence: BrandProminence::StartupUnknown,
        campaign_results: CampaignResults::BelowAverage,
        creative_approach: CreativeApproach::StandardApproach,
    }
}

/// Options that sit at 1.0 in the default tables, except for creative
/// approach which has no neutral option.
pub(super) fn neutral_profile(years_experience: u32) -> SubmissionProfile {
    SubmissionProfile {
        category: Category::Design,
        country: Country::Canada,
        agency_size: AgencySize::MidSizeIndependent,
        previous_wins: 0,
        years_experience,
        budget_level: BudgetLevel::Average,
        brand_prominence: BrandProminence::NationalPlayer,
        campaign_results: CampaignResults::Good,
        creative_approach: CreativeApproach::SolidExecution,
    }
}

/// Default model with `Solid Execution` moved to 1.0 so a fully neutral
/// profile exists.
pub(super) fn neutral_estimator() -> WinProbabilityEstimator {
    let mut tables = FactorTables::default();
    tables
        .apply_override("creative_approach", "Solid Execution", 1.0)
        .expect("override applies");
    WinProbabilityEstimator::new(ModelConfig::new(BASE_RATE, tables).expect("valid model"))
}

/// A profile that trips no improvement rule.
pub(super) fn polished_profile() -> SubmissionProfile {
    SubmissionProfile {
        category: Category::Digital,
        country: Country::UnitedKingdom,
        agency_size: AgencySize::LargeNetwork,
        previous_wins: 2,
        years_experience: 5,
        budget_level: BudgetLevel::Average,
        brand_prominence: BrandProminence::NationalPlayer,
        campaign_results: CampaignResults::Strong,
        creative_approach: CreativeApproach::FreshPerspective,
    }
}
