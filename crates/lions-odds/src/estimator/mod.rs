//! Win-probability estimation for festival award entries.
//!
//! The model is a base rate scaled by one multiplier per categorical input,
//! boosted by track record and experience, then capped. Everything else in
//! the result is derived from the same resolved multipliers.

pub mod domain;
mod insights;
mod loader;
mod rules;
pub mod tables;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    AgencySize, BrandProminence, BudgetLevel, CampaignResults, Category, Country,
    CreativeApproach, Dimension, EstimateError, FactorOption, SubmissionProfile,
    MAX_PREVIOUS_WINS, MAX_YEARS_EXPERIENCE,
};
pub use insights::{category_entries, country_insight};
pub use tables::{
    FactorEntry, FactorTable, FactorTableError, FactorTables, ModelConfig, BASE_RATE,
    PROBABILITY_CEILING,
};
pub use views::{
    ComparativeStanding, EstimationResult, FactorImpact, ImprovementTip, Likelihood,
    StrengthScore,
};

/// Stateless estimator that applies the model configuration to a profile.
#[derive(Debug, Clone, Default)]
pub struct WinProbabilityEstimator {
    model: ModelConfig,
}

impl WinProbabilityEstimator {
    pub fn new(model: ModelConfig) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    pub fn estimate(&self, profile: &SubmissionProfile) -> Result<EstimationResult, EstimateError> {
        profile.validate()?;

        let factors = rules::resolve_factors(profile, &self.model);
        let probability = rules::capped_probability(self.model.base_rate(), &factors);

        Ok(EstimationResult {
            probability,
            factors: rules::factor_impacts(profile, &factors),
            comparative: insights::comparative_standing(
                probability,
                self.model.base_rate(),
                factors.category,
            ),
            strength_profile: insights::strength_profile(profile, &factors),
            tips: rules::improvement_tips(profile, &factors, &self.model),
            category_entries: category_entries(profile.category),
            country_insight: country_insight(profile.country),
        })
    }
}
