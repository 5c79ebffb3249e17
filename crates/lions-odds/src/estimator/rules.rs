use super::domain::{Category, Dimension, SubmissionProfile};
use super::tables::{
    ModelConfig, EXPERIENCE_BOOST_PER_YEAR, EXPERIENCE_CAP_YEARS, PROBABILITY_CEILING,
    WIN_BOOST_PER_WIN,
};
use super::views::{FactorImpact, ImprovementTip};

const WEAK_MULTIPLIER: f64 = 1.0;
const CONVINCING_MULTIPLIER: f64 = 1.2;
const SEASONED_YEARS: u32 = 3;

/// Multipliers chosen for one profile, resolved against the active model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AppliedFactors {
    pub category: f64,
    pub country: f64,
    pub agency_size: f64,
    pub previous_wins: f64,
    pub years_experience: f64,
    pub budget_level: f64,
    pub brand_prominence: f64,
    pub campaign_results: f64,
    pub creative_approach: f64,
}

pub(crate) fn win_boost(previous_wins: u32) -> f64 {
    1.0 + previous_wins as f64 * WIN_BOOST_PER_WIN
}

/// Experience boost as displayed, before the one-year threshold is considered.
pub(crate) fn experience_boost(years_experience: u32) -> f64 {
    1.0 + years_experience.min(EXPERIENCE_CAP_YEARS) as f64 * EXPERIENCE_BOOST_PER_YEAR
}

pub(crate) fn resolve_factors(profile: &SubmissionProfile, model: &ModelConfig) -> AppliedFactors {
    let tables = model.tables();

    // A single year of submitting earns nothing.
    let years_experience = if profile.years_experience > 1 {
        experience_boost(profile.years_experience)
    } else {
        1.0
    };

    AppliedFactors {
        category: tables.category.multiplier(profile.category),
        country: tables.country.multiplier(profile.country),
        agency_size: tables.agency_size.multiplier(profile.agency_size),
        previous_wins: win_boost(profile.previous_wins),
        years_experience,
        budget_level: tables.budget_level.multiplier(profile.budget_level),
        brand_prominence: tables.brand_prominence.multiplier(profile.brand_prominence),
        campaign_results: tables.campaign_results.multiplier(profile.campaign_results),
        creative_approach: tables.creative_approach.multiplier(profile.creative_approach),
    }
}

pub(crate) fn capped_probability(base_rate: f64, factors: &AppliedFactors) -> f64 {
    let mut probability = base_rate;
    probability *= factors.category;
    probability *= factors.country;
    probability *= factors.agency_size;
    probability *= factors.budget_level;
    probability *= factors.brand_prominence;
    probability *= factors.campaign_results;
    probability *= factors.creative_approach;
    probability *= factors.previous_wins;
    probability *= factors.years_experience;

    probability.min(PROBABILITY_CEILING)
}

pub(crate) fn factor_impacts(
    profile: &SubmissionProfile,
    factors: &AppliedFactors,
) -> Vec<FactorImpact> {
    Dimension::ordered()
        .into_iter()
        .map(|dimension| {
            let (value, multiplier) = match dimension {
                Dimension::Category => (profile.category.to_string(), factors.category),
                Dimension::Country => (profile.country.to_string(), factors.country),
                Dimension::AgencySize => (profile.agency_size.to_string(), factors.agency_size),
                Dimension::PreviousWins => (
                    format!("{} wins", profile.previous_wins),
                    factors.previous_wins,
                ),
                // Reported as earned even below the threshold that applies it.
                Dimension::YearsExperience => (
                    format!("{} years", profile.years_experience),
                    experience_boost(profile.years_experience),
                ),
                Dimension::BudgetLevel => (profile.budget_level.to_string(), factors.budget_level),
                Dimension::BrandProminence => (
                    profile.brand_prominence.to_string(),
                    factors.brand_prominence,
                ),
                Dimension::CampaignResults => (
                    profile.campaign_results.to_string(),
                    factors.campaign_results,
                ),
                Dimension::CreativeApproach => (
                    profile.creative_approach.to_string(),
                    factors.creative_approach,
                ),
            };

            FactorImpact {
                dimension,
                dimension_label: dimension.label(),
                impact: format!("{value}: {multiplier:.2}x"),
                value,
                multiplier,
            }
        })
        .collect()
}

pub(crate) fn improvement_tips(
    profile: &SubmissionProfile,
    factors: &AppliedFactors,
    model: &ModelConfig,
) -> Vec<ImprovementTip> {
    let mut tips = Vec::new();
    let mut push = |dimension: Dimension, message: String| {
        tips.push(ImprovementTip { dimension, message });
    };

    if factors.category < WEAK_MULTIPLIER {
        let categories = &model.tables().category;
        push(
            Dimension::Category,
            format!(
                "Consider entering more competitive categories like {} ({:.1}x) or {} ({:.1}x) instead of {} ({:.2}x).",
                Category::Digital,
                categories.multiplier(Category::Digital),
                Category::SocialInfluencer,
                categories.multiplier(Category::SocialInfluencer),
                profile.category,
                factors.category
            ),
        );
    }

    if factors.country < WEAK_MULTIPLIER {
        push(
            Dimension::Country,
            format!(
                "Entries from {} have historically performed below average. Consider collaborating with agencies from top-performing countries.",
                profile.country
            ),
        );
    }

    if factors.agency_size < WEAK_MULTIPLIER {
        push(
            Dimension::AgencySize,
            format!(
                "As a {}, consider partnering with larger agencies to increase visibility and resources.",
                profile.agency_size
            ),
        );
    }

    if profile.previous_wins == 0 {
        push(
            Dimension::PreviousWins,
            "Build credibility by winning at regional awards before attempting Cannes Lions."
                .to_string(),
        );
    }

    if profile.years_experience < SEASONED_YEARS {
        push(
            Dimension::YearsExperience,
            "Study past winners in your category to understand what the judges look for."
                .to_string(),
        );
    }

    if factors.budget_level < WEAK_MULTIPLIER {
        push(
            Dimension::BudgetLevel,
            "Focus on innovative ideas that don't require large budgets, particularly in Design or PR categories."
                .to_string(),
        );
    }

    if factors.brand_prominence < WEAK_MULTIPLIER {
        push(
            Dimension::BrandProminence,
            format!(
                "For {} brands, focus on breakthrough creative that generates earned media attention.",
                profile.brand_prominence
            ),
        );
    }

    if factors.campaign_results < CONVINCING_MULTIPLIER {
        push(
            Dimension::CampaignResults,
            "Strengthen your entry with clear, measurable results and business impact."
                .to_string(),
        );
    }

    if factors.creative_approach < CONVINCING_MULTIPLIER {
        push(
            Dimension::CreativeApproach,
            "Cannes rewards innovation and fresh thinking. Push creative boundaries further."
                .to_string(),
        );
    }

    tips
}
