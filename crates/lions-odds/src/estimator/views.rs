use super::domain::Dimension;
use serde::Serialize;

/// Contribution of one input to the estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorImpact {
    pub dimension: Dimension,
    pub dimension_label: &'static str,
    pub value: String,
    pub multiplier: f64,
    pub impact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Likelihood {
    MoreLikely,
    LessLikely,
}

impl Likelihood {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MoreLikely => "more likely",
            Self::LessLikely => "less likely",
        }
    }
}

/// Estimate measured against the category-only baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparativeStanding {
    pub category_average: f64,
    /// `probability / category_average`, unflipped.
    pub ratio: f64,
    pub direction: Likelihood,
    /// Ratio in the reported direction, always >= 1.
    pub reported_ratio: f64,
}

impl ComparativeStanding {
    pub fn summary(&self) -> String {
        format!(
            "Your entry is {:.1}x {} to win than average.",
            self.reported_ratio,
            self.direction.label()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthScore {
    pub dimension: Dimension,
    pub axis_label: &'static str,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovementTip {
    pub dimension: Dimension,
    pub message: String,
}

/// Everything derived from one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    pub probability: f64,
    pub factors: Vec<FactorImpact>,
    pub comparative: ComparativeStanding,
    pub strength_profile: Vec<StrengthScore>,
    pub tips: Vec<ImprovementTip>,
    pub category_entries: u32,
    pub country_insight: &'static str,
}

impl EstimationResult {
    pub fn probability_percent(&self) -> String {
        format!("{:.1}%", self.probability * 100.0)
    }
}
