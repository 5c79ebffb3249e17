use super::domain::{
    parse_option, AgencySize, BrandProminence, BudgetLevel, CampaignResults, Category, Country,
    CreativeApproach, Dimension, FactorOption,
};
use serde::Serialize;
use std::marker::PhantomData;

/// Festival-wide win rate before any factor is applied.
pub const BASE_RATE: f64 = 0.03;
/// No combination of inputs may imply a higher chance than this.
pub const PROBABILITY_CEILING: f64 = 0.75;
pub const WIN_BOOST_PER_WIN: f64 = 0.05;
pub const EXPERIENCE_BOOST_PER_YEAR: f64 = 0.02;
pub const EXPERIENCE_CAP_YEARS: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum FactorTableError {
    #[error("failed to read factor table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid factor table CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown factor dimension '{0}'")]
    UnknownDimension(String),
    #[error("'{dimension}' has no multiplier table")]
    NotTableDriven { dimension: &'static str },
    #[error("unknown option '{option}' for {dimension}")]
    UnknownOption {
        dimension: &'static str,
        option: String,
    },
    #[error("multiplier for {dimension} '{option}' must be a positive finite number, found {multiplier}")]
    InvalidMultiplier {
        dimension: &'static str,
        option: String,
        multiplier: f64,
    },
    #[error("base rate must lie in (0, 1], found {0}")]
    InvalidBaseRate(f64),
}

/// Multiplier per option of one dimension. Every option always has an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorTable<K> {
    multipliers: Vec<f64>,
    _options: PhantomData<K>,
}

impl<K: FactorOption> Default for FactorTable<K> {
    fn default() -> Self {
        Self {
            multipliers: K::ALL
                .iter()
                .map(|option| option.default_multiplier())
                .collect(),
            _options: PhantomData,
        }
    }
}

impl<K: FactorOption> FactorTable<K> {
    pub fn multiplier(&self, option: K) -> f64 {
        self.multipliers[option.index()]
    }

    pub fn set(&mut self, option: K, multiplier: f64) -> Result<(), FactorTableError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(FactorTableError::InvalidMultiplier {
                dimension: K::DIMENSION.key(),
                option: option.label().to_string(),
                multiplier,
            });
        }
        self.multipliers[option.index()] = multiplier;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        K::ALL
            .iter()
            .copied()
            .map(move |option| (option, self.multiplier(option)))
    }

    /// Highest-multiplier option; ties go to the option listed first.
    pub fn strongest(&self) -> (K, f64) {
        self.iter()
            .fold((K::ALL[0], f64::MIN), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            })
    }

    fn set_by_label(&mut self, option: &str, multiplier: f64) -> Result<(), FactorTableError> {
        let parsed: K = parse_option(option).map_err(|_| FactorTableError::UnknownOption {
            dimension: K::DIMENSION.key(),
            option: option.to_string(),
        })?;
        self.set(parsed, multiplier)
    }

    fn entries(&self) -> impl Iterator<Item = FactorEntry> + '_ {
        self.iter().map(|(option, multiplier)| FactorEntry {
            dimension: K::DIMENSION,
            dimension_label: K::DIMENSION.label(),
            option: option.label(),
            multiplier,
        })
    }
}

/// One row of the active model, as listed by `FactorTables::entries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorEntry {
    pub dimension: Dimension,
    pub dimension_label: &'static str,
    pub option: &'static str,
    pub multiplier: f64,
}

/// The seven multiplier tables that make up the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorTables {
    pub category: FactorTable<Category>,
    pub country: FactorTable<Country>,
    pub agency_size: FactorTable<AgencySize>,
    pub budget_level: FactorTable<BudgetLevel>,
    pub brand_prominence: FactorTable<BrandProminence>,
    pub campaign_results: FactorTable<CampaignResults>,
    pub creative_approach: FactorTable<CreativeApproach>,
}

impl FactorTables {
    /// Overrides one multiplier, addressing it by dimension key and option label.
    pub fn apply_override(
        &mut self,
        dimension: &str,
        option: &str,
        multiplier: f64,
    ) -> Result<(), FactorTableError> {
        let dimension = Dimension::from_key(dimension)
            .ok_or_else(|| FactorTableError::UnknownDimension(dimension.to_string()))?;

        match dimension {
            Dimension::Category => self.category.set_by_label(option, multiplier),
            Dimension::Country => self.country.set_by_label(option, multiplier),
            Dimension::AgencySize => self.agency_size.set_by_label(option, multiplier),
            Dimension::BudgetLevel => self.budget_level.set_by_label(option, multiplier),
            Dimension::BrandProminence => self.brand_prominence.set_by_label(option, multiplier),
            Dimension::CampaignResults => self.campaign_results.set_by_label(option, multiplier),
            Dimension::CreativeApproach => {
                self.creative_approach.set_by_label(option, multiplier)
            }
            Dimension::PreviousWins | Dimension::YearsExperience => {
                Err(FactorTableError::NotTableDriven {
                    dimension: dimension.key(),
                })
            }
        }
    }

    pub fn entries(&self) -> Vec<FactorEntry> {
        self.category
            .entries()
            .chain(self.country.entries())
            .chain(self.agency_size.entries())
            .chain(self.budget_level.entries())
            .chain(self.brand_prominence.entries())
            .chain(self.campaign_results.entries())
            .chain(self.creative_approach.entries())
            .collect()
    }
}

/// Base rate plus tables; everything the estimator reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    base_rate: f64,
    tables: FactorTables,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_rate: BASE_RATE,
            tables: FactorTables::default(),
        }
    }
}

impl ModelConfig {
    pub fn new(base_rate: f64, tables: FactorTables) -> Result<Self, FactorTableError> {
        if !base_rate.is_finite() || base_rate <= 0.0 || base_rate > 1.0 {
            return Err(FactorTableError::InvalidBaseRate(base_rate));
        }
        Ok(Self { base_rate, tables })
    }

    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    pub fn tables(&self) -> &FactorTables {
        &self.tables
    }
}
