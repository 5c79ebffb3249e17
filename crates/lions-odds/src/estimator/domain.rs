use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MAX_PREVIOUS_WINS: u32 = 50;
pub const MAX_YEARS_EXPERIENCE: u32 = 30;

/// The nine inputs that shape an estimate, in strength-profile order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Category,
    Country,
    AgencySize,
    PreviousWins,
    YearsExperience,
    BudgetLevel,
    BrandProminence,
    CampaignResults,
    CreativeApproach,
}

impl Dimension {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Category,
            Self::Country,
            Self::AgencySize,
            Self::PreviousWins,
            Self::YearsExperience,
            Self::BudgetLevel,
            Self::BrandProminence,
            Self::CampaignResults,
            Self::CreativeApproach,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Country => "country",
            Self::AgencySize => "agency_size",
            Self::PreviousWins => "previous_wins",
            Self::YearsExperience => "years_experience",
            Self::BudgetLevel => "budget_level",
            Self::BrandProminence => "brand_prominence",
            Self::CampaignResults => "campaign_results",
            Self::CreativeApproach => "creative_approach",
        }
    }

    /// Row heading used in the factor breakdown.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category => "Category Type",
            Self::Country => "Country",
            Self::AgencySize => "Agency Size",
            Self::PreviousWins => "Previous Wins",
            Self::YearsExperience => "Years Experience",
            Self::BudgetLevel => "Production Budget",
            Self::BrandProminence => "Brand Prominence",
            Self::CampaignResults => "Campaign Results",
            Self::CreativeApproach => "Creative Approach",
        }
    }

    /// Short axis name for radar-style charts.
    pub const fn axis_label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Country => "Country",
            Self::AgencySize => "Agency Size",
            Self::PreviousWins => "Previous Wins",
            Self::YearsExperience => "Experience",
            Self::BudgetLevel => "Budget",
            Self::BrandProminence => "Brand",
            Self::CampaignResults => "Results",
            Self::CreativeApproach => "Creativity",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        let wanted = slugify(raw).replace('-', "_");
        Self::ordered()
            .into_iter()
            .find(|dimension| dimension.key() == wanted)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fixed value domain whose members each carry a default multiplier.
pub trait FactorOption: Copy + Eq + fmt::Debug + 'static {
    const DIMENSION: Dimension;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
    fn index(self) -> usize;
    fn default_multiplier(self) -> f64;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: String,
    },
}

pub fn parse_option<K: FactorOption>(raw: &str) -> Result<K, EstimateError> {
    let wanted = slugify(raw);
    K::ALL
        .iter()
        .copied()
        .find(|option| !wanted.is_empty() && slugify(option.label()) == wanted)
        .ok_or_else(|| {
            let expected: Vec<&str> = K::ALL.iter().map(|option| option.label()).collect();
            EstimateError::InvalidInput {
                field: K::DIMENSION.key(),
                value: raw.to_string(),
                reason: format!("expected one of: {}", expected.join(", ")),
            }
        })
}

/// Lowercases and collapses every run of non-alphanumerics into one dash, so
/// "Social & Influencer" and "social-influencer" compare equal.
pub(crate) fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_dash = false;

    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

macro_rules! factor_options {
    (
        $(#[$meta:meta])*
        $name:ident in $dimension:expr => {
            $($variant:ident => $label:literal @ $multiplier:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl FactorOption for $name {
            const DIMENSION: Dimension = $dimension;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                $name::label(self)
            }

            fn index(self) -> usize {
                self as usize
            }

            fn default_multiplier(self) -> f64 {
                match self {
                    $(Self::$variant => $multiplier),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = EstimateError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                parse_option(raw)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

factor_options!(
    /// Festival award category the work is entered into.
    Category in Dimension::Category => {
        Film => "Film" @ 0.85,
        Digital => "Digital" @ 1.2,
        PrintPublishing => "Print & Publishing" @ 0.7,
        Outdoor => "Outdoor" @ 0.9,
        Design => "Design" @ 1.0,
        RadioAudio => "Radio & Audio" @ 0.65,
        Mobile => "Mobile" @ 1.1,
        SocialInfluencer => "Social & Influencer" @ 1.3,
        Pr => "PR" @ 0.95,
        Direct => "Direct" @ 0.8,
        Media => "Media" @ 0.9,
        CreativeData => "Creative Data" @ 1.15,
        CreativeStrategy => "Creative Strategy" @ 1.05,
        CreativeCommerce => "Creative Commerce" @ 1.1,
        HealthWellness => "Health & Wellness" @ 0.85,
        Innovation => "Innovation" @ 1.25,
    }
);

factor_options!(
    /// Country the entry is submitted from.
    Country in Dimension::Country => {
        UnitedStates => "United States" @ 1.3,
        UnitedKingdom => "United Kingdom" @ 1.3,
        France => "France" @ 1.3,
        Brazil => "Brazil" @ 1.3,
        Germany => "Germany" @ 1.3,
        Japan => "Japan" @ 1.3,
        Australia => "Australia" @ 1.3,
        Canada => "Canada" @ 1.0,
        Spain => "Spain" @ 1.0,
        Italy => "Italy" @ 1.0,
        Sweden => "Sweden" @ 1.0,
        Netherlands => "Netherlands" @ 1.0,
        China => "China" @ 1.0,
        SouthKorea => "South Korea" @ 1.0,
        Argentina => "Argentina" @ 1.0,
        India => "India" @ 0.8,
        Turkey => "Turkey" @ 0.8,
        SouthAfrica => "South Africa" @ 0.8,
        Mexico => "Mexico" @ 0.8,
        Thailand => "Thailand" @ 0.8,
        UnitedArabEmirates => "United Arab Emirates" @ 0.8,
        Other => "Other" @ 0.7,
    }
);

factor_options!(
    AgencySize in Dimension::AgencySize => {
        LargeNetwork => "Large Network Agency" @ 1.2,
        MidSizeIndependent => "Mid-Size Independent" @ 1.0,
        SmallBoutique => "Small Boutique" @ 0.85,
        InHouse => "In-house Team" @ 0.7,
    }
);

factor_options!(
    /// Production budget relative to other entries.
    BudgetLevel in Dimension::BudgetLevel => {
        High => "High (Top 10%)" @ 1.3,
        AboveAverage => "Above Average" @ 1.15,
        Average => "Average" @ 1.0,
        BelowAverage => "Below Average" @ 0.85,
        Low => "Low (Bottom 10%)" @ 0.7,
    }
);

factor_options!(
    BrandProminence in Dimension::BrandProminence => {
        GlobalLeader => "Global Leader" @ 1.25,
        RegionalLeader => "Regional Leader" @ 1.1,
        NationalPlayer => "National Player" @ 1.0,
        LocalBusiness => "Local Business" @ 0.85,
        StartupUnknown => "Startup/Unknown" @ 0.7,
    }
);

factor_options!(
    CampaignResults in Dimension::CampaignResults => {
        Exceptional => "Exceptional (Measurable Impact)" @ 1.4,
        Strong => "Strong" @ 1.2,
        Good => "Good" @ 1.0,
        Average => "Average" @ 0.8,
        BelowAverage => "Below Average" @ 0.6,
    }
);

factor_options!(
    CreativeApproach in Dimension::CreativeApproach => {
        GroundbreakingInnovation => "Groundbreaking Innovation" @ 1.5,
        FreshPerspective => "Fresh Perspective" @ 1.2,
        SolidExecution => "Solid Execution" @ 0.9,
        StandardApproach => "Standard Approach" @ 0.6,
    }
);

/// Self-reported description of an entry and the agency behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionProfile {
    pub category: Category,
    pub country: Country,
    pub agency_size: AgencySize,
    pub previous_wins: u32,
    pub years_experience: u32,
    pub budget_level: BudgetLevel,
    pub brand_prominence: BrandProminence,
    pub campaign_results: CampaignResults,
    pub creative_approach: CreativeApproach,
}

impl SubmissionProfile {
    /// Checks the two numeric fields; the categorical ones are closed by type.
    pub fn validate(&self) -> Result<(), EstimateError> {
        check_range(
            Dimension::PreviousWins,
            self.previous_wins,
            MAX_PREVIOUS_WINS,
        )?;
        check_range(
            Dimension::YearsExperience,
            self.years_experience,
            MAX_YEARS_EXPERIENCE,
        )
    }
}

fn check_range(dimension: Dimension, value: u32, max: u32) -> Result<(), EstimateError> {
    if value > max {
        return Err(EstimateError::InvalidInput {
            field: dimension.key(),
            value: value.to_string(),
            reason: format!("must be between 0 and {max}"),
        });
    }
    Ok(())
}
