use super::domain::{Category, Country, Dimension, SubmissionProfile};
use super::rules::{experience_boost, win_boost, AppliedFactors};
use super::views::{ComparativeStanding, Likelihood, StrengthScore};

/// Approximate ceiling across the multiplier tables.
const TABLE_STRENGTH_SCALE: f64 = 1.5;
const WINS_STRENGTH_SCALE: f64 = 1.5;
const EXPERIENCE_STRENGTH_SCALE: f64 = 1.2;

/// Compares the estimate against the category-only baseline. Every other
/// factor is ignored for the baseline.
pub(crate) fn comparative_standing(
    probability: f64,
    base_rate: f64,
    category_multiplier: f64,
) -> ComparativeStanding {
    let category_average = base_rate * category_multiplier;
    let ratio = probability / category_average;

    let (direction, reported_ratio) = if ratio >= 1.0 {
        (Likelihood::MoreLikely, ratio)
    } else {
        (Likelihood::LessLikely, category_average / probability)
    };

    ComparativeStanding {
        category_average,
        ratio,
        direction,
        reported_ratio,
    }
}

/// Table dimensions are not clamped and may exceed 1.0.
pub(crate) fn strength_profile(
    profile: &SubmissionProfile,
    factors: &AppliedFactors,
) -> Vec<StrengthScore> {
    Dimension::ordered()
        .into_iter()
        .map(|dimension| {
            let score = match dimension {
                Dimension::Category => factors.category / TABLE_STRENGTH_SCALE,
                Dimension::Country => factors.country / TABLE_STRENGTH_SCALE,
                Dimension::AgencySize => factors.agency_size / TABLE_STRENGTH_SCALE,
                Dimension::PreviousWins => {
                    (win_boost(profile.previous_wins) / WINS_STRENGTH_SCALE).min(1.0)
                }
                Dimension::YearsExperience => {
                    (experience_boost(profile.years_experience) / EXPERIENCE_STRENGTH_SCALE)
                        .min(1.0)
                }
                Dimension::BudgetLevel => factors.budget_level / TABLE_STRENGTH_SCALE,
                Dimension::BrandProminence => factors.brand_prominence / TABLE_STRENGTH_SCALE,
                Dimension::CampaignResults => factors.campaign_results / TABLE_STRENGTH_SCALE,
                Dimension::CreativeApproach => factors.creative_approach / TABLE_STRENGTH_SCALE,
            };

            StrengthScore {
                dimension,
                axis_label: dimension.axis_label(),
                score,
            }
        })
        .collect()
}

/// Approximate number of entries the category received in 2024.
pub fn category_entries(category: Category) -> u32 {
    match category {
        Category::Film => 2100,
        Category::Digital => 2850,
        Category::PrintPublishing => 1450,
        Category::Outdoor => 2300,
        Category::Design => 2050,
        Category::RadioAudio => 850,
        Category::Mobile => 1750,
        Category::SocialInfluencer => 3100,
        Category::Pr => 1900,
        Category::Direct => 1650,
        Category::Media => 1850,
        Category::CreativeData => 1200,
        Category::CreativeStrategy => 1100,
        Category::CreativeCommerce => 1400,
        Category::HealthWellness => 1300,
        Category::Innovation => 950,
    }
}

pub fn country_insight(country: Country) -> &'static str {
    match country {
        Country::UnitedStates => "US entries dominate with the highest number of wins. Strong in Film, Digital, and Social categories.",
        Country::UnitedKingdom => "UK agencies excel in Creative Strategy and PR categories with innovative campaigns.",
        Country::France => "French entries are known for strong Design and Film craft with artistic sensibilities.",
        Country::Brazil => "Brazilian agencies are celebrated for bold, provocative creative approaches.",
        Country::Germany => "German entries stand out for technical excellence and precision in execution.",
        Country::Japan => "Japanese work is recognized for unique aesthetic and innovative technology integration.",
        Country::Australia => "Australian agencies excel in Outdoor and PR categories with bold approaches.",
        Country::Canada => "Canadian entries perform well in Purpose-driven campaigns and Social Good.",
        Country::Spain => "Spanish work stands out in Film Craft and Design with strong cultural elements.",
        Country::Italy => "Italian entries excel in Design and Craft categories with strong aesthetic sensibility.",
        Country::Sweden => "Swedish agencies are known for minimalist design and digital innovation.",
        Country::Netherlands => "Dutch entries perform well in Design and Creative Strategy categories.",
        Country::China => "Chinese work is gaining recognition for digital innovation and scale.",
        Country::SouthKorea => "Korean entries stand out for technology integration and digital craft.",
        Country::Argentina => "Argentinian agencies excel in Film and Print with emotional storytelling.",
        Country::India => "Indian entries are recognized for purpose-driven campaigns with cultural relevance.",
        Country::Turkey => "Turkish work stands out when it leverages unique cultural perspectives.",
        Country::SouthAfrica => "South African entries excel in purpose-driven campaigns addressing social issues.",
        Country::Mexico => "Mexican agencies perform well in Film and Design with strong cultural elements.",
        Country::Thailand => "Thai work is recognized for craft excellence and emotional storytelling.",
        Country::UnitedArabEmirates => "UAE entries stand out in Outdoor and Experiential categories.",
        Country::Other => "Entries from emerging markets can stand out with unique cultural perspectives.",
    }
}
