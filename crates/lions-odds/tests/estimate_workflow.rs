use lions_odds::estimator::{
    AgencySize, BrandProminence, BudgetLevel, CampaignResults, Category, Country,
    CreativeApproach, Dimension, Likelihood, SubmissionProfile, WinProbabilityEstimator,
    PROBABILITY_CEILING,
};

fn profile_from_labels(fields: [&str; 7], previous_wins: u32, years: u32) -> SubmissionProfile {
    SubmissionProfile {
        category: fields[0].parse().expect("category label"),
        country: fields[1].parse().expect("country label"),
        agency_size: fields[2].parse().expect("agency size label"),
        previous_wins,
        years_experience: years,
        budget_level: fields[3].parse().expect("budget label"),
        brand_prominence: fields[4].parse().expect("brand label"),
        campaign_results: fields[5].parse().expect("results label"),
        creative_approach: fields[6].parse().expect("creative label"),
    }
}

#[test]
fn dashboard_inputs_produce_a_full_estimate() {
    let profile = profile_from_labels(
        [
            "Digital",
            "Germany",
            "Mid-Size Independent",
            "Above Average",
            "Regional Leader",
            "Strong",
            "Fresh Perspective",
        ],
        2,
        6,
    );
    assert_eq!(profile.category, Category::Digital);
    assert_eq!(profile.country, Country::Germany);

    let outcome = WinProbabilityEstimator::default()
        .estimate(&profile)
        .expect("valid profile");

    let expected = 0.03 * 1.2 * 1.3 * 1.0 * 1.15 * 1.1 * 1.2 * 1.2 * 1.1 * 1.12;
    assert!((outcome.probability - expected).abs() < 1e-12);
    assert_eq!(outcome.comparative.direction, Likelihood::MoreLikely);
    assert_eq!(outcome.category_entries, 2850);
    assert!(outcome.country_insight.starts_with("German entries"));
    assert!(outcome.tips.is_empty());
}

#[test]
fn result_serializes_with_display_labels() {
    let profile = SubmissionProfile {
        category: Category::Pr,
        country: Country::SouthKorea,
        agency_size: AgencySize::SmallBoutique,
        previous_wins: 0,
        years_experience: 2,
        budget_level: BudgetLevel::BelowAverage,
        brand_prominence: BrandProminence::NationalPlayer,
        campaign_results: CampaignResults::Good,
        creative_approach: CreativeApproach::SolidExecution,
    };

    let outcome = WinProbabilityEstimator::default()
        .estimate(&profile)
        .expect("valid profile");
    let json = serde_json::to_value(&outcome).expect("result serializes");

    assert_eq!(json["factors"][0]["value"], "PR");
    assert_eq!(json["factors"][2]["impact"], "Small Boutique: 0.85x");
    assert_eq!(json["strength_profile"][8]["axis_label"], "Creativity");
    assert_eq!(json["tips"][0]["dimension"], "category");
    assert_eq!(json["comparative"]["direction"], "less_likely");

    let tip_dimensions: Vec<Dimension> = outcome.tips.iter().map(|t| t.dimension).collect();
    assert_eq!(
        tip_dimensions,
        vec![
            Dimension::Category,
            Dimension::AgencySize,
            Dimension::PreviousWins,
            Dimension::YearsExperience,
            Dimension::BudgetLevel,
            Dimension::CampaignResults,
            Dimension::CreativeApproach,
        ]
    );
}

#[test]
fn profile_deserializes_from_request_json() {
    let profile: SubmissionProfile = serde_json::from_str(
        r#"{
            "category": "innovation",
            "country": "United Arab Emirates",
            "agency_size": "in-house-team",
            "previous_wins": 50,
            "years_experience": 30,
            "budget_level": "High (Top 10%)",
            "brand_prominence": "Global Leader",
            "campaign_results": "Exceptional (Measurable Impact)",
            "creative_approach": "Groundbreaking Innovation"
        }"#,
    )
    .expect("profile parses");

    assert_eq!(profile.agency_size, AgencySize::InHouse);
    let outcome = WinProbabilityEstimator::default()
        .estimate(&profile)
        .expect("valid profile");
    assert!(outcome.probability <= PROBABILITY_CEILING);
}
