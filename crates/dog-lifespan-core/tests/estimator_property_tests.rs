//! Property tests for the estimator over arbitrary profiles.

use dog_lifespan_core::catalog::BreedCatalog;
use dog_lifespan_core::models::{
    Checkup, DentalCare, Diet, DogProfile, FactorCategory, Gender, GeneticHistory, HealthStatus,
    Hygiene, NeuterStatus, SkinCondition, StressLevel, Supplements, TrainingFrequency,
    Vaccination,
};
use dog_lifespan_core::scoring::{exercise_score, round_to_tenth, LifeExpectancyEstimator};
use proptest::prelude::*;

fn pick<T: Copy + std::fmt::Debug + 'static>(all: &'static [T]) -> impl Strategy<Value = T> {
    proptest::sample::select(all)
}

fn breed_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        pick(&["치와와", "말티즈", "진돗개", "골든 리트리버", "그레이트 데인", "믹스견"])
            .prop_map(String::from),
        "[a-z가-힣 ]{0,12}",
    ]
}

prop_compose! {
    fn arb_profile()(
        breed in breed_strategy(),
        age_years in 0.0f64..=25.0,
        weight_kg in 0.5f64..=100.0,
        gender in pick(Gender::ALL),
        neuter_status in pick(NeuterStatus::ALL),
        exercise_minutes_per_week in 0u32..=1000,
        diet in pick(Diet::ALL),
        vaccination in pick(Vaccination::ALL),
        health in pick(HealthStatus::ALL),
        dental in pick(DentalCare::ALL),
        skin in pick(SkinCondition::ALL),
        genetic in pick(GeneticHistory::ALL),
        checkup in pick(Checkup::ALL),
        supplements in pick(Supplements::ALL),
        hygiene in pick(Hygiene::ALL),
        stress in pick(StressLevel::ALL),
        training in pick(TrainingFrequency::ALL),
    ) -> DogProfile {
        DogProfile {
            breed,
            age_years,
            weight_kg,
            gender,
            neuter_status,
            birth_experience: None,
            exercise_minutes_per_week,
            diet,
            vaccination,
            health,
            dental,
            skin,
            genetic,
            checkup,
            supplements,
            hygiene,
            stress,
            training,
        }
    }
}

proptest! {
    #[test]
    fn prop_estimate_is_deterministic(profile in arb_profile()) {
        let catalog = BreedCatalog::builtin().unwrap();
        let estimator = LifeExpectancyEstimator::new(&catalog);

        let first = estimator.estimate(&profile);
        let second = estimator.estimate(&profile.clone());
        prop_assert_eq!(
            first.life_expectancy_years.to_bits(),
            second.life_expectancy_years.to_bits()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_result_has_one_decimal(profile in arb_profile()) {
        let catalog = BreedCatalog::builtin().unwrap();
        let years = LifeExpectancyEstimator::new(&catalog)
            .estimate(&profile)
            .life_expectancy_years;

        let text = years.to_string();
        let decimals = text.split('.').nth(1).map(str::len).unwrap_or(0);
        prop_assert!(decimals <= 1, "{} has more than one decimal", text);
    }

    #[test]
    fn prop_factor_scores_cover_five_categories(profile in arb_profile()) {
        let catalog = BreedCatalog::builtin().unwrap();
        let result = LifeExpectancyEstimator::new(&catalog).estimate(&profile);

        let value = serde_json::to_value(result.factor_scores).unwrap();
        let object = value.as_object().unwrap();
        prop_assert_eq!(object.len(), 5);
        for category in FactorCategory::ALL {
            prop_assert!(object.contains_key(category.as_str()));
        }
        prop_assert_eq!(result.factor_scores.iter().count(), 5);
    }

    #[test]
    fn prop_estimate_matches_breakdown_terms(profile in arb_profile()) {
        let catalog = BreedCatalog::builtin().unwrap();
        let breakdown = LifeExpectancyEstimator::new(&catalog).estimate_detailed(&profile);

        let raw = breakdown.base_age + breakdown.factor_total + breakdown.penalty_total();
        prop_assert!((breakdown.result.life_expectancy_years - raw).abs() <= 0.05 + 1e-9);
        prop_assert_eq!(breakdown.breed_found, catalog.contains(&profile.breed));
        prop_assert_eq!(breakdown.weight_status.is_some(), breakdown.breed_found);
    }

    #[test]
    fn prop_exercise_score_is_monotonic(a in 0u32..=1000, b in 0u32..=1000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(exercise_score(low) <= exercise_score(high));
    }

    #[test]
    fn prop_round_to_tenth_is_stable(tenths in -500i32..=500) {
        let value = tenths as f64 / 10.0;
        prop_assert_eq!(round_to_tenth(value), value);
    }
}
