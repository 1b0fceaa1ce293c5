//! End-to-end tests through the exported FFI object.

use dog_lifespan_core::{
    open_builtin_catalog, open_catalog_json, DogLifespanError, FfiDogProfile,
};

fn form_answers(breed: &str, weight_kg: f64) -> FfiDogProfile {
    FfiDogProfile {
        breed: breed.to_string(),
        age_years: 3.0,
        weight_kg,
        gender: "female".to_string(),
        neutered: "no".to_string(),
        birth_experience: Some("once".to_string()),
        exercise_minutes_per_week: 400,
        diet: "dog-food".to_string(),
        vaccination: "regular".to_string(),
        health: "healthy".to_string(),
        dental: "regular".to_string(),
        skin_disease: "none".to_string(),
        genetic: "no".to_string(),
        checkup: "regular".to_string(),
        supplements: "yes".to_string(),
        hygiene: "regular".to_string(),
        stress: "low".to_string(),
        training: "often".to_string(),
    }
}

#[test]
fn test_catalog_metadata() {
    let core = open_builtin_catalog().unwrap();

    let breeds = core.list_breeds().unwrap();
    assert!(breeds.contains(&"치와와".to_string()));
    assert!(breeds.contains(&"말티즈".to_string()));
    assert_eq!(core.catalog_fingerprint().unwrap().len(), 64);
    assert!(!core.catalog_version().unwrap().is_empty());

    let maltese = core.get_breed("말티즈".into()).unwrap().unwrap();
    assert_eq!(maltese.adult.min_kg, 2.0);
    assert_eq!(maltese.adult.max_kg, 4.0);
    assert!(core.get_breed("없는 품종".into()).unwrap().is_none());
}

#[test]
fn test_suggest_breeds() {
    let core = open_builtin_catalog().unwrap();
    let suggestions = core.suggest_breeds("포메".into(), 3).unwrap();
    assert_eq!(suggestions.first().map(String::as_str), Some("포메라니안"));
}

#[test]
fn test_preview_weight_status() {
    let core = open_builtin_catalog().unwrap();

    let status = core
        .preview_weight_status("말티즈".into(), 4.41, 3.0)
        .unwrap();
    assert_eq!(status.status, "overweight");
    assert_eq!(status.status_text, "과체중");
    assert_eq!(status.bracket, "adult");

    let err = core
        .preview_weight_status("말티스".into(), 3.0, 3.0)
        .unwrap_err();
    match err {
        DogLifespanError::UnknownBreed(message) => assert!(message.contains("말티즈")),
        other => panic!("expected UnknownBreed, got {:?}", other),
    }
}

#[test]
fn test_estimate_does_not_change_session() {
    let core = open_builtin_catalog().unwrap();

    let result = core.estimate(form_answers("치와와", 2.0)).unwrap();
    assert_eq!(result.life_expectancy_years, 18.3);
    assert_eq!(result.factors.len(), 5);
    assert!(result.factors.iter().all(|f| f.sentiment == "positive"));

    assert!(core.current_assessment().unwrap().is_none());
}

#[test]
fn test_submit_and_replace() {
    let core = open_builtin_catalog().unwrap();

    let first = core.submit_profile(form_answers("치와와", 2.0)).unwrap();
    assert_eq!(first.life_expectancy_years, 18.3);
    assert!(first.breed_found);
    assert_eq!(first.average_lifespan, 17.0);

    let second = core.submit_profile(form_answers("말티즈", 3.0)).unwrap();
    assert_ne!(first.assessment_id, second.assessment_id);

    let current = core.current_assessment().unwrap().unwrap();
    assert_eq!(current.assessment_id, second.assessment_id);
    assert_eq!(current.breed, "말티즈");
    assert_eq!(current.weight_status.unwrap().status, "normal");
}

#[test]
fn test_submit_unknown_breed_uses_fallback() {
    let core = open_builtin_catalog().unwrap();

    let assessment = core.submit_profile(form_answers("우주견", 8.0)).unwrap();
    assert!(!assessment.breed_found);
    assert_eq!(assessment.average_lifespan, 12.0);
    assert_eq!(assessment.life_expectancy_years, 16.3);
    assert!(assessment.weight_status.is_none());
}

#[test]
fn test_answers_are_normalized() {
    let core = open_builtin_catalog().unwrap();

    let mut answers = form_answers("  치와와 ", 2.0);
    answers.skin_disease = " Severe ".into();
    answers.health = "CHRONIC".into();
    let result = core.estimate(answers).unwrap();

    // 18.3 - 1.5 - 0.8
    assert_eq!(result.life_expectancy_years, 16.0);
}

#[test]
fn test_invalid_answers_rejected() {
    let core = open_builtin_catalog().unwrap();

    let mut answers = form_answers("치와와", 2.0);
    answers.diet = "kibble".into();
    assert!(matches!(
        core.estimate(answers),
        Err(DogLifespanError::InvalidInput(_))
    ));

    let mut answers = form_answers("치와와", 2.0);
    answers.stress = "".into();
    assert!(matches!(
        core.submit_profile(answers),
        Err(DogLifespanError::InvalidInput(_))
    ));
}

#[test]
fn test_out_of_range_submission_rejected() {
    let core = open_builtin_catalog().unwrap();
    core.submit_profile(form_answers("치와와", 2.0)).unwrap();

    let mut answers = form_answers("치와와", 2.0);
    answers.age_years = 40.0;
    assert!(matches!(
        core.submit_profile(answers),
        Err(DogLifespanError::InvalidInput(_))
    ));

    // Previous assessment is still on display
    let current = core.current_assessment().unwrap().unwrap();
    assert_eq!(current.life_expectancy_years, 18.3);
}

#[test]
fn test_reports_require_assessment() {
    let core = open_builtin_catalog().unwrap();
    assert!(matches!(
        core.radar_chart(),
        Err(DogLifespanError::NotFound(_))
    ));
    assert!(matches!(
        core.export_report_json(),
        Err(DogLifespanError::NotFound(_))
    ));
}

#[test]
fn test_reports_for_current_assessment() {
    let core = open_builtin_catalog().unwrap();
    core.submit_profile(form_answers("치와와", 2.0)).unwrap();

    let chart = core.radar_chart().unwrap();
    assert_eq!(chart.labels, vec!["운동", "영양", "건강관리", "스트레스", "생활환경"]);
    assert_eq!(chart.values.len(), 5);
    assert_eq!(chart.suggested_min, -1.0);
    assert_eq!(chart.suggested_max, 1.0);

    let json = core.export_report_json().unwrap();
    assert!(json.contains("\"life_expectancy_years\": 18.3"));

    let csv = core.export_report_csv().unwrap();
    assert_eq!(csv.lines().count(), 6);

    core.clear_assessment().unwrap();
    assert!(core.current_assessment().unwrap().is_none());
}

#[test]
fn test_open_custom_catalog() {
    let json = r#"{
        "version": "custom-1",
        "breeds": [
            {
                "name": "테스트견",
                "weights": {
                    "puppy": {"min": 1.0, "max": 3.0},
                    "adult": {"min": 3.0, "max": 6.0},
                    "senior": {"min": 3.0, "max": 6.0}
                },
                "lifespan_years": 14.0,
                "adjustment": 1.5
            }
        ]
    }"#;
    let core = open_catalog_json(json.to_string()).unwrap();
    assert_eq!(core.catalog_version().unwrap(), "custom-1");
    assert_eq!(core.list_breeds().unwrap(), vec!["테스트견".to_string()]);

    let result = core.estimate(form_answers("테스트견", 4.0)).unwrap();
    // 12 + 1.5 + 4.3
    assert_eq!(result.life_expectancy_years, 17.8);
}

#[test]
fn test_open_invalid_catalog() {
    assert!(matches!(
        open_catalog_json("[]".to_string()),
        Err(DogLifespanError::CatalogError(_))
    ));
}
