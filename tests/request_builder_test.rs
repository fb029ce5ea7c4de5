//! Request building against the built-in endpoint table

use chrono::Datelike;
use mlb_statsapi::{build, CallerOptions, EndpointRegistry, StatsError, ValidationError};

fn registry() -> &'static EndpointRegistry {
    EndpointRegistry::builtin().unwrap()
}

#[test]
fn test_person_request() {
    let person = registry().lookup("person").unwrap();
    let request = build(
        person,
        &CallerOptions::new()
            .with("personId", 677594)
            .with("hydrate", "currentTeam")
            .with("sportId", 1),
    )
    .unwrap();

    assert_eq!(request.url, "v1/people/677594");
    assert_eq!(
        request.query_pairs(),
        vec![("hydrate".to_string(), "currentTeam".to_string())]
    );
}

#[test]
fn test_awards_optional_and_boolean_params() {
    let awards = registry().lookup("awards").unwrap();

    let list = build(awards, &CallerOptions::new()).unwrap();
    assert_eq!(list.url, "v1/awards");

    let recipients = build(
        awards,
        &CallerOptions::new()
            .with("awardId", "MLBHOF")
            .with("recipients", true)
            .with("season", 2023),
    )
    .unwrap();
    assert_eq!(recipients.url, "v1/awards/MLBHOF/recipients");
    assert_eq!(
        recipients.query_pairs(),
        vec![("season".to_string(), "2023".to_string())]
    );
}

#[test]
fn test_attendance_requires_one_of_group() {
    let attendance = registry().lookup("attendance").unwrap();

    let errors = build(attendance, &CallerOptions::new().with("season", 2023)).unwrap_err();
    assert_eq!(
        errors.into_inner(),
        vec![ValidationError::MissingRequiredGroup(vec![
            "teamId".to_string(),
            "leagueId".to_string(),
            "leagueListId".to_string(),
        ])]
    );

    let request = build(attendance, &CallerOptions::new().with("leagueListId", "mlb")).unwrap();
    assert_eq!(request.url, "v1/attendance");
}

#[test]
fn test_draft_year_defaults_to_current_year() {
    let draft = registry().lookup("draft").unwrap();
    let year = chrono::Local::now().year();

    let request = build(draft, &CallerOptions::new()).unwrap();
    assert_eq!(request.url, format!("v1/draft/{}", year));

    let prospects = build(
        draft,
        &CallerOptions::new().with("prospects", true).with("year", 2019),
    )
    .unwrap();
    assert_eq!(prospects.url, "v1/draft/prospects/2019");
}

#[test]
fn test_registry_lookup_error_message() {
    let err = registry().lookup("peoples").unwrap_err();
    assert!(matches!(err, StatsError::UnknownEndpoint { .. }));
    assert_eq!(err.to_string(), "peoples is not a valid endpoint");
}

#[test]
fn test_validation_error_converts_to_stats_error() {
    let person = registry().lookup("person").unwrap();
    let err: StatsError = build(person, &CallerOptions::new()).unwrap_err().into();
    assert_eq!(
        err.to_string(),
        "Request validation failed: Missing required path parameter: personId"
    );
}
