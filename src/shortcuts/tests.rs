//! Shortcut tests against a mock Stats API

use super::*;
use crate::core::Config;
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> StatsApiClient {
    let config = Config::default().with_base_url(format!("{}/api/", server.uri()));
    StatsApiClient::new(config).unwrap()
}

#[test]
fn test_flatten_schedule_games() {
    let response = json!({
        "dates": [
            {"date": "2023-03-30", "games": [{"gamePk": 1}, {"gamePk": 2}]},
            {"date": "2023-03-31", "games": []},
            {"date": "2023-04-01", "games": [{"gamePk": 3}]}
        ]
    });

    let games = flatten_schedule_games(&response);
    let pks: Vec<i64> = games.iter().map(|g| g["gamePk"].as_i64().unwrap()).collect();
    assert_eq!(pks, vec![1, 2, 3]);

    assert!(flatten_schedule_games(&json!({})).is_empty());
}

#[test]
fn test_select_at_bats() {
    let response = json!({
        "allPlays": [
            {"result": {"type": "atBat", "event": "Single"}},
            {"result": {"type": "action", "event": "Pitching Substitution"}},
            {"result": {"type": "atBat", "event": "Strikeout"}}
        ]
    });

    let at_bats = select_at_bats(&response);
    assert_eq!(at_bats.len(), 2);
    assert_eq!(at_bats[1]["result"]["event"], "Strikeout");
}

#[tokio::test]
async fn test_schedule_defaults_sport_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/schedule"))
        .and(query_param("sportId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dates": [{"games": [{"gamePk": 718780}]}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let games = client.schedule(CallerOptions::new()).await.unwrap();
    assert_eq!(games, vec![json!({"gamePk": 718780})]);
}

#[tokio::test]
async fn test_caller_options_override_shortcut_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/677594/stats"))
        .and(query_param("stats", "career"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stats": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stats = client
        .player_stats(677594, CallerOptions::new().with("stats", "career"))
        .await
        .unwrap();
    assert_eq!(stats, json!({"stats": []}));
}

#[tokio::test]
async fn test_team_list_sends_mlb_league_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .and(query_param("leagueIds", "103,104"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"teams": [{"id": 158}]})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let teams = client.team_list(CallerOptions::new()).await.unwrap();
    assert_eq!(teams["teams"][0]["id"], 158);
}

#[tokio::test]
async fn test_team_roster_and_game_at_bats() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/158/roster"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"roster": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/game/718780/playByPlay"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "allPlays": [{"result": {"type": "atBat"}}, {"result": {"type": "action"}}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let roster = client.team_roster(158, CallerOptions::new()).await.unwrap();
    assert_eq!(roster, json!({"roster": []}));

    let at_bats = client.game_at_bats(718780, CallerOptions::new()).await.unwrap();
    assert_eq!(at_bats.len(), 1);
}

#[tokio::test]
async fn test_player_info_returns_first_person() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/677594"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "people": [{"id": 677594, "fullName": "Julio Rodríguez"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"people": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let person = client.player_info(677594, CallerOptions::new()).await.unwrap();
    assert_eq!(person["fullName"], "Julio Rodríguez");

    assert!(matches!(
        client.player_info(1, CallerOptions::new()).await,
        Err(StatsError::NoData)
    ));
}
