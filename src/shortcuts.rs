//! Convenience calls for frequently used endpoints.
//!
//! Each shortcut fills in the endpoint's identifying path parameter and a few
//! defaults. Options passed by the caller always win over those defaults.

use serde_json::Value;

use crate::client::StatsApiClient;
use crate::core::HttpClient;
use crate::error::{Result, StatsError};
use crate::request::{CallerOptions, OptionValue};

#[cfg(test)]
mod tests;

/// American League and National League.
pub const MLB_LEAGUE_IDS: [i64; 2] = [103, 104];

/// Sport id of Major League Baseball.
pub const MLB_SPORT_ID: i64 = 1;

impl<C: HttpClient> StatsApiClient<C> {
    /// Roster of one team (`team_roster`).
    pub async fn team_roster(&self, team_id: u32, options: CallerOptions) -> Result<Value> {
        let options = options.with_default("teamId", team_id);
        self.call_json("team_roster", &options).await
    }

    /// Every game on the schedule, flattened out of the per-date buckets.
    pub async fn schedule(&self, options: CallerOptions) -> Result<Vec<Value>> {
        let options = options.with_default("sportId", MLB_SPORT_ID);
        let response = self.call_json("schedule", &options).await?;
        Ok(flatten_schedule_games(&response))
    }

    /// Teams in the given leagues, MLB by default.
    pub async fn team_list(&self, options: CallerOptions) -> Result<Value> {
        let options = options.with_default("leagueIds", OptionValue::from(MLB_LEAGUE_IDS.to_vec()));
        self.call_json("teams", &options).await
    }

    /// Plays from a game's play-by-play whose result type is `atBat`.
    pub async fn game_at_bats(&self, game_pk: u32, options: CallerOptions) -> Result<Vec<Value>> {
        let options = options.with_default("gamePk", game_pk);
        let response = self.call_json("game_play_by_play", &options).await?;
        Ok(select_at_bats(&response))
    }

    /// Season stats for one player unless `stats` says otherwise.
    pub async fn player_stats(&self, person_id: u32, options: CallerOptions) -> Result<Value> {
        let options = options
            .with_default("personId", person_id)
            .with_default("stats", "season");
        self.call_json("person_stats", &options).await
    }

    /// The person record for one player.
    pub async fn player_info(&self, person_id: u32, options: CallerOptions) -> Result<Value> {
        let options = options.with_default("personId", person_id);
        let mut response = self.call_json("person", &options).await?;
        first_person(&mut response).ok_or(StatsError::NoData)
    }
}

pub fn flatten_schedule_games(response: &Value) -> Vec<Value> {
    response["dates"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|day| day["games"].as_array())
        .flatten()
        .cloned()
        .collect()
}

pub fn select_at_bats(response: &Value) -> Vec<Value> {
    response["allPlays"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(|play| play["result"]["type"] == "atBat")
        .cloned()
        .collect()
}

fn first_person(response: &mut Value) -> Option<Value> {
    response
        .get_mut("people")?
        .as_array_mut()?
        .first_mut()
        .map(Value::take)
}
