//! Raw response bodies.

use crate::SteamID;
use crate::response;
use crate::types::ServerTime;
use crate::serialize::{
    steamid_string,
    option_steamid_zero_as_none,
    option_string_or_number,
    ts_seconds_option_none_when_zero,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct GetNewsForAppResponse {
    pub appnews: response::AppNews,
}

#[derive(Deserialize, Debug)]
pub struct GetGlobalAchievementPercentagesResponseBody {
    #[serde(default)]
    pub achievements: Vec<response::GlobalAchievementPercentage>,
}

#[derive(Deserialize, Debug)]
pub struct GetGlobalAchievementPercentagesResponse {
    pub achievementpercentages: GetGlobalAchievementPercentagesResponseBody,
}

#[derive(Deserialize, Debug)]
pub struct RawPlayerSummary {
    #[serde(deserialize_with = "steamid_string::deserialize")]
    pub steamid: SteamID,
    pub communityvisibilitystate: u8,
    #[serde(default)]
    pub profilestate: Option<u8>,
    pub personaname: String,
    #[serde(default)]
    #[serde(deserialize_with = "ts_seconds_option_none_when_zero::deserialize")]
    pub lastlogoff: Option<ServerTime>,
    #[serde(default)]
    pub commentpermission: Option<u8>,
    pub profileurl: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub avatarmedium: String,
    #[serde(default)]
    pub avatarfull: String,
    pub personastate: i64,
    #[serde(default)]
    pub realname: Option<String>,
    #[serde(default)]
    #[serde(deserialize_with = "option_string_or_number")]
    pub primaryclanid: Option<u64>,
    #[serde(default)]
    #[serde(deserialize_with = "ts_seconds_option_none_when_zero::deserialize")]
    pub timecreated: Option<ServerTime>,
    #[serde(default)]
    pub personastateflags: Option<u32>,
    #[serde(default)]
    pub loccountrycode: Option<String>,
    #[serde(default)]
    pub locstatecode: Option<String>,
    #[serde(default)]
    pub loccityid: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub struct GetPlayerSummariesResponseBody {
    #[serde(default)]
    pub players: Vec<RawPlayerSummary>,
}

#[derive(Deserialize, Debug)]
pub struct GetPlayerSummariesResponse {
    pub response: GetPlayerSummariesResponseBody,
}

#[derive(Deserialize, Debug, Default)]
pub struct GetFriendListResponseBody {
    #[serde(default)]
    pub friends: Vec<response::Friend>,
}

#[derive(Deserialize, Debug)]
pub struct GetFriendListResponse {
    #[serde(default)]
    pub friendslist: GetFriendListResponseBody,
}

#[derive(Deserialize, Debug)]
pub struct GetPlayerAchievementsResponse {
    pub playerstats: response::PlayerAchievements,
}

#[derive(Deserialize, Debug)]
pub struct GetUserStatsForGameResponse {
    pub playerstats: response::UserStats,
}

#[derive(Deserialize, Debug)]
pub struct GetOwnedGamesResponse {
    #[serde(default)]
    pub response: response::OwnedGames,
}

#[derive(Deserialize, Debug)]
pub struct GetRecentlyPlayedGamesResponse {
    #[serde(default)]
    pub response: response::RecentlyPlayedGames,
}

#[derive(Deserialize, Debug)]
pub struct IsPlayingSharedGameResponseBody {
    #[serde(default)]
    #[serde(deserialize_with = "option_steamid_zero_as_none")]
    pub lender_steamid: Option<SteamID>,
}

#[derive(Deserialize, Debug)]
pub struct IsPlayingSharedGameResponse {
    pub response: IsPlayingSharedGameResponseBody,
}

#[derive(Deserialize, Debug)]
pub struct ResolveVanityURLResponseBody {
    pub success: u8,
    #[serde(default)]
    #[serde(deserialize_with = "option_string_or_number")]
    pub steamid: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ResolveVanityURLResponse {
    pub response: ResolveVanityURLResponseBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_get_player_summaries_response() {
        let response: GetPlayerSummariesResponse = serde_json::from_str(include_str!("fixtures/get_player_summaries.json")).unwrap();
        let player = response.response.players.first().unwrap();

        assert_eq!(u64::from(player.steamid), 76561197960435530);
        assert_eq!(player.primaryclanid, Some(103582791429521408));
        assert_eq!(player.loccityid, Some(3961));
    }

    #[test]
    fn parses_get_friend_list_response() {
        let response: GetFriendListResponse = serde_json::from_str(include_str!("fixtures/get_friend_list.json")).unwrap();
        let friend = response.friendslist.friends.first().unwrap();

        assert_eq!(friend.relationship, "friend");
        assert_eq!(friend.friend_since.timestamp(), 1262304000);
        assert!(friend.persona_name.is_none());
    }

    #[test]
    fn parses_empty_friend_list_response() {
        let response: GetFriendListResponse = serde_json::from_str("{}").unwrap();

        assert!(response.friendslist.friends.is_empty());
    }

    #[test]
    fn parses_get_owned_games_response() {
        let response: GetOwnedGamesResponse = serde_json::from_str(include_str!("fixtures/get_owned_games.json")).unwrap();
        let games = response.response;

        assert_eq!(games.game_count, 2);
        assert_eq!(games.games[0].name.as_deref(), Some("Team Fortress 2"));
        assert_eq!(games.games[0].playtime_2weeks, Some(42));
        assert!(games.games[1].playtime_2weeks.is_none());
        assert!(games.games[1].rtime_last_played.is_none());
    }

    #[test]
    fn parses_private_owned_games_response() {
        let response: GetOwnedGamesResponse = serde_json::from_str(r#"{"response":{}}"#).unwrap();

        assert_eq!(response.response.game_count, 0);
        assert!(response.response.games.is_empty());
    }

    #[test]
    fn parses_get_player_achievements_response() {
        let response: GetPlayerAchievementsResponse = serde_json::from_str(include_str!("fixtures/get_player_achievements.json")).unwrap();
        let achievements = response.playerstats;

        assert_eq!(achievements.game_name, "Team Fortress 2");
        assert_eq!(achievements.achievements.len(), 2);
        assert_eq!(achievements.achieved_count(), 1);
        assert!(achievements.achievements[1].unlocktime.is_none());
    }

    #[test]
    fn parses_get_user_stats_for_game_response() {
        let response: GetUserStatsForGameResponse = serde_json::from_str(include_str!("fixtures/get_user_stats_for_game.json")).unwrap();
        let stats = response.playerstats;

        assert_eq!(stats.stat("Scout.accum.iNumberOfKills"), Some(1234.0));
        assert_eq!(stats.stat("missing"), None);
        assert!(stats.achievements[0].achieved);
    }

    #[test]
    fn parses_get_news_for_app_response() {
        let response: GetNewsForAppResponse = serde_json::from_str(include_str!("fixtures/get_news_for_app.json")).unwrap();

        assert_eq!(response.appnews.appid, 440);
        assert_eq!(response.appnews.items[0].feed_label, "Community Announcements");
    }

    #[test]
    fn parses_global_achievement_percentages_response() {
        let response: GetGlobalAchievementPercentagesResponse = serde_json::from_str(include_str!("fixtures/get_global_achievement_percentages.json")).unwrap();
        let achievements = response.achievementpercentages.achievements;

        assert_eq!(achievements[0].name, "TF_PLAY_GAME_EVERYCLASS");
        assert_eq!(achievements[0].percent, 55.2);
        assert_eq!(achievements[1].percent, 3.0);
    }

    #[test]
    fn parses_resolve_vanity_url_no_match() {
        let response: ResolveVanityURLResponse = serde_json::from_str(r#"{"response":{"success":42,"message":"No match"}}"#).unwrap();

        assert_eq!(response.response.success, 42);
        assert!(response.response.steamid.is_none());
    }
}
