use crate::types::{AppId, Minutes, ServerTime};
use crate::serialize::ts_seconds_option_none_when_zero;
use serde::{Serialize, Deserialize};

/// The games owned by a user.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct OwnedGames {
    /// The number of games owned.
    #[serde(default)]
    pub game_count: u32,
    /// The games. Names and icons are only included when app info is requested.
    #[serde(default)]
    pub games: Vec<OwnedGame>,
}

/// A game in a user's library.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OwnedGame {
    /// The game's app ID.
    pub appid: AppId,
    /// The name of the game.
    #[serde(default)]
    pub name: Option<String>,
    /// Total playtime.
    #[serde(default)]
    pub playtime_forever: Minutes,
    /// Playtime in the last two weeks.
    #[serde(default)]
    pub playtime_2weeks: Option<Minutes>,
    /// Hash of the game's icon. Combine with the app ID to build an image URL.
    #[serde(default)]
    #[serde(rename = "img_icon_url")]
    pub icon_url: Option<String>,
    /// Hash of the game's logo.
    #[serde(default)]
    #[serde(rename = "img_logo_url")]
    pub logo_url: Option<String>,
    /// Whether the game has stats or achievements visible on the community profile.
    #[serde(default)]
    pub has_community_visible_stats: Option<bool>,
    /// When the user last played the game.
    #[serde(default)]
    #[serde(with = "ts_seconds_option_none_when_zero")]
    pub rtime_last_played: Option<ServerTime>,
}

/// The games a user played in the last two weeks.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct RecentlyPlayedGames {
    /// The number of games played in the last two weeks. This can exceed the number of games
    /// returned when a count is requested.
    #[serde(default)]
    pub total_count: u32,
    /// The games.
    #[serde(default)]
    pub games: Vec<RecentlyPlayedGame>,
}

/// A game a user played in the last two weeks.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RecentlyPlayedGame {
    /// The game's app ID.
    pub appid: AppId,
    /// The name of the game.
    #[serde(default)]
    pub name: Option<String>,
    /// Playtime in the last two weeks.
    #[serde(default)]
    pub playtime_2weeks: Minutes,
    /// Total playtime.
    #[serde(default)]
    pub playtime_forever: Minutes,
    /// Hash of the game's icon.
    #[serde(default)]
    #[serde(rename = "img_icon_url")]
    pub icon_url: Option<String>,
}
