use crate::SteamID;
use crate::types::ServerTime;
use crate::serialize::{
    steamid_string,
    from_int_to_bool,
    float_or_string,
    ts_seconds_option_none_when_zero,
};
use serde::{Serialize, Deserialize};

/// The percentage of players who unlocked an achievement.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct GlobalAchievementPercentage {
    /// The achievement's API name.
    pub name: String,
    /// The percentage of players who unlocked it, from 0 to 100.
    #[serde(deserialize_with = "float_or_string")]
    pub percent: f64,
}

/// A user's achievements for a game.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PlayerAchievements {
    /// The user's SteamID.
    #[serde(rename = "steamID")]
    #[serde(with = "steamid_string")]
    pub steamid: SteamID,
    /// The name of the game.
    #[serde(rename = "gameName")]
    pub game_name: String,
    /// The achievements. Empty if the game has none.
    #[serde(default)]
    pub achievements: Vec<PlayerAchievement>,
}

impl PlayerAchievements {
    /// The number of achievements the user unlocked.
    pub fn achieved_count(&self) -> usize {
        self.achievements
            .iter()
            .filter(|achievement| achievement.achieved)
            .count()
    }
}

/// An achievement and whether a user unlocked it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PlayerAchievement {
    /// The achievement's API name.
    pub apiname: String,
    /// Whether the achievement is unlocked.
    #[serde(deserialize_with = "from_int_to_bool")]
    pub achieved: bool,
    /// When the achievement was unlocked.
    #[serde(default)]
    #[serde(with = "ts_seconds_option_none_when_zero")]
    pub unlocktime: Option<ServerTime>,
    /// The localized name.
    #[serde(default)]
    pub name: Option<String>,
    /// The localized description.
    #[serde(default)]
    pub description: Option<String>,
}
