use crate::SteamID;
use crate::serialize::{steamid_string, from_int_to_bool, float_or_string};
use serde::{Serialize, Deserialize};

/// A user's stats for a game.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UserStats {
    /// The user's SteamID.
    #[serde(rename = "steamID")]
    #[serde(with = "steamid_string")]
    pub steamid: SteamID,
    /// The name of the game.
    #[serde(rename = "gameName")]
    pub game_name: String,
    /// The stats.
    #[serde(default)]
    pub stats: Vec<UserStat>,
    /// The achievements the user unlocked.
    #[serde(default)]
    pub achievements: Vec<UserStatAchievement>,
}

impl UserStats {
    /// Gets a stat by name.
    pub fn stat(&self, name: &str) -> Option<f64> {
        self.stats
            .iter()
            .find(|stat| stat.name == name)
            .map(|stat| stat.value)
    }
}

/// A single stat.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UserStat {
    /// The stat's API name.
    pub name: String,
    /// The value.
    #[serde(deserialize_with = "float_or_string")]
    pub value: f64,
}

/// An achievement in a user's stats.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UserStatAchievement {
    /// The achievement's API name.
    pub name: String,
    /// Whether the achievement is unlocked.
    #[serde(deserialize_with = "from_int_to_bool")]
    pub achieved: bool,
}
