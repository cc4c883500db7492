use crate::SteamID;
use crate::serialize::steamid_string;
use crate::types::ServerTime;
use serde::{Serialize, Deserialize};
use chrono::serde::ts_seconds;

/// A relationship in a user's friend list.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Friend {
    /// The SteamID of the friend.
    #[serde(with = "steamid_string")]
    pub steamid: SteamID,
    /// The kind of relationship, e.g. `friend`.
    pub relationship: String,
    /// When the relationship was established.
    #[serde(with = "ts_seconds")]
    pub friend_since: ServerTime,
    /// The friend's display name. Only filled when persona names are requested and a summary
    /// for the friend was returned.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona_name: Option<String>,
}
