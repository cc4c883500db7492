use crate::SteamID;
use crate::enums::PersonaState;
use crate::serialize::{steamid_string, ts_seconds_option_none_when_zero};
use crate::steamid::LegacySteamID;
use crate::types::ServerTime;
use serde::Serialize;

/// A summary of a user's public profile.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PlayerSummary {
    /// The user's 64-bit SteamID.
    #[serde(with = "steamid_string")]
    pub steamid: SteamID,
    /// The user's SteamID in the legacy `STEAM_0:X:Y` format.
    pub legacy_steamid: LegacySteamID,
    /// The visibility of the profile. `1` is private or friends-only, `3` is public.
    pub community_visibility_state: u8,
    /// `1` if the user has set up their community profile.
    pub profile_state: Option<u8>,
    /// The user's display name.
    pub persona_name: String,
    /// When the user was last online.
    #[serde(with = "ts_seconds_option_none_when_zero")]
    pub last_logoff: Option<ServerTime>,
    /// `1` if the profile allows public comments.
    pub comment_permission: Option<u8>,
    /// The URL to the user's community profile.
    pub profile_url: String,
    /// The URL to the 32x32 avatar.
    pub avatar: String,
    /// The URL to the 64x64 avatar.
    pub avatar_medium: String,
    /// The URL to the 184x184 avatar.
    pub avatar_full: String,
    /// The user's online status.
    pub persona_state: PersonaState,
    /// Extended profile details. Only included when the user is [`PersonaState::Online`].
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub details: Option<PlayerDetails>,
}

impl PlayerSummary {
    /// Whether the user is online.
    pub fn is_online(&self) -> bool {
        self.persona_state == PersonaState::Online
    }
}

/// Extended profile details. Any of these may be missing if the user has not set them or they
/// are not public.
#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct PlayerDetails {
    /// The user's real name.
    pub real_name: Option<String>,
    /// The ID of the user's primary group.
    pub primary_clan_id: Option<u64>,
    /// When the account was created.
    #[serde(with = "ts_seconds_option_none_when_zero")]
    pub time_created: Option<ServerTime>,
    /// Flags for the persona state.
    pub persona_state_flags: Option<u32>,
    /// ISO 3166 country code.
    pub country_code: Option<String>,
    /// State code within the country.
    pub state_code: Option<String>,
    /// Steam's internal ID for the user's city.
    pub city_id: Option<u32>,
}
