//! Models for making requests.

use crate::enums::Relationship;

/// Options for getting news for an app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetNewsForAppOptions {
    /// The number of news items to get. Defaults to 1.
    pub count: u32,
    /// The maximum length of each news item's contents. Defaults to 1000.
    pub max_length: u32,
}

impl Default for GetNewsForAppOptions {
    fn default() -> Self {
        Self {
            count: 1,
            max_length: 1000,
        }
    }
}

/// Options for getting a friend list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GetFriendListOptions {
    /// Which relationships to include. Defaults to [`Relationship::Friend`].
    pub relationship: Relationship,
    /// Whether to fill in the persona name of each friend. This makes an additional request to
    /// get player summaries for the friends. Defaults to `false`.
    pub include_persona_names: bool,
}

/// Options for getting owned games.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GetOwnedGamesOptions {
    /// Whether to include game names and images. Defaults to `false`.
    pub include_app_info: bool,
    /// Whether to include free games the user has played. Defaults to `false`.
    pub include_played_free_games: bool,
}
