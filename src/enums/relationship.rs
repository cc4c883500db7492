use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which relationships to include when getting a friend list.
#[derive(Default, Debug, Serialize, Deserialize, Display, EnumString, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Relationship {
    /// Only friends.
    #[default]
    Friend,
    /// Every relationship the user has.
    All,
}
