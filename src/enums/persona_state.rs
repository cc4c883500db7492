use num_enum::{TryFromPrimitive, IntoPrimitive};
use serde_repr::{Serialize_repr, Deserialize_repr};
use strum::{Display, EnumString};

/// The online status of a user.
#[derive(Debug, Serialize_repr, Deserialize_repr, Display, EnumString, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, Clone, Copy, Hash)]
#[repr(u8)]
pub enum PersonaState {
    /// Offline, or the profile is private.
    Offline = 0,
    /// Online.
    Online = 1,
    /// Busy.
    Busy = 2,
    /// Away.
    Away = 3,
    /// Snooze.
    Snooze = 4,
    /// Looking to trade.
    #[strum(serialize = "Looking to Trade")]
    LookingToTrade = 5,
    /// Looking to play.
    #[strum(serialize = "Looking to Play")]
    LookingToPlay = 6,
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn displays_labels() {
        assert_eq!(PersonaState::Online.to_string(), "Online");
        assert_eq!(PersonaState::LookingToTrade.to_string(), "Looking to Trade");
        assert_eq!("Looking to Play".parse::<PersonaState>().unwrap(), PersonaState::LookingToPlay);
    }
    
    #[test]
    fn rejects_unknown_state() {
        assert_eq!(PersonaState::try_from(6u8).unwrap(), PersonaState::LookingToPlay);
        assert!(PersonaState::try_from(7u8).is_err());
    }
}
