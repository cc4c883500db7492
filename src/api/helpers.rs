use super::response::RawPlayerSummary;
use crate::enums::PersonaState;
use crate::error::DecodeError;
use crate::response::{Friend, PlayerDetails, PlayerSummary};
use crate::steamid::to_legacy_id;
use std::collections::HashMap;

/// Converts a raw player into a [`PlayerSummary`]. Extended details are only kept for users who
/// are online.
pub fn from_raw_player_summary(
    player: RawPlayerSummary,
) -> Result<PlayerSummary, DecodeError> {
    let persona_state = u8::try_from(player.personastate)
        .ok()
        .and_then(|state| PersonaState::try_from(state).ok())
        .ok_or(DecodeError::UnknownPersonaState(player.personastate))?;
    let details = if persona_state == PersonaState::Online {
        Some(PlayerDetails {
            real_name: player.realname,
            primary_clan_id: player.primaryclanid,
            time_created: player.timecreated,
            persona_state_flags: player.personastateflags,
            country_code: player.loccountrycode,
            state_code: player.locstatecode,
            city_id: player.loccityid,
        })
    } else {
        None
    };

    Ok(PlayerSummary {
        steamid: player.steamid,
        legacy_steamid: to_legacy_id(player.steamid),
        community_visibility_state: player.communityvisibilitystate,
        profile_state: player.profilestate,
        persona_name: player.personaname,
        last_logoff: player.lastlogoff,
        comment_permission: player.commentpermission,
        profile_url: player.profileurl,
        avatar: player.avatar,
        avatar_medium: player.avatarmedium,
        avatar_full: player.avatarfull,
        persona_state,
        details,
    })
}

/// Fills in persona names for friends which have a matching summary. Friends without one are
/// left as is.
pub fn attach_persona_names(
    friends: &mut [Friend],
    summaries: &[PlayerSummary],
) {
    let names = summaries
        .iter()
        .map(|summary| (u64::from(summary.steamid), summary.persona_name.as_str()))
        .collect::<HashMap<_, _>>();

    for friend in friends {
        match names.get(&u64::from(friend.steamid)) {
            Some(name) => friend.persona_name = Some(name.to_string()),
            None => log::debug!("No summary for friend {}", u64::from(friend.steamid)),
        }
    }
}
