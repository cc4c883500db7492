//! Conversions between SteamID formats and extraction of identifiers from community URLs.

use crate::error::ParseUrlError;
use std::fmt;
use steamid_ng::SteamID;
use serde::{Serialize, Serializer};
use lazy_regex::regex_captures;

/// The 64-bit SteamID of the first individual account in the public universe.
pub const BASE_OFFSET: u64 = 76561197960265728;

/// A SteamID in the legacy `STEAM_0:X:Y` format.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct LegacySteamID {
    /// The lowest bit of the 64-bit SteamID. Either `0` or `1`.
    pub server: u8,
    /// The account number. This is negative for 64-bit SteamIDs below [`BASE_OFFSET`].
    pub auth: i64,
}

impl fmt::Display for LegacySteamID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "STEAM_0:{}:{}", self.server, self.auth)
    }
}

impl Serialize for LegacySteamID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl From<SteamID> for LegacySteamID {
    fn from(steamid: SteamID) -> Self {
        to_legacy_id(steamid)
    }
}

/// Converts a 64-bit SteamID to the legacy format.
pub fn to_legacy_id(steamid: SteamID) -> LegacySteamID {
    let id64 = u64::from(steamid);
    let server = id64 % 2;
    // i128 holds every u64 so this never wraps; the result always fits in an i64
    let auth = (i128::from(id64 - server) - i128::from(BASE_OFFSET)) / 2;

    LegacySteamID {
        server: server as u8,
        auth: auth as i64,
    }
}

/// Extracts the vanity name from a profile URL such as
/// `https://steamcommunity.com/id/gabelogannewell`.
pub fn extract_vanity_token(url: &str) -> Result<&str, ParseUrlError> {
    regex_captures!(r#"^https?://(?:www\.)?steamcommunity\.com/id/([0-9a-zA-Z_-]+)"#, url)
        .map(|(_, token)| token)
        .ok_or_else(|| ParseUrlError::NoVanityToken(url.into()))
}

/// Extracts the SteamID from a profile URL such as
/// `https://steamcommunity.com/profiles/76561197960287930`.
pub fn extract_profile_steamid(url: &str) -> Result<SteamID, ParseUrlError> {
    let (_, digits) = regex_captures!(r#"^https?://(?:www\.)?steamcommunity\.com/profiles/([0-9]+)"#, url)
        .ok_or_else(|| ParseUrlError::NoProfileSteamID(url.into()))?;

    parse_steamid(digits)
}

/// Extracts the SteamID from an OpenID claimed identity such as
/// `https://steamcommunity.com/openid/id/76561197960287930`.
pub fn extract_openid_steamid(url: &str) -> Result<SteamID, ParseUrlError> {
    let (_, digits) = regex_captures!(r#"^https?://(?:www\.)?steamcommunity\.com/openid/id/([0-9]+)"#, url)
        .ok_or_else(|| ParseUrlError::NoOpenIdSteamID(url.into()))?;

    parse_steamid(digits)
}

fn parse_steamid(digits: &str) -> Result<SteamID, ParseUrlError> {
    digits
        .parse::<u64>()
        .map(SteamID::from)
        .map_err(|_error| ParseUrlError::InvalidSteamID(digits.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_legacy_id() {
        let legacy = to_legacy_id(SteamID::from(76561197960287930));

        assert_eq!(legacy.to_string(), "STEAM_0:0:11101");
    }

    #[test]
    fn converts_odd_steamid_to_legacy_id() {
        let legacy = to_legacy_id(SteamID::from(76561198000000001));

        assert_eq!(legacy, LegacySteamID { server: 1, auth: 19867136 });
        assert_eq!(legacy.to_string(), "STEAM_0:1:19867136");
    }

    #[test]
    fn legacy_id_server_is_lowest_bit() {
        for id64 in (BASE_OFFSET..BASE_OFFSET + 64).chain([u64::MAX - 1, u64::MAX]) {
            let legacy = to_legacy_id(SteamID::from(id64));

            assert_eq!(u64::from(legacy.server), id64 % 2);
            assert!(legacy.auth >= 0);
            assert_eq!(
                i128::from(legacy.auth) * 2 + i128::from(legacy.server) + i128::from(BASE_OFFSET),
                i128::from(id64),
            );
        }
    }

    #[test]
    fn legacy_id_below_base_offset_is_negative() {
        let legacy = to_legacy_id(SteamID::from(BASE_OFFSET - 2));

        assert_eq!(legacy.auth, -1);
    }

    #[test]
    fn extracts_vanity_token() {
        assert_eq!(extract_vanity_token("http://steamcommunity.com/id/gabelogannewell"), Ok("gabelogannewell"));
        assert_eq!(extract_vanity_token("https://steamcommunity.com/id/some_name-1/games/"), Ok("some_name-1"));
    }

    #[test]
    fn vanity_token_is_required() {
        let url = "https://steamcommunity.com/profiles/76561197960287930";

        assert_eq!(extract_vanity_token(url), Err(ParseUrlError::NoVanityToken(url.into())));
        assert!(extract_vanity_token("https://steamcommunity.com/id/").is_err());
    }

    #[test]
    fn urls_must_start_with_steamcommunity() {
        assert_eq!(extract_vanity_token("https://www.steamcommunity.com/id/gabelogannewell"), Ok("gabelogannewell"));
        assert!(extract_vanity_token("https://evil.example/?r=https://steamcommunity.com/id/x").is_err());
        assert!(extract_profile_steamid("https://evil.example/?r=https://steamcommunity.com/profiles/76561197960287930").is_err());
        assert!(extract_openid_steamid("https://evil.example/https://steamcommunity.com/openid/id/76561197960287930").is_err());
    }

    #[test]
    fn extracts_profile_steamid() {
        let steamid = extract_profile_steamid("https://steamcommunity.com/profiles/76561197960287930/").unwrap();

        assert_eq!(u64::from(steamid), 76561197960287930);
    }

    #[test]
    fn extracts_openid_steamid() {
        let steamid = extract_openid_steamid("https://steamcommunity.com/openid/id/76561197960287930").unwrap();

        assert_eq!(u64::from(steamid), 76561197960287930);
    }

    #[test]
    fn rejects_openid_steamid_overflow() {
        let url = "https://steamcommunity.com/openid/id/765611979602879309999";

        assert_eq!(
            extract_openid_steamid(url),
            Err(ParseUrlError::InvalidSteamID("765611979602879309999".into())),
        );
    }
}
