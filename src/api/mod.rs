mod builder;
mod helpers;
mod response;


pub use builder::SteamUserAPIBuilder;

use helpers::{from_raw_player_summary, attach_persona_names};
use response::{
    GetNewsForAppResponse,
    GetGlobalAchievementPercentagesResponse,
    GetPlayerSummariesResponse,
    GetFriendListResponse,
    GetPlayerAchievementsResponse,
    GetUserStatsForGameResponse,
    GetOwnedGamesResponse,
    GetRecentlyPlayedGamesResponse,
    IsPlayingSharedGameResponse,
    ResolveVanityURLResponse,
};
use std::num::NonZeroUsize;
use crate::{
    SteamID,
    chunk::chunk,
    enums::{Language, Relationship},
    error::Error,
    functions,
    helpers::parses_response,
    request::{GetNewsForAppOptions, GetFriendListOptions, GetOwnedGamesOptions},
    response::{
        AppNews,
        Friend,
        GlobalAchievementPercentage,
        OwnedGames,
        PlayerAchievements,
        PlayerSummary,
        RecentlyPlayedGames,
        UserStats,
        Wishlist,
    },
    steamid::extract_vanity_token,
    types::{AppId, HttpClient},
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// The maximum number of SteamIDs Steam accepts in one player summaries request.
pub const MAX_STEAMIDS_PER_REQUEST: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => panic!("chunk size must be non-zero"),
};

/// Input accepted by [`SteamUserAPI::get_player_summaries`].
///
/// A single [`SteamID`] results in an `Option<PlayerSummary>`. Collections of SteamIDs result in
/// a `Vec<PlayerSummary>`, even when they contain only one SteamID.
pub trait SteamIdQuery {
    /// The result of the query.
    type Output;

    /// The SteamIDs to query.
    fn steamids(&self) -> &[SteamID];

    /// Converts the summaries returned by Steam into the output.
    fn from_summaries(summaries: Vec<PlayerSummary>) -> Self::Output;
}

impl SteamIdQuery for SteamID {
    type Output = Option<PlayerSummary>;

    fn steamids(&self) -> &[SteamID] {
        std::slice::from_ref(self)
    }

    fn from_summaries(summaries: Vec<PlayerSummary>) -> Self::Output {
        summaries.into_iter().next()
    }
}

impl SteamIdQuery for Vec<SteamID> {
    type Output = Vec<PlayerSummary>;

    fn steamids(&self) -> &[SteamID] {
        self
    }

    fn from_summaries(summaries: Vec<PlayerSummary>) -> Self::Output {
        summaries
    }
}

impl SteamIdQuery for &Vec<SteamID> {
    type Output = Vec<PlayerSummary>;

    fn steamids(&self) -> &[SteamID] {
        self
    }

    fn from_summaries(summaries: Vec<PlayerSummary>) -> Self::Output {
        summaries
    }
}

impl SteamIdQuery for &[SteamID] {
    type Output = Vec<PlayerSummary>;

    fn steamids(&self) -> &[SteamID] {
        self
    }

    fn from_summaries(summaries: Vec<PlayerSummary>) -> Self::Output {
        summaries
    }
}

impl<const N: usize> SteamIdQuery for [SteamID; N] {
    type Output = Vec<PlayerSummary>;

    fn steamids(&self) -> &[SteamID] {
        self
    }

    fn from_summaries(summaries: Vec<PlayerSummary>) -> Self::Output {
        summaries
    }
}

impl<const N: usize> SteamIdQuery for &[SteamID; N] {
    type Output = Vec<PlayerSummary>;

    fn steamids(&self) -> &[SteamID] {
        *self
    }

    fn from_summaries(summaries: Vec<PlayerSummary>) -> Self::Output {
        summaries
    }
}

/// Client for the Steam Web API.
///
/// The API key, domain and language are fixed once the client is built.
#[derive(Debug, Clone)]
pub struct SteamUserAPI {
    pub(crate) client: HttpClient,
    pub(crate) api_key: String,
    pub(crate) domain: String,
    pub(crate) language: Language,
}

impl SteamUserAPI {
    /// The default domain for requests.
    pub const DOMAIN: &'static str = "https://api.steampowered.com";

    /// Creates a new [`SteamUserAPI`] with the default configuration.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::builder(api_key).build()
    }

    /// Creates a builder for configuring a [`SteamUserAPI`].
    pub fn builder(api_key: String) -> SteamUserAPIBuilder {
        SteamUserAPIBuilder::new(api_key)
    }

    /// The API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The domain requests are sent to.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The language for API responses.
    pub fn language(&self) -> Language {
        self.language
    }

    fn get_api_url(
        &self,
        interface: &str,
        method: &str,
        version: usize,
    ) -> String {
        format!("{}/{}/{}/v{}", self.domain, interface, method, version)
    }

    async fn get<Q, D>(
        &self,
        uri: String,
        query: &Q,
    ) -> Result<D, Error>
    where
        Q: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        log::debug!("GET {uri}");

        let response = self.client.get(&uri)
            .query(query)
            .send()
            .await?;

        parses_response(response).await
    }

    /// Gets the latest news for an app.
    pub async fn get_news_for_app(
        &self,
        appid: AppId,
        options: &GetNewsForAppOptions,
    ) -> Result<AppNews, Error> {
        #[derive(Serialize)]
        struct Query {
            appid: AppId,
            count: u32,
            maxlength: u32,
        }

        let uri = self.get_api_url("ISteamNews", "GetNewsForApp", 2);
        let body: GetNewsForAppResponse = self.get(uri, &Query {
            appid,
            count: options.count,
            maxlength: options.max_length,
        }).await?;

        Ok(body.appnews)
    }

    /// Gets the percentage of players who have unlocked each achievement for a game.
    pub async fn get_global_achievement_percentages(
        &self,
        gameid: AppId,
    ) -> Result<Vec<GlobalAchievementPercentage>, Error> {
        #[derive(Serialize)]
        struct Query {
            gameid: AppId,
        }

        let uri = self.get_api_url("ISteamUserStats", "GetGlobalAchievementPercentagesForApp", 2);
        let body: GetGlobalAchievementPercentagesResponse = self.get(uri, &Query {
            gameid,
        }).await?;

        Ok(body.achievementpercentages.achievements)
    }

    /// Gets player summaries.
    ///
    /// Accepts a single [`SteamID`], which results in an `Option<PlayerSummary>`, or a
    /// collection of SteamIDs, which results in a `Vec<PlayerSummary>`. Collections are
    /// requested in chunks of 100, one after another, and the results are kept in request order.
    pub async fn get_player_summaries<T>(
        &self,
        steamids: T,
    ) -> Result<T::Output, Error>
    where
        T: SteamIdQuery,
    {
        let mut summaries = Vec::with_capacity(steamids.steamids().len());

        for steamids in chunk(steamids.steamids(), MAX_STEAMIDS_PER_REQUEST) {
            let mut chunk_summaries = self.get_player_summaries_chunk(steamids).await?;

            summaries.append(&mut chunk_summaries);
        }

        Ok(T::from_summaries(summaries))
    }

    async fn get_player_summaries_chunk(
        &self,
        steamids: &[SteamID],
    ) -> Result<Vec<PlayerSummary>, Error> {
        #[derive(Serialize)]
        struct Query<'a> {
            key: &'a str,
            steamids: String,
        }

        let steamids = steamids
            .iter()
            .map(|steamid| u64::from(*steamid).to_string())
            .collect::<Vec<_>>()
            .join(",");
        let uri = self.get_api_url("ISteamUser", "GetPlayerSummaries", 2);
        let body: GetPlayerSummariesResponse = self.get(uri, &Query {
            key: &self.api_key,
            steamids,
        }).await?;
        let summaries = body.response.players
            .into_iter()
            .map(from_raw_player_summary)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(summaries)
    }

    /// Gets a user's friend list. The user's profile must be public.
    ///
    /// When `include_persona_names` is set, the persona names of the friends are filled in
    /// using an additional player summaries request. If that request fails the friends are
    /// returned without persona names.
    pub async fn get_friend_list(
        &self,
        steamid: SteamID,
        options: &GetFriendListOptions,
    ) -> Result<Vec<Friend>, Error> {
        #[derive(Serialize)]
        struct Query<'a> {
            key: &'a str,
            steamid: u64,
            relationship: Relationship,
        }

        let uri = self.get_api_url("ISteamUser", "GetFriendList", 1);
        let body: GetFriendListResponse = self.get(uri, &Query {
            key: &self.api_key,
            steamid: u64::from(steamid),
            relationship: options.relationship,
        }).await?;
        let mut friends = body.friendslist.friends;

        if options.include_persona_names && !friends.is_empty() {
            let steamids = friends
                .iter()
                .map(|friend| friend.steamid)
                .collect::<Vec<_>>();
            match self.get_player_summaries(steamids).await {
                Ok(summaries) => attach_persona_names(&mut friends, &summaries),
                Err(error) => log::warn!("Could not get persona names for friends: {error}"),
            }
        }

        Ok(friends)
    }

    /// Gets a user's achievements for a game, localized in the client's language.
    pub async fn get_player_achievements(
        &self,
        steamid: SteamID,
        appid: AppId,
    ) -> Result<PlayerAchievements, Error> {
        #[derive(Serialize)]
        struct Query<'a> {
            key: &'a str,
            steamid: u64,
            appid: AppId,
            l: &'a str,
        }

        let uri = self.get_api_url("ISteamUserStats", "GetPlayerAchievements", 1);
        let body: GetPlayerAchievementsResponse = self.get(uri, &Query {
            key: &self.api_key,
            steamid: u64::from(steamid),
            appid,
            l: self.language.code(),
        }).await?;

        Ok(body.playerstats)
    }

    /// Gets a user's stats for a game, localized in the client's language.
    pub async fn get_user_stats_for_game(
        &self,
        steamid: SteamID,
        appid: AppId,
    ) -> Result<UserStats, Error> {
        #[derive(Serialize)]
        struct Query<'a> {
            key: &'a str,
            steamid: u64,
            appid: AppId,
            l: &'a str,
        }

        let uri = self.get_api_url("ISteamUserStats", "GetUserStatsForGame", 2);
        let body: GetUserStatsForGameResponse = self.get(uri, &Query {
            key: &self.api_key,
            steamid: u64::from(steamid),
            appid,
            l: self.language.code(),
        }).await?;

        Ok(body.playerstats)
    }

    /// Gets the games a user owns. A private profile results in no games.
    pub async fn get_owned_games(
        &self,
        steamid: SteamID,
        options: &GetOwnedGamesOptions,
    ) -> Result<OwnedGames, Error> {
        #[derive(Serialize)]
        struct Query<'a> {
            key: &'a str,
            steamid: u64,
            include_appinfo: bool,
            include_played_free_games: bool,
        }

        let uri = self.get_api_url("IPlayerService", "GetOwnedGames", 1);
        let body: GetOwnedGamesResponse = self.get(uri, &Query {
            key: &self.api_key,
            steamid: u64::from(steamid),
            include_appinfo: options.include_app_info,
            include_played_free_games: options.include_played_free_games,
        }).await?;

        Ok(body.response)
    }

    /// Gets the games a user has played in the last two weeks. `count` limits the number of
    /// games returned.
    pub async fn get_recently_played_games(
        &self,
        steamid: SteamID,
        count: Option<u32>,
    ) -> Result<RecentlyPlayedGames, Error> {
        #[derive(Serialize)]
        struct Query<'a> {
            key: &'a str,
            steamid: u64,
            #[serde(skip_serializing_if = "Option::is_none")]
            count: Option<u32>,
        }

        let uri = self.get_api_url("IPlayerService", "GetRecentlyPlayedGames", 1);
        let body: GetRecentlyPlayedGamesResponse = self.get(uri, &Query {
            key: &self.api_key,
            steamid: u64::from(steamid),
            count,
        }).await?;

        Ok(body.response)
    }

    /// Checks whether a user is playing a game through family sharing. Returns the SteamID of
    /// the lender, or `None` if the user owns the game or is not playing it.
    pub async fn is_playing_shared_game(
        &self,
        steamid: SteamID,
        appid_playing: AppId,
    ) -> Result<Option<SteamID>, Error> {
        #[derive(Serialize)]
        struct Query<'a> {
            key: &'a str,
            steamid: u64,
            appid_playing: AppId,
        }

        let uri = self.get_api_url("IPlayerService", "IsPlayingSharedGame", 1);
        let body: IsPlayingSharedGameResponse = self.get(uri, &Query {
            key: &self.api_key,
            steamid: u64::from(steamid),
            appid_playing,
        }).await?;

        Ok(body.response.lender_steamid)
    }

    /// Resolves a vanity profile URL such as `https://steamcommunity.com/id/gabelogannewell` to
    /// a SteamID. Returns `None` if no user has the vanity name.
    pub async fn resolve_vanity_url(
        &self,
        url: &str,
    ) -> Result<Option<SteamID>, Error> {
        let vanity_name = extract_vanity_token(url)?;

        self.resolve_vanity_name(vanity_name).await
    }

    /// Resolves a vanity name such as `gabelogannewell` to a SteamID. Returns `None` if no user
    /// has the vanity name.
    pub async fn resolve_vanity_name(
        &self,
        vanity_name: &str,
    ) -> Result<Option<SteamID>, Error> {
        #[derive(Serialize)]
        struct Query<'a> {
            key: &'a str,
            vanityurl: &'a str,
        }

        let uri = self.get_api_url("ISteamUser", "ResolveVanityURL", 1);
        let body: ResolveVanityURLResponse = self.get(uri, &Query {
            key: &self.api_key,
            vanityurl: vanity_name,
        }).await?;

        if body.response.success != 1 {
            log::debug!(
                "Vanity name {vanity_name} not resolved: {}",
                body.response.message.as_deref().unwrap_or("no message"),
            );
            return Ok(None);
        }

        Ok(body.response.steamid.map(SteamID::from))
    }

    /// Gets a wishlist from a wishlist page URL using this client.
    pub async fn get_wishlist(
        &self,
        url: &str,
    ) -> Result<Wishlist, Error> {
        functions::get_wishlist(&self.client, url).await
    }
}
