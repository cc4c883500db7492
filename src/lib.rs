//! Client for the Steam Web API and the Steam community wishlist page.
//!
//! Fetches player summaries, friend lists, achievements, user stats, owned and recently played
//! games, app news and wishlists, and normalizes the responses into typed records.
//!
//! ```no_run
//! use steam_user_api::{SteamUserAPI, SteamID};
//!
//! # async fn run() -> Result<(), steam_user_api::error::Error> {
//! let api = SteamUserAPI::new(String::from("KEY"))?;
//! let steamid = SteamID::from(76561197960287930);
//!
//! if let Some(summary) = api.get_player_summaries(steamid).await? {
//!     println!("{} is {}", summary.persona_name, summary.persona_state);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod api;
mod chunk;
mod functions;
mod helpers;
mod serialize;
mod wishlist;

pub mod enums;
pub mod error;
pub mod request;
pub mod response;
pub mod steamid;
pub mod types;

pub use api::{SteamIdQuery, SteamUserAPI, SteamUserAPIBuilder, MAX_STEAMIDS_PER_REQUEST};
pub use chunk::{chunk, Chunked};
pub use functions::get_wishlist;
pub use steamid::LegacySteamID;
pub use wishlist::parse_wishlist;

/// The SteamID type from [`steamid_ng`].
pub use steamid_ng::SteamID;
