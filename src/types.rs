//! Types for common values in Steam responses.

/// Uniquely identifies an application on Steam. For example: 440 for Team Fortress 2.
pub type AppId = u32;
/// A time reported by Steam.
pub type ServerTime = chrono::DateTime<chrono::Utc>;
/// A playtime in minutes.
pub type Minutes = u32;

// Types internally used by the crate.
use reqwest_middleware::ClientWithMiddleware;

pub(crate) type HttpClient = ClientWithMiddleware;
