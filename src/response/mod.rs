//! Models for responses.

mod achievements;
mod friend;
mod games;
mod news;
mod player_summary;
mod user_stats;
mod wishlist;

pub use achievements::{GlobalAchievementPercentage, PlayerAchievement, PlayerAchievements};
pub use friend::Friend;
pub use games::{OwnedGame, OwnedGames, RecentlyPlayedGame, RecentlyPlayedGames};
pub use news::{AppNews, NewsItem};
pub use player_summary::{PlayerDetails, PlayerSummary};
pub use user_stats::{UserStat, UserStatAchievement, UserStats};
pub use wishlist::{Pricing, SaleElement, Wishlist, WishlistEntry};
