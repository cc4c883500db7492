use crate::types::{AppId, ServerTime};
use serde::{Serialize, Deserialize};
use chrono::serde::ts_seconds;

/// News for an app.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AppNews {
    /// The app ID.
    pub appid: AppId,
    /// The news items, newest first.
    #[serde(default)]
    #[serde(rename = "newsitems")]
    pub items: Vec<NewsItem>,
}

/// A news item.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewsItem {
    /// The ID of the news item.
    pub gid: String,
    /// The title.
    pub title: String,
    /// The URL to the full item.
    pub url: String,
    /// Whether the URL points outside of Steam.
    #[serde(default)]
    pub is_external_url: bool,
    /// The author.
    #[serde(default)]
    pub author: String,
    /// The contents, truncated to the requested maximum length.
    #[serde(default)]
    pub contents: String,
    /// The label of the feed, e.g. `Community Announcements`.
    #[serde(default)]
    #[serde(rename = "feedlabel")]
    pub feed_label: String,
    /// When the item was published.
    #[serde(with = "ts_seconds")]
    pub date: ServerTime,
    /// The name of the feed.
    #[serde(default)]
    #[serde(rename = "feedname")]
    pub feed_name: String,
    /// Tags on the item.
    #[serde(default)]
    pub tags: Vec<String>,
}
