use super::SteamUserAPI;
use crate::enums::Language;
use crate::error::Error;
use crate::helpers::{get_default_middleware, USER_AGENT_STRING};
use std::time::Duration;
use reqwest_middleware::ClientWithMiddleware;

/// Builder for constructing a [`SteamUserAPI`].
#[derive(Debug, Clone)]
pub struct SteamUserAPIBuilder {
    /// Your API key from <https://steamcommunity.com/dev/apikey>.
    pub(crate) api_key: String,
    /// The base URL of the Web API.
    pub(crate) domain: String,
    /// The language for API responses.
    pub(crate) language: Language,
    /// Client to use for requests.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// User agent for requests.
    pub(crate) user_agent: &'static str,
    /// Timeout for each request.
    pub(crate) timeout: Option<Duration>,
}

impl SteamUserAPIBuilder {
    /// Creates a new [`SteamUserAPIBuilder`] using the given API key.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            domain: SteamUserAPI::DOMAIN.into(),
            language: Language::default(),
            client: None,
            user_agent: USER_AGENT_STRING,
            timeout: None,
        }
    }

    /// The base URL requests are sent to. Defaults to `https://api.steampowered.com`.
    pub fn domain<T>(mut self, domain: T) -> Self
    where
        T: Into<String>,
    {
        self.domain = domain.into();
        self
    }

    /// The language for API responses. Defaults to English.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// The user agent for requests. Ignored when a client is supplied.
    pub fn user_agent(mut self, user_agent: &'static str) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Timeout for each request. Ignored when a client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Client to use for requests. Useful for attaching your own middleware.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds the [`SteamUserAPI`].
    pub fn build(self) -> Result<SteamUserAPI, Error> {
        let client = match self.client {
            Some(client) => client,
            None => get_default_middleware(self.user_agent, self.timeout)?,
        };
        let domain = self.domain.trim_end_matches('/').to_string();

        Ok(SteamUserAPI {
            client,
            api_key: self.api_key,
            domain,
            language: self.language,
        })
    }
}
