//! Error types.

use reqwest::StatusCode;

/// Any error returned by the client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A JSON endpoint responded with a status other than `200 OK`.
    #[error("Error {}", .0)]
    Http(StatusCode),
    /// The request could not be sent or the response could not be read. Timeouts are reported
    /// here.
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    /// An error from middleware attached to the client.
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    /// The wishlist page could not be fetched.
    #[error("Error fetching wishlist: {}", .0)]
    Fetch(#[from] FetchError),
    /// A URL did not match the expected pattern.
    #[error("{}", .0)]
    Url(#[from] ParseUrlError),
    /// A response contained a value outside of its known range.
    #[error("Error decoding response: {}", .0)]
    Decode(#[from] DecodeError),
    /// The response body was not the expected JSON.
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    /// The HTML document could not be parsed.
    #[error("Error parsing HTML document: {}", .0)]
    ParseHtml(#[from] ParseHtmlError),
}

impl Error {
    /// Whether this error came from the remote end, either as a bad status or a transport
    /// failure (including timeouts).
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Reqwest(_) | Self::ReqwestMiddleware(_)
        )
    }

    /// The status code of the response, if the error was caused by one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(status) => Some(*status),
            Self::Fetch(FetchError::Http(status)) => Some(*status),
            Self::Reqwest(error) => error.status(),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// An error fetching the wishlist page.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// The page responded with a status other than `200 OK`.
    #[error("Error {}", .0)]
    Http(StatusCode),
    /// The request could not be sent or the page could not be read.
    #[error("{}", .0)]
    Reqwest(#[from] reqwest::Error),
    /// An error from middleware attached to the client.
    #[error("{}", .0)]
    ReqwestMiddleware(anyhow::Error),
}

impl From<reqwest_middleware::Error> for FetchError {
    fn from(error: reqwest_middleware::Error) -> FetchError {
        match error {
            reqwest_middleware::Error::Reqwest(e) => FetchError::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => FetchError::ReqwestMiddleware(e),
        }
    }
}

/// A URL which did not match an expected pattern.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseUrlError {
    /// The URL does not contain a vanity name, e.g. `https://steamcommunity.com/id/gabelogannewell`.
    #[error("No vanity name in URL: {}", .0)]
    NoVanityToken(String),
    /// The URL does not contain a profile SteamID, e.g. `https://steamcommunity.com/profiles/76561197960287930`.
    #[error("No profile SteamID in URL: {}", .0)]
    NoProfileSteamID(String),
    /// The URL does not contain an OpenID SteamID, e.g. `https://steamcommunity.com/openid/id/76561197960287930`.
    #[error("No OpenID SteamID in URL: {}", .0)]
    NoOpenIdSteamID(String),
    /// The digits in the URL do not fit a 64-bit SteamID.
    #[error("Invalid SteamID: {}", .0)]
    InvalidSteamID(String),
    /// The string is not a URL.
    #[error("Invalid URL: {}", .0)]
    Url(#[from] url::ParseError),
}

/// A value in a response which could not be decoded.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError {
    /// The persona state is not one of the known states.
    #[error("Unknown persona state {}", .0)]
    UnknownPersonaState(i64),
}

/// An error parsing an HTML document.
#[derive(thiserror::Error, Debug)]
pub enum ParseHtmlError {
    /// A selector failed to parse.
    #[error("Invalid selector: {}", .0)]
    ParseSelector(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_is_remote() {
        let error = Error::Http(StatusCode::INTERNAL_SERVER_ERROR);

        assert!(error.is_remote());
        assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn decode_error_is_not_remote() {
        let error = Error::from(DecodeError::UnknownPersonaState(9));

        assert!(!error.is_remote());
        assert_eq!(error.to_string(), "Error decoding response: Unknown persona state 9");
    }
}
