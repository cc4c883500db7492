use crate::error::Error;
use crate::types::HttpClient;
use std::time::Duration;
use reqwest::{header, StatusCode};
use reqwest_middleware::ClientBuilder;
use serde::de::DeserializeOwned;

pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";

/// Builds the default client. No retry middleware is attached; a failed request is reported
/// as is.
pub fn get_default_middleware(
    user_agent_string: &'static str,
    timeout: Option<Duration>,
) -> Result<HttpClient, reqwest::Error> {
    let mut headers = header::HeaderMap::new();

    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));

    let mut builder = reqwest::ClientBuilder::new()
        .default_headers(headers);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    let client = builder.build()?;

    Ok(ClientBuilder::new(client).build())
}

/// Reads the body of a response, failing on anything other than `200 OK`.
pub async fn check_response(response: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = response.status();

    match status {
        StatusCode::OK => Ok(response.bytes().await?),
        _ => Err(Error::Http(status)),
    }
}

pub async fn parses_response<D>(response: reqwest::Response) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_response(response).await?;

    match serde_json::from_slice::<D>(&body) {
        Ok(body) => Ok(body),
        Err(parse_error) => {
            log::debug!("Unexpected response: {}", String::from_utf8_lossy(&body));
            Err(Error::Parse(parse_error))
        },
    }
}
