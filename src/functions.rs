// Contains exported functions in lib.rs

use crate::{
    error::{Error, FetchError, ParseUrlError},
    response::Wishlist,
    wishlist::parse_wishlist,
};
use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

/// Gets a wishlist from a wishlist page URL, e.g.
/// `https://steamcommunity.com/id/gabelogannewell/wishlist`.
///
/// No API key is needed. Rows on the page which are missing fields are kept with those fields
/// set to `None`.
pub async fn get_wishlist(
    client: &ClientWithMiddleware,
    url: &str,
) -> Result<Wishlist, Error> {
    let url = Url::parse(url)
        .map_err(ParseUrlError::from)?;

    log::debug!("GET {url}");

    let response = client.get(url)
        .send()
        .await
        .map_err(FetchError::from)?;
    let status = response.status();

    if status != StatusCode::OK {
        return Err(FetchError::Http(status).into());
    }

    let text = response.text()
        .await
        .map_err(FetchError::from)?;

    Ok(parse_wishlist(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SteamUserAPI;
    use crate::helpers::{get_default_middleware, USER_AGENT_STRING};
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    async fn setup() -> MockServer {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/id/gabelogannewell/wishlist"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_string(include_str!("fixtures/wishlist.html")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/id/missing/wishlist"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        server
    }

    #[tokio::test]
    async fn gets_wishlist() {
        let server = setup().await;
        let client = get_default_middleware(USER_AGENT_STRING, None).unwrap();
        let url = format!("{}/id/gabelogannewell/wishlist", server.uri());
        let wishlist = get_wishlist(&client, &url).await.unwrap();

        assert_eq!(wishlist.count, 5);
        assert_eq!(wishlist.on_sale, 1);
    }

    #[tokio::test]
    async fn gets_wishlist_through_api() {
        let server = setup().await;
        let api = SteamUserAPI::new("KEY".into()).unwrap();
        let url = format!("{}/id/gabelogannewell/wishlist", server.uri());
        let wishlist = api.get_wishlist(&url).await.unwrap();

        assert_eq!(wishlist.games[0].appid, Some(440));
    }

    #[tokio::test]
    async fn missing_page_is_fetch_error() {
        let server = setup().await;
        let client = get_default_middleware(USER_AGENT_STRING, None).unwrap();
        let url = format!("{}/id/missing/wishlist", server.uri());
        let error = get_wishlist(&client, &url).await.unwrap_err();

        assert!(matches!(error, Error::Fetch(FetchError::Http(_))));
        assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
        assert!(!error.is_remote());
    }

    #[tokio::test]
    async fn invalid_url_is_url_error() {
        let client = get_default_middleware(USER_AGENT_STRING, None).unwrap();
        let error = get_wishlist(&client, "not a url").await.unwrap_err();

        assert!(matches!(error, Error::Url(ParseUrlError::Url(_))));
    }
}
