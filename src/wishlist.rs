use crate::error::ParseHtmlError;
use crate::response::{Pricing, SaleElement, Wishlist, WishlistEntry};
use scraper::{ElementRef, Html, Selector};

struct Selectors {
    row: Selector,
    name: Selector,
    image: Selector,
    rank: Selector,
    price: Selector,
    original_price: Selector,
    final_price: Selector,
    pct_off: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ParseHtmlError> {
        Ok(Self {
            row: parse_selector(".wishlistRow")?,
            name: parse_selector("h4")?,
            image: parse_selector("img")?,
            rank: parse_selector(".wishlist_rank_ro")?,
            price: parse_selector("div.price")?,
            original_price: parse_selector("div.discount_original_price")?,
            final_price: parse_selector("div.discount_final_price")?,
            pct_off: parse_selector("div.discount_pct")?,
        })
    }

    fn sale_element(&self, element: SaleElement) -> &Selector {
        match element {
            SaleElement::OriginalPrice => &self.original_price,
            SaleElement::FinalPrice => &self.final_price,
            SaleElement::Percent => &self.pct_off,
        }
    }
}

fn parse_selector(selectors: &'static str) -> Result<Selector, ParseHtmlError> {
    Selector::parse(selectors)
        .map_err(|_error| ParseHtmlError::ParseSelector(selectors))
}

/// Trimmed text of the first element matching `selector`.
fn select_text(
    row: ElementRef,
    selector: &Selector,
) -> Option<String> {
    row.select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

fn parse_pricing(
    row: ElementRef,
    selectors: &Selectors,
) -> Pricing {
    if let Some(price) = select_text(row, &selectors.price) {
        return Pricing::Regular {
            price,
        };
    }

    let sale_text = |element: SaleElement| {
        select_text(row, selectors.sale_element(element)).ok_or(element)
    };
    let sale = || -> Result<Pricing, SaleElement> {
        Ok(Pricing::Sale {
            original_price: sale_text(SaleElement::OriginalPrice)?,
            discount_price: sale_text(SaleElement::FinalPrice)?,
            pct_off: sale_text(SaleElement::Percent)?,
        })
    };

    sale().unwrap_or_else(|missing| Pricing::Unavailable {
        missing,
    })
}

fn parse_row(
    row: ElementRef,
    selectors: &Selectors,
) -> WishlistEntry {
    let appid = row.value().attr("id")
        .and_then(|id| id.strip_prefix("game_"))
        .and_then(|appid| appid.parse().ok());
    let name = select_text(row, &selectors.name);
    let image_url = row.select(&selectors.image)
        .next()
        .and_then(|element| element.value().attr("src"))
        .map(String::from);
    let rank = select_text(row, &selectors.rank)
        .and_then(|rank| rank.parse().ok());
    let pricing = parse_pricing(row, selectors);

    if appid.is_none() || name.is_none() {
        log::warn!(
            "Wishlist row {} is missing its app ID or name",
            row.value().attr("id").unwrap_or("without id"),
        );
    }

    if let Pricing::Unavailable { missing } = &pricing {
        log::warn!("Wishlist row {appid:?} has no price: missing .{missing}");
    }

    WishlistEntry {
        appid,
        name,
        image_url,
        rank,
        pricing,
    }
}

/// Parses the games from the HTML of a wishlist page.
///
/// Rows which are missing fields are kept with those fields set to `None`. A row without a
/// price or a complete discount block is priced as [`Pricing::Unavailable`].
pub fn parse_wishlist(html: &str) -> Result<Wishlist, ParseHtmlError> {
    let selectors = Selectors::new()?;
    let document = Html::parse_document(html);
    let games = document.select(&selectors.row)
        .map(|row| parse_row(row, &selectors))
        .collect::<Vec<_>>();
    let on_sale = games
        .iter()
        .filter(|game| game.is_on_sale())
        .count();

    Ok(Wishlist {
        count: games.len(),
        on_sale,
        games,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wishlist() -> Wishlist {
        parse_wishlist(include_str!("fixtures/wishlist.html")).unwrap()
    }

    #[test]
    fn counts_games_and_sales() {
        let wishlist = wishlist();

        assert_eq!(wishlist.count, 5);
        assert_eq!(wishlist.games.len(), 5);
        assert_eq!(wishlist.on_sale, 1);
    }

    #[test]
    fn parses_regular_price() {
        let game = &wishlist().games[0];

        assert_eq!(game.appid, Some(440));
        assert_eq!(game.name.as_deref(), Some("Team Fortress 2"));
        assert_eq!(game.image_url.as_deref(), Some("https://cdn.akamai.steamstatic.com/steam/apps/440/capsule_184x69.jpg"));
        assert_eq!(game.rank, Some(1));
        assert_eq!(game.pricing, Pricing::Regular { price: "$9.99".into() });
        assert_eq!(game.discount(), "0");
        assert_eq!(game.pct_off(), "0");
    }

    #[test]
    fn parses_sale_price() {
        let game = &wishlist().games[1];

        assert!(game.is_on_sale());
        assert_eq!(game.price(), "$19.99");
        assert_eq!(game.discount(), "$4.99");
        assert_eq!(game.pct_off(), "-75%");
    }

    #[test]
    fn incomplete_discount_is_unavailable() {
        let game = &wishlist().games[2];

        assert_eq!(game.pricing, Pricing::Unavailable { missing: SaleElement::Percent });
        assert_eq!(game.price(), "N/A");
        assert!(!game.is_on_sale());
    }

    #[test]
    fn row_without_price_is_unavailable() {
        let game = &wishlist().games[3];

        assert_eq!(game.name.as_deref(), Some("Coming Soon Game"));
        assert_eq!(game.pricing, Pricing::Unavailable { missing: SaleElement::OriginalPrice });
        assert_eq!(game.discount(), "0");
        assert_eq!(game.pct_off(), "0");
    }

    #[test]
    fn broken_row_is_kept() {
        let game = &wishlist().games[4];

        assert!(game.appid.is_none());
        assert!(game.name.is_none());
        assert!(game.image_url.is_none());
        assert!(game.rank.is_none());
        assert_eq!(game.price(), "Free");
    }

    #[test]
    fn page_without_rows_is_empty() {
        let wishlist = parse_wishlist("<html><body><p>This profile is private.</p></body></html>").unwrap();

        assert_eq!(wishlist, Wishlist::default());
    }
}
