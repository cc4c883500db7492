use crate::types::AppId;
use serde::Serialize;
use strum::Display;

/// Placeholder price for games without a price.
pub const NO_PRICE: &str = "N/A";
/// Placeholder for discount fields on games that are not on sale.
pub const NO_DISCOUNT: &str = "0";

/// A user's wishlist.
#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct Wishlist {
    /// The games, in page order.
    pub games: Vec<WishlistEntry>,
    /// The number of games.
    pub count: usize,
    /// The number of games on sale.
    pub on_sale: usize,
}

/// A game on a wishlist. Fields which could not be read from the row are `None`.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct WishlistEntry {
    /// The game's app ID.
    pub appid: Option<AppId>,
    /// The name of the game.
    pub name: Option<String>,
    /// The URL to the game's capsule image.
    pub image_url: Option<String>,
    /// The position of the game on the wishlist.
    pub rank: Option<u32>,
    /// The price of the game.
    pub pricing: Pricing,
}

impl WishlistEntry {
    /// The price, or the original price when on sale. `N/A` if there is no price.
    pub fn price(&self) -> &str {
        match &self.pricing {
            Pricing::Regular { price } => price,
            Pricing::Sale { original_price, .. } => original_price,
            Pricing::Unavailable { .. } => NO_PRICE,
        }
    }

    /// The discounted price. `0` when not on sale.
    pub fn discount(&self) -> &str {
        match &self.pricing {
            Pricing::Sale { discount_price, .. } => discount_price,
            _ => NO_DISCOUNT,
        }
    }

    /// The discount percentage, e.g. `-75%`. `0` when not on sale.
    pub fn pct_off(&self) -> &str {
        match &self.pricing {
            Pricing::Sale { pct_off, .. } => pct_off,
            _ => NO_DISCOUNT,
        }
    }

    /// Whether the game is on sale.
    pub fn is_on_sale(&self) -> bool {
        matches!(self.pricing, Pricing::Sale { .. })
    }
}

/// How a game is priced on the wishlist page.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Pricing {
    /// The game has a regular price.
    Regular {
        /// The price.
        price: String,
    },
    /// The game is discounted.
    Sale {
        /// The price before the discount.
        original_price: String,
        /// The price after the discount.
        discount_price: String,
        /// The discount percentage.
        pct_off: String,
    },
    /// The row has neither a regular price nor a complete discount block, e.g. unreleased
    /// games.
    Unavailable {
        /// The first discount element that was missing.
        missing: SaleElement,
    },
}

/// An element of the discount block on a wishlist row.
#[derive(Debug, Serialize, Display, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum SaleElement {
    /// `.discount_original_price`
    #[strum(serialize = "discount_original_price")]
    OriginalPrice,
    /// `.discount_final_price`
    #[strum(serialize = "discount_final_price")]
    FinalPrice,
    /// `.discount_pct`
    #[strum(serialize = "discount_pct")]
    Percent,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pricing: Pricing) -> WishlistEntry {
        WishlistEntry {
            appid: Some(440),
            name: Some("Team Fortress 2".into()),
            image_url: None,
            rank: Some(1),
            pricing,
        }
    }

    #[test]
    fn regular_price_has_no_discount() {
        let entry = entry(Pricing::Regular { price: "$9.99".into() });

        assert_eq!(entry.price(), "$9.99");
        assert_eq!(entry.discount(), "0");
        assert_eq!(entry.pct_off(), "0");
        assert!(!entry.is_on_sale());
    }

    #[test]
    fn unavailable_price_uses_placeholders() {
        let entry = entry(Pricing::Unavailable { missing: SaleElement::Percent });

        assert_eq!(entry.price(), "N/A");
        assert_eq!(entry.discount(), "0");
        assert_eq!(entry.pct_off(), "0");
        assert!(!entry.is_on_sale());
        assert_eq!(SaleElement::Percent.to_string(), "discount_pct");
    }
}
