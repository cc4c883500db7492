use steam_user_api::SteamUserAPI;
use owo_colors::OwoColorize;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    
    let url = std::env::var("WISHLIST_URL")?;
    // The wishlist page does not need an API key.
    let api = SteamUserAPI::new(String::new())?;
    let wishlist = api.get_wishlist(&url).await?;
    
    println!("{} games, {} on sale", wishlist.count, wishlist.on_sale.green());
    
    for game in &wishlist.games {
        let name = game.name.as_deref().unwrap_or("Unknown");
        
        if game.is_on_sale() {
            println!("{} {} -> {} ({})", name.bold(), game.price().strikethrough(), game.discount().green(), game.pct_off());
        } else {
            println!("{} {}", name.bold(), game.price());
        }
    }
    
    Ok(())
}
