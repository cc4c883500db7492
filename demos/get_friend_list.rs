use steam_user_api::{SteamUserAPI, SteamID, request::GetFriendListOptions};
use owo_colors::OwoColorize;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    
    let api_key = std::env::var("API_KEY")?;
    let api = SteamUserAPI::builder(api_key)
        .timeout(std::time::Duration::from_secs(10))
        .build()?;
    let steamid = match std::env::var("VANITY_URL") {
        Ok(url) => api.resolve_vanity_url(&url).await?
            .ok_or("No user with that vanity URL")?,
        Err(_) => SteamID::from(std::env::var("STEAMID")?.parse::<u64>()?),
    };
    let friends = api.get_friend_list(steamid, &GetFriendListOptions {
        include_persona_names: true,
        ..GetFriendListOptions::default()
    }).await?;
    
    for friend in friends {
        println!(
            "{} {} since {}",
            u64::from(friend.steamid),
            friend.persona_name.as_deref().unwrap_or("?").bold(),
            friend.friend_since.format("%Y-%m-%d"),
        );
    }
    
    Ok(())
}
