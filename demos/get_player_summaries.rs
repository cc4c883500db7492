use steam_user_api::{SteamUserAPI, SteamID};
use owo_colors::OwoColorize;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    
    let api_key = std::env::var("API_KEY")?;
    let api = SteamUserAPI::new(api_key)?;
    let steamid = get_steamid("STEAMID");
    
    // A single SteamID gives back the summary itself.
    if let Some(summary) = api.get_player_summaries(steamid).await? {
        println!("{} ({}) is {}", summary.persona_name.bold(), summary.legacy_steamid, summary.persona_state.green());
        
        if let Some(real_name) = summary.details.and_then(|details| details.real_name) {
            println!("Real name: {real_name}");
        }
    }
    
    // Collections give back a list, chunked into requests of 100.
    let summaries = api.get_player_summaries(vec![
        steamid,
        SteamID::from(76561197960287930),
    ]).await?;
    
    println!("Got {} summaries", summaries.len());
    
    Ok(())
}

fn get_steamid(key: &str) -> SteamID {
    let sid_str = std::env::var(key)
        .unwrap_or_else(|_| panic!("{key} missing"));
    
    SteamID::from(sid_str.parse::<u64>().unwrap())
}
