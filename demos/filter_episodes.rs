//! Filters episodes by code and follows cross-references to characters.
//!
//! Run with: `cargo run --example filter_episodes`

use rickmorty::{Client, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("rickmorty=info,filter_episodes=info")
        .init();

    let client = Client::new()?;
    let episodes = client.episode();

    println!("=== Season 2 ===");
    let filter = episodes.create_filter(None, Some("S02"));
    println!("Query: {}", filter.query());
    let season_two = episodes.get_by_filter(&filter).await?;
    for episode in &season_two {
        println!("{}  {:<40} {}", episode.episode, episode.name, episode.air_date);
    }
    println!();

    println!("=== Cast of the pilot ===");
    let pilot = episodes.get_by_id(1).await?;
    for url in pilot.characters.iter().take(5) {
        match client.character().get_by_url(url).await {
            Ok(character) => println!("  {} ({})", character.name, character.status),
            Err(e) => eprintln!("  could not load {}: {}", url, e),
        }
    }
    println!();

    println!("=== Error handling ===");
    match episodes.get_by_id(9999).await {
        Ok(episode) => println!("Unexpectedly found {}", episode.name),
        Err(Error::Http { status, message, .. }) => {
            println!("HTTP {}: {}", status, message);
        }
        Err(e) => println!("Other error: {}", e),
    }

    Ok(())
}
