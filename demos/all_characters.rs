//! Fetches every character concurrently and prints a short roster.
//!
//! This example shows how to:
//! - Create a client with default configuration
//! - Fetch a whole collection with `get_all`
//! - Handle errors by logging them and keeping the previous state
//!
//! Run with: `cargo run --example all_characters`

use rickmorty::{Character, Client, Error};
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("rickmorty=debug,all_characters=info")
        .init();

    let client = Client::new()?;

    let mut characters: Vec<Character> = Vec::new();

    let start = Instant::now();
    match client.character().get_all().await {
        Ok(all) => characters = all,
        Err(e) => eprintln!("Error fetching characters: {}", e),
    }

    println!("=== Characters ({} in {:?}) ===", characters.len(), start.elapsed());
    for character in characters.iter().take(20) {
        println!("{:>4}  {:<30} {}", character.id, character.name, character.species);
    }
    if characters.len() > 20 {
        println!("  ... and {} more", characters.len() - 20);
    }

    Ok(())
}
