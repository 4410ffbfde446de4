//! Walks the location collection one page at a time, the way a scrolling
//! list view would.
//!
//! Run with: `cargo run --example browse_pages`

use rickmorty::{Client, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("rickmorty=debug,browse_pages=info")
        .init();

    let client = Client::new()?;
    let mut pager = client.location().pager();

    // Pretend the user keeps scrolling to the last visible row.
    let mut visible = None;
    while pager.can_load_more() {
        let page = pager.next_page();
        let batch = pager.load_more_if_needed(visible).await?;
        println!("page {:>2}: {} locations", page, batch.len());
        if let Some(last) = batch.last() {
            println!("         last: {} ({})", last.name, last.dimension);
        }
        visible = pager.items().len().checked_sub(1);
    }

    println!("Loaded {} locations", pager.items().len());
    Ok(())
}
