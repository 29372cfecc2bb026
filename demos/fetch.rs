//! Fetch and update an existing article
//!
//! Run with: cargo run --example fetch -- <external_id>

use std::sync::Arc;

use onefootball_network::{ClientConfig, OnefootballClient, UpdatePost};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let external_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demo-28961".to_string());

    let config = ClientConfig::from_env()?;
    let client = OnefootballClient::login(Arc::new(config)).await?;

    let post = client.get_article(&external_id).await?;
    println!(
        "{}: \"{}\" ({}, published {})",
        post.onefootball_id, post.title, post.language, post.published
    );

    // Flag it as breaking news
    let update = UpdatePost {
        breaking_news: Some(true),
        ..UpdatePost::default()
    };
    let post = client.update_article(&external_id, &update).await?;
    println!("breaking_news is now {:?}", post.breaking_news);

    Ok(())
}
