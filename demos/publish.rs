//! Publish a single article
//!
//! Run with: cargo run --example publish

use std::sync::Arc;

use chrono::Utc;
use onefootball_network::{ClientConfig, Language, NewPost, OnefootballClient, RetryConfig};
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Credentials from ONEFOOTBALL_LOGIN / ONEFOOTBALL_PASSWORD,
    // endpoint override from ONEFOOTBALL_BASE_URL
    let mut config = ClientConfig::from_env()?;
    config.retry = RetryConfig::with_max_retries(3);

    println!("Logging in to {}...", config.base_url);
    let client = OnefootballClient::login(Arc::new(config)).await?;
    println!("Authenticated!");

    let article = NewPost::new(
        "demo-28961",
        Url::parse("https://example.com/match-report")?,
        Language::En,
        Utc::now(),
        "Match report",
        "<p>Full time: 2-1.</p>",
    );

    let post = client.publish_article(&article).await?;
    println!(
        "Published article {} as platform id {} (synced: {})",
        post.external_id, post.onefootball_id, post.synced
    );

    Ok(())
}
