#![doc = include_str!("../README.md")]

mod client;
mod config;
mod error;
mod models;
mod response;
mod retry;
mod transport;
/// Local validation of article payloads
pub mod validation;

pub use client::OnefootballClient;
pub use config::{ClientConfig, DeletePolicy, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{OnefootballError, Result};
pub use models::{Language, NewPost, Post, PostQuery, PostsResponse, UpdatePost};
pub use retry::RetryConfig;
pub use validation::ValidationConfig;
