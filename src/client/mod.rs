//! OneFootball Network client implementation

mod articles;
mod auth;
mod state;

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{OnefootballError, Result};
use crate::transport::HttpTransport;
use state::AuthState;

/// Async OneFootball Network API client
///
/// Each operation is a single stateless round trip; the client keeps no
/// state between calls beyond the access token obtained at login. Article
/// operations take `&self`, so one client can serve concurrent tasks.
///
/// # Example
///
/// ```no_run
/// use onefootball_network::{ClientConfig, OnefootballClient};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig::new("partner", "secret");
/// let client = OnefootballClient::login(Arc::new(config)).await?;
///
/// let post = client.get_article("28961").await?;
/// println!("Synced: {}", post.synced);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
#[must_use]
pub struct OnefootballClient {
    /// HTTP execution layer
    transport: HttpTransport,
    /// Client configuration
    config: Arc<ClientConfig>,
    /// Authentication state
    state: AuthState,
}

impl OnefootballClient {
    /// Create an unauthenticated client
    ///
    /// No network traffic happens here; call [`authenticate`] before any
    /// article operation, or use [`login`] to do both in one step.
    ///
    /// [`authenticate`]: OnefootballClient::authenticate
    /// [`login`]: OnefootballClient::login
    ///
    /// # Errors
    ///
    /// Returns [`OnefootballError::Network`] if the HTTP transport cannot
    /// be constructed.
    pub fn new(config: Arc<ClientConfig>) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(&config)?,
            config,
            state: AuthState::Ready,
        })
    }

    /// Create a client and authenticate in one step
    pub async fn login(config: Arc<ClientConfig>) -> Result<Self> {
        let mut client = Self::new(config)?;
        client.authenticate().await?;
        Ok(client)
    }

    /// Check if the client currently holds an access token
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated { .. })
    }

    /// The bearer token, or an auth error when not logged in
    fn access_token(&self) -> Result<&str> {
        match &self.state {
            AuthState::Authenticated { access_token } => Ok(access_token),
            AuthState::Ready => Err(OnefootballError::Auth(
                "not authenticated; call authenticate() first".to_string(),
            )),
        }
    }
}
