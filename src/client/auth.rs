//! Partner authentication against `/v1/login`

use tracing::debug;

use super::OnefootballClient;
use super::state::AuthState;
use crate::error::{OnefootballError, Result};
use crate::models::{LoginRequest, LoginResponse};
use crate::retry;

/// Login endpoint path
const LOGIN_PATH: &str = "/v1/login";

impl OnefootballClient {
    /// Exchange the configured credentials for an access token
    ///
    /// Sends `POST /v1/login` with the login and password from the client
    /// configuration. On success the returned bearer token is attached to
    /// every subsequent request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`OnefootballError::Auth`] - Already authenticated, or credentials
    ///   rejected by the server
    /// - [`OnefootballError::Network`] - Transport failure
    /// - [`OnefootballError::Timeout`] - Server did not respond in time
    pub async fn authenticate(&mut self) -> Result<()> {
        debug!("authenticating as {}", self.config.login);

        if matches!(self.state, AuthState::Authenticated { .. }) {
            return Err(OnefootballError::Auth("already authenticated".to_string()));
        }

        let transport = &self.transport;
        let config = &self.config;
        let login: LoginResponse = retry::run(&config.retry, "authenticate", || async move {
            let body = LoginRequest {
                login: &config.login,
                password: &config.password,
            };
            let response = transport.post_json(LOGIN_PATH, None, &body).await?;
            if response.is_success() {
                response.json()
            } else {
                Err(response.into_error(&config.login))
            }
        })
        .await?;

        self.state = AuthState::Authenticated {
            access_token: login.access_token,
        };
        debug!("authentication successful");
        Ok(())
    }
}
