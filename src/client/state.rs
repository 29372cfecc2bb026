//! Authentication state for the client

/// Client authentication state
///
/// Every article operation requires a bearer token obtained from
/// `/v1/login`; operations attempted before that fail locally.
#[derive(Debug)]
pub(super) enum AuthState {
    /// Constructed, no access token yet
    Ready,
    /// Access token obtained and attached to every request
    Authenticated {
        /// Bearer token from the login response
        access_token: String,
    },
}
