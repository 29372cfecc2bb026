//! Local validation of article payloads
//!
//! Runs before a request is serialized so malformed payloads fail without a
//! network round trip. URL, language, and timestamp well-formedness is
//! already guaranteed by the field types; these checks cover the constraints
//! the type system cannot express.

use chrono::Utc;

use crate::error::{OnefootballError, Result};
use crate::models::{NewPost, UpdatePost};

/// Configuration options for payload validation
///
/// # Examples
///
/// ```
/// use onefootball_network::ValidationConfig;
///
/// // Strict validation (default)
/// let strict = ValidationConfig::strict();
///
/// // Lenient validation (allows scheduling posts in the future)
/// let lenient = ValidationConfig::lenient();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// If true, accept `published` timestamps in the future.
    /// If false, a future timestamp is only accepted on drafts.
    pub allow_future_published: bool,

    /// Maximum HTML body size in bytes.
    /// If None, no size limit is applied locally.
    pub max_content_bytes: Option<usize>,
}

impl ValidationConfig {
    /// Creates a strict validation configuration
    ///
    /// - Future publication times rejected (except on drafts)
    /// - No content size limit
    pub fn strict() -> Self {
        Self {
            allow_future_published: false,
            max_content_bytes: None,
        }
    }

    /// Creates a lenient validation configuration
    ///
    /// - Future publication times allowed
    /// - No content size limit
    pub fn lenient() -> Self {
        Self {
            allow_future_published: true,
            max_content_bytes: None,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::strict()
    }
}

/// Validates a partner-assigned external ID
///
/// External IDs key every operation on an article and appear in endpoint
/// paths, so they must be non-empty and must not contain whitespace,
/// control characters, or URL delimiters.
///
/// # Examples
///
/// ```
/// use onefootball_network::validation::validate_external_id;
///
/// assert!(validate_external_id("28961").is_ok());
/// assert!(validate_external_id("match-report-2020-08-10").is_ok());
/// assert!(validate_external_id("").is_err());
/// assert!(validate_external_id("id with spaces").is_err());
/// assert!(validate_external_id("a/b").is_err());
/// ```
pub fn validate_external_id(external_id: &str) -> Result<()> {
    if external_id.is_empty() {
        return Err(OnefootballError::Validation(
            "external_id cannot be empty".to_string(),
        ));
    }

    for ch in external_id.chars() {
        if ch.is_whitespace() || ch.is_control() {
            return Err(OnefootballError::Validation(
                "external_id cannot contain whitespace or control characters".to_string(),
            ));
        }
        if matches!(ch, '/' | '?' | '#' | '%') {
            return Err(OnefootballError::Validation(format!(
                "external_id cannot contain the URL delimiter '{ch}'"
            )));
        }
    }

    Ok(())
}

/// Validates an article title (non-empty after trimming)
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(OnefootballError::Validation(
            "title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates an article HTML body against the configured size limit
pub fn validate_content(content: &str, config: &ValidationConfig) -> Result<()> {
    if content.trim().is_empty() {
        return Err(OnefootballError::Validation(
            "content cannot be empty".to_string(),
        ));
    }
    if let Some(max) = config.max_content_bytes {
        if content.len() > max {
            return Err(OnefootballError::Validation(format!(
                "content exceeds {max} bytes"
            )));
        }
    }
    Ok(())
}

fn validate_image_dimensions(width: Option<u32>, height: Option<u32>) -> Result<()> {
    if width == Some(0) || height == Some(0) {
        return Err(OnefootballError::Validation(
            "image dimensions must be non-zero".to_string(),
        ));
    }
    Ok(())
}

/// Validates a complete article payload before publishing
///
/// # Errors
///
/// Returns [`OnefootballError::Validation`] if:
/// - `external_id`, `title`, or `content` violates its field rules
/// - `published` is in the future on a non-draft post (unless the config
///   allows future publication times)
/// - image dimensions are present but zero
pub fn validate_new_post(post: &NewPost, config: &ValidationConfig) -> Result<()> {
    validate_external_id(&post.external_id)?;
    validate_title(&post.title)?;
    validate_content(&post.content, config)?;
    validate_image_dimensions(post.image_width, post.image_height)?;

    let is_draft = post.draft.unwrap_or(false);
    if !config.allow_future_published && !is_draft && post.published > Utc::now() {
        return Err(OnefootballError::Validation(
            "published timestamp is in the future".to_string(),
        ));
    }

    Ok(())
}

/// Validates a partial update payload
///
/// # Errors
///
/// Returns [`OnefootballError::Validation`] if:
/// - no field is set (the update would be a no-op)
/// - a set field violates the rules of [`validate_new_post`]
pub fn validate_update(update: &UpdatePost, config: &ValidationConfig) -> Result<()> {
    let has_field = update.source_url.is_some()
        || update.published.is_some()
        || update.modified.is_some()
        || update.title.is_some()
        || update.content.is_some()
        || update.image_url.is_some()
        || update.image_width.is_some()
        || update.image_height.is_some()
        || update.breaking_news.is_some()
        || update.draft.is_some();
    if !has_field {
        return Err(OnefootballError::Validation(
            "update does not set any field".to_string(),
        ));
    }

    if let Some(title) = &update.title {
        validate_title(title)?;
    }
    if let Some(content) = &update.content {
        validate_content(content, config)?;
    }
    validate_image_dimensions(update.image_width, update.image_height)?;

    if let Some(published) = update.published {
        let stays_draft = update.draft.unwrap_or(false);
        if !config.allow_future_published && !stays_draft && published > Utc::now() {
            return Err(OnefootballError::Validation(
                "published timestamp is in the future".to_string(),
            ));
        }
    }

    Ok(())
}
