//! Request and response models for the posts API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::OnefootballError;

/// Languages accepted by the OneFootball Network platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Br,
    De,
    En,
    Es,
    Fr,
    Id,
    It,
    Ko,
    Pt,
    Ru,
}

impl Language {
    /// The ISO 639-1 code sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Br => "br",
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Id => "id",
            Language::It => "it",
            Language::Ko => "ko",
            Language::Pt => "pt",
            Language::Ru => "ru",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = OnefootballError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "br" => Ok(Language::Br),
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            "id" => Ok(Language::Id),
            "it" => Ok(Language::It),
            "ko" => Ok(Language::Ko),
            "pt" => Ok(Language::Pt),
            "ru" => Ok(Language::Ru),
            other => Err(OnefootballError::Validation(format!(
                "unsupported language code: {other}"
            ))),
        }
    }
}

/// A new article payload for `publish_article`
///
/// `external_id` is the partner-assigned identifier and must stay stable
/// across publish/update/delete calls referencing the same logical article.
/// Two posts in different languages may share an external ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    /// Partner-assigned stable article identifier
    pub external_id: String,
    /// Canonical URL of the article on the partner's site
    pub source_url: Url,
    /// Article language
    pub language: Language,
    /// Original publication time
    #[serde(with = "timestamp")]
    pub published: DateTime<Utc>,
    /// Last modification time, if the article was edited after publication
    #[serde(
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub modified: Option<DateTime<Utc>>,
    /// Article title
    pub title: String,
    /// Article body as HTML
    pub content: String,
    /// Lead image URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<Url>,
    /// Lead image width in pixels
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_width: Option<u32>,
    /// Lead image height in pixels
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_height: Option<u32>,
    /// Mark the article as breaking news
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub breaking_news: Option<bool>,
    /// Publish as a draft instead of going live
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub draft: Option<bool>,
}

impl NewPost {
    /// Create a post with the required fields; optional fields start unset
    pub fn new(
        external_id: impl Into<String>,
        source_url: Url,
        language: Language,
        published: DateTime<Utc>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            source_url,
            language,
            published,
            modified: None,
            title: title.into(),
            content: content.into(),
            image_url: None,
            image_width: None,
            image_height: None,
            breaking_news: None,
            draft: None,
        }
    }
}

/// A partial update for `update_article`
///
/// Only the fields set here are sent; omitted fields keep their server-side
/// value. The target article is addressed by external ID, passed to
/// `update_article` separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePost {
    /// Replace the canonical source URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_url: Option<Url>,
    /// Replace the publication time
    #[serde(
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub published: Option<DateTime<Utc>>,
    /// Replace the modification time
    #[serde(
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub modified: Option<DateTime<Utc>>,
    /// Replace the title
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    /// Replace the HTML body
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
    /// Replace the lead image URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<Url>,
    /// Replace the lead image width
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_width: Option<u32>,
    /// Replace the lead image height
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_height: Option<u32>,
    /// Set or clear the breaking-news flag
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub breaking_news: Option<bool>,
    /// Set or clear the draft flag
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub draft: Option<bool>,
}

/// An article as returned by the API
///
/// Deserialized from server responses only; `onefootball_id` is the
/// platform-assigned identifier and is authoritative once assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Platform-assigned article identifier (wire field `id`)
    #[serde(rename = "id")]
    pub onefootball_id: u64,
    /// Partner-assigned stable article identifier
    pub external_id: String,
    /// Canonical URL of the article on the partner's site
    pub source_url: Url,
    /// Article language
    pub language: Language,
    /// Original publication time
    #[serde(with = "timestamp")]
    pub published: DateTime<Utc>,
    /// Last modification time
    #[serde(
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub modified: Option<DateTime<Utc>>,
    /// Article title
    pub title: String,
    /// Article body as HTML
    pub content: String,
    /// Lead image URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<Url>,
    /// Lead image width in pixels
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_width: Option<u32>,
    /// Lead image height in pixels
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_height: Option<u32>,
    /// Breaking-news flag
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub breaking_news: Option<bool>,
    /// Draft flag
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub draft: Option<bool>,
    /// Whether the platform has finished syncing the article
    #[serde(default)]
    pub synced: bool,
}

/// Wire envelope for the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsResponse {
    /// Matching articles
    pub posts: Vec<Post>,
}

/// Filter for `list_articles`
///
/// The list endpoint requires exactly one filter; the enum makes passing
/// none or both unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostQuery {
    /// Filter by the partner-assigned external ID
    ExternalId(String),
    /// Filter by feed item IDs (comma-separated list)
    FeedItemId(String),
}

impl PostQuery {
    pub(crate) fn query_pair(&self) -> (&'static str, &str) {
        match self {
            PostQuery::ExternalId(id) => ("external_id", id),
            PostQuery::FeedItemId(id) => ("feed_item_id", id),
        }
    }
}

/// Credentials payload for `/v1/login`
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub login: &'a str,
    pub password: &'a str,
}

/// Token payload returned by `/v1/login`
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub access_token: String,
}

/// Wire format for timestamps: `%Y-%m-%dT%H:%M:%SZ`, always UTC.
///
/// The API rejects fractional seconds and offset notation, so the chrono
/// default RFC 3339 serializer is not usable here. Deserialization accepts
/// any RFC 3339 timestamp.
pub(crate) mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match dt {
                Some(dt) => super::serialize(dt, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Option::<String>::deserialize(deserializer)?;
            value
                .map(|s| {
                    DateTime::parse_from_rfc3339(&s)
                        .map(|dt| dt.with_timezone(&Utc))
                        .map_err(serde::de::Error::custom)
                })
                .transpose()
        }
    }
}
