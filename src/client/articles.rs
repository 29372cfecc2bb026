//! Article operations: publish, fetch, list, update, delete

use tracing::debug;

use super::OnefootballClient;
use crate::config::DeletePolicy;
use crate::error::{OnefootballError, Result};
use crate::models::{NewPost, Post, PostQuery, PostsResponse, UpdatePost};
use crate::retry;
use crate::validation;

/// Posts collection endpoint
const POSTS_PATH: &str = "/v1/posts";

fn post_path(external_id: &str) -> String {
    format!("{POSTS_PATH}/{external_id}")
}

impl OnefootballClient {
    /// Publish a new article
    ///
    /// The payload is validated locally before anything is sent, so
    /// malformed articles fail without a network round trip. On success the
    /// returned [`Post`] echoes the submitted fields and carries the
    /// platform-assigned `onefootball_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`OnefootballError::Validation`] - Payload rejected locally or by
    ///   the server
    /// - [`OnefootballError::Conflict`] - An article with this external ID
    ///   already exists
    /// - [`OnefootballError::Auth`] - Not authenticated, or token rejected
    /// - [`OnefootballError::RateLimit`] - Publishing quota exceeded
    /// - [`OnefootballError::Network`] - Transport failure
    pub async fn publish_article(&self, article: &NewPost) -> Result<Post> {
        debug!("publishing article {}", article.external_id);

        validation::validate_new_post(article, &self.config.validation)?;
        let token = self.access_token()?;

        let response = retry::run(&self.config.retry, "publish_article", || async move {
            let response = self
                .transport
                .post_json(POSTS_PATH, Some(token), article)
                .await?;
            if response.is_success() {
                Ok(response)
            } else {
                Err(response.into_error(&article.external_id))
            }
        })
        .await?;

        let post: Post = response.json()?;
        debug!(
            "article {} published as {}",
            post.external_id, post.onefootball_id
        );
        Ok(post)
    }

    /// Fetch a single article by external ID
    ///
    /// Two posts in different languages may share an external ID; this
    /// returns the first match. Use [`list_articles`] to see all of them.
    ///
    /// [`list_articles`]: OnefootballClient::list_articles
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`OnefootballError::NotFound`] - No article with this external ID
    /// - [`OnefootballError::Auth`] - Not authenticated, or token rejected
    /// - [`OnefootballError::Network`] - Transport failure
    pub async fn get_article(&self, external_id: &str) -> Result<Post> {
        validation::validate_external_id(external_id)?;

        let posts = self
            .list_articles(&PostQuery::ExternalId(external_id.to_string()))
            .await?;
        posts
            .into_iter()
            .next()
            .ok_or_else(|| OnefootballError::NotFound(external_id.to_string()))
    }

    /// List articles matching a filter
    ///
    /// The list endpoint requires exactly one filter; [`PostQuery`] makes
    /// that structural. An empty result set is not an error here — callers
    /// that expect a specific article should use [`get_article`].
    ///
    /// [`get_article`]: OnefootballClient::get_article
    pub async fn list_articles(&self, query: &PostQuery) -> Result<Vec<Post>> {
        let (key, value) = query.query_pair();
        debug!("listing articles by {}={}", key, value);

        let token = self.access_token()?;
        let response = retry::run(&self.config.retry, "list_articles", || async move {
            let response = self
                .transport
                .get(POSTS_PATH, &[(key, value)], Some(token))
                .await?;
            if response.is_success() {
                Ok(response)
            } else {
                Err(response.into_error(value))
            }
        })
        .await?;

        let posts: PostsResponse = response.json()?;
        Ok(posts.posts)
    }

    /// Partially update an existing article
    ///
    /// Only the fields set on `update` are sent; everything else keeps its
    /// server-side value. Returns the article state after the update.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`OnefootballError::NotFound`] - No article with this external ID
    /// - [`OnefootballError::Validation`] - Empty update, or a set field is
    ///   invalid
    /// - [`OnefootballError::Auth`] - Not authenticated, or token rejected
    /// - [`OnefootballError::Network`] - Transport failure
    pub async fn update_article(&self, external_id: &str, update: &UpdatePost) -> Result<Post> {
        debug!("updating article {}", external_id);

        validation::validate_external_id(external_id)?;
        validation::validate_update(update, &self.config.validation)?;
        let token = self.access_token()?;

        let path = post_path(external_id);
        let path = path.as_str();
        let response = retry::run(&self.config.retry, "update_article", || async move {
            let response = self.transport.patch_json(path, Some(token), update).await?;
            if response.is_success() {
                Ok(response)
            } else {
                Err(response.into_error(external_id))
            }
        })
        .await?;

        response.json()
    }

    /// Delete an article by external ID
    ///
    /// Whether deleting an already-absent article is an error is governed
    /// by [`DeletePolicy`] on the client configuration: `Strict` (default)
    /// surfaces [`OnefootballError::NotFound`], `Idempotent` treats it as
    /// success.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`OnefootballError::NotFound`] - No article with this external ID
    ///   (under `DeletePolicy::Strict`)
    /// - [`OnefootballError::Auth`] - Not authenticated, or token rejected
    /// - [`OnefootballError::Network`] - Transport failure
    pub async fn delete_article(&self, external_id: &str) -> Result<()> {
        debug!("deleting article {}", external_id);

        validation::validate_external_id(external_id)?;
        let token = self.access_token()?;

        let path = post_path(external_id);
        let path = path.as_str();
        let result = retry::run(&self.config.retry, "delete_article", || async move {
            let response = self.transport.delete(path, Some(token)).await?;
            if response.is_success() {
                Ok(())
            } else {
                Err(response.into_error(external_id))
            }
        })
        .await;

        match result {
            Err(OnefootballError::NotFound(_))
                if self.config.delete_policy == DeletePolicy::Idempotent =>
            {
                debug!("article {} already absent", external_id);
                Ok(())
            }
            other => other,
        }
    }
}
