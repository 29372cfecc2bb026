//! Fetching and listing articles

use onefootball_network::{OnefootballError, PostQuery};

use super::support;

#[tokio::test]
async fn test_get_article_returns_published_post() {
    let mock = support::spawn().await;
    let client = mock.client().await;

    let published = client
        .publish_article(&support::sample_post("28961"))
        .await
        .unwrap();

    let fetched = client.get_article("28961").await.unwrap();
    assert_eq!(fetched.onefootball_id, published.onefootball_id);
    assert_eq!(fetched.title, "T");
}

#[tokio::test]
async fn test_get_unknown_article_is_not_found() {
    let mock = support::spawn().await;
    let client = mock.client().await;

    let err = client.get_article("missing").await.unwrap_err();
    match err {
        OnefootballError::NotFound(id) => assert_eq!(id, "missing"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_articles_by_external_id() {
    let mock = support::spawn().await;
    let client = mock.client().await;

    client
        .publish_article(&support::sample_post("28961"))
        .await
        .unwrap();
    client
        .publish_article(&support::sample_post("other"))
        .await
        .unwrap();

    let posts = client
        .list_articles(&PostQuery::ExternalId("28961".to_string()))
        .await
        .unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].external_id, "28961");
}

#[tokio::test]
async fn test_list_articles_by_feed_item_id() {
    let mock = support::spawn().await;
    let client = mock.client().await;

    let first = client
        .publish_article(&support::sample_post("a-1"))
        .await
        .unwrap();
    let second = client
        .publish_article(&support::sample_post("a-2"))
        .await
        .unwrap();

    let query = PostQuery::FeedItemId(format!(
        "{},{}",
        first.onefootball_id, second.onefootball_id
    ));
    let posts = client.list_articles(&query).await.unwrap();
    assert_eq!(posts.len(), 2);
}

#[tokio::test]
async fn test_list_articles_empty_result_is_ok() {
    let mock = support::spawn().await;
    let client = mock.client().await;

    let posts = client
        .list_articles(&PostQuery::ExternalId("missing".to_string()))
        .await
        .unwrap();
    assert!(posts.is_empty());
}
