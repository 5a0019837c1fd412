//! Tweet operations.

use crate::core::error::ApiResult;
use crate::core::http::Transport;
use crate::core::ledger::ResourceKey;
use crate::core::runner::{OpSpec, Services, SuccessToast, run, validate};
use crate::core::store::StoreAction;
use crate::core::validation::{CONTENT, ContentForm};
use crate::features::tweet::state::TweetOp;
use vidtube_api_models::{DeletedTweet, Envelope, Tweet};

/// Load every tweet of one channel.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_user_tweets<T: Transport>(
    services: &Services<T>,
    user_id: &str,
) -> ApiResult<Envelope<Vec<Tweet>>> {
    let path = format!("/tweet/user/{user_id}");
    run(
        services,
        OpSpec::fetch("fetch_user_tweets", ResourceKey::path(&path)),
        |phase| StoreAction::Tweet(TweetOp::FetchUserTweets(phase)),
        services.client.get(&path, &[]),
    )
    .await
}

/// Publish a tweet.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn create_tweet<T: Transport>(
    services: &Services<T>,
    form: &ContentForm,
) -> ApiResult<Envelope<Tweet>> {
    validate(services, &CONTENT, form)?;
    run(
        services,
        OpSpec::mutation("create_tweet", SuccessToast::ServerMessage),
        |phase| StoreAction::Tweet(TweetOp::Create(phase)),
        services.client.post_json("/tweet", &form.to_request()),
    )
    .await
}

/// Replace a tweet's text.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn edit_tweet<T: Transport>(
    services: &Services<T>,
    tweet_id: &str,
    form: &ContentForm,
) -> ApiResult<Envelope<Tweet>> {
    validate(services, &CONTENT, form)?;
    let path = format!("/tweet/{tweet_id}");
    run(
        services,
        OpSpec::mutation("edit_tweet", SuccessToast::ServerMessage),
        |phase| {
            StoreAction::Tweet(TweetOp::Edit {
                id: tweet_id.to_string(),
                phase,
            })
        },
        services.client.patch_json(&path, &form.to_request()),
    )
    .await
}

/// Delete a tweet.
///
/// # Errors
/// Transport and server failures.
pub async fn delete_tweet<T: Transport>(
    services: &Services<T>,
    tweet_id: &str,
) -> ApiResult<Envelope<DeletedTweet>> {
    let path = format!("/tweet/{tweet_id}");
    run(
        services,
        OpSpec::mutation("delete_tweet", SuccessToast::ServerMessage),
        |phase| StoreAction::Tweet(TweetOp::Delete(phase)),
        services.client.delete(&path),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::http::HttpMethod;
    use crate::core::runner::test_support::{stub_services, toast_texts};
    use serde_json::json;

    #[tokio::test]
    async fn create_edit_delete_flow() -> ApiResult<()> {
        let (services, stub) = stub_services(Some("tok"));
        stub.push_json(200, &json!({"data": [{"_id": "t1", "content": "a"}], "success": true}));
        stub.push_json(200, &json!({"data": {"_id": "t2", "content": "b"}, "message": "Tweet created", "success": true}));
        stub.push_json(200, &json!({"data": {"_id": "t2", "content": "b2"}, "success": true}));
        stub.push_json(200, &json!({"data": {"tweetId": "t1"}, "success": true}));

        fetch_user_tweets(&services, "u1").await?;
        create_tweet(&services, &ContentForm::new("b")).await?;
        edit_tweet(&services, "t2", &ContentForm::new("b2")).await?;
        delete_tweet(&services, "t1").await?;

        let requests = stub.requests();
        assert!(requests[0].url.ends_with("/tweet/user/u1"));
        assert!(requests[1].url.ends_with("/tweet"));
        assert_eq!(requests[2].method, HttpMethod::Patch);
        assert!(requests[3].url.ends_with("/tweet/t1"));

        let state = services.state();
        assert_eq!(state.tweet.tweets.len(), 1);
        assert_eq!(state.tweet.tweets[0].content, "b2");
        assert_eq!(toast_texts(&services), vec!["Tweet created".to_string()]);
        Ok(())
    }
}
