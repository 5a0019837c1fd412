//! Like operations.

use crate::core::error::ApiResult;
use crate::core::http::Transport;
use crate::core::ledger::ResourceKey;
use crate::core::runner::{OpSpec, Services, SuccessToast, run};
use crate::core::store::StoreAction;
use crate::features::like::state::{LikeOp, LikeTarget};
use serde_json::Value;
use vidtube_api_models::{Envelope, LikedVideo};

/// Toggle the viewer's like on `target`.
///
/// # Errors
/// Transport and server failures.
pub async fn toggle_like<T: Transport>(
    services: &Services<T>,
    target: LikeTarget,
    id: &str,
) -> ApiResult<Envelope<Value>> {
    let path = format!("/likes/toggle/{}/{id}", target.segment());
    run(
        services,
        OpSpec::mutation(target.label(), SuccessToast::Silent),
        |phase| StoreAction::Like(LikeOp::Toggle { target, phase }),
        services.client.post_empty(&path),
    )
    .await
}

/// Toggle a video like.
///
/// # Errors
/// Transport and server failures.
pub async fn toggle_video_like<T: Transport>(
    services: &Services<T>,
    video_id: &str,
) -> ApiResult<Envelope<Value>> {
    toggle_like(services, LikeTarget::Video, video_id).await
}

/// Toggle a tweet like.
///
/// # Errors
/// Transport and server failures.
pub async fn toggle_tweet_like<T: Transport>(
    services: &Services<T>,
    tweet_id: &str,
) -> ApiResult<Envelope<Value>> {
    toggle_like(services, LikeTarget::Tweet, tweet_id).await
}

/// Toggle a comment like.
///
/// # Errors
/// Transport and server failures.
pub async fn toggle_comment_like<T: Transport>(
    services: &Services<T>,
    comment_id: &str,
) -> ApiResult<Envelope<Value>> {
    toggle_like(services, LikeTarget::Comment, comment_id).await
}

/// Load the viewer's liked videos.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_liked_videos<T: Transport>(
    services: &Services<T>,
) -> ApiResult<Envelope<Vec<LikedVideo>>> {
    const PATH: &str = "/likes/videos";
    run(
        services,
        OpSpec::fetch("fetch_liked_videos", ResourceKey::path(PATH)),
        |phase| StoreAction::Like(LikeOp::FetchLikedVideos(phase)),
        services.client.get(PATH, &[]),
    )
    .await
}
