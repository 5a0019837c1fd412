//! Channel profile and history operations.

use crate::core::error::ApiResult;
use crate::core::http::Transport;
use crate::core::ledger::ResourceKey;
use crate::core::runner::{OpSpec, Services, run};
use crate::core::store::StoreAction;
use crate::features::user::state::UserOp;
use vidtube_api_models::{ChannelProfile, Envelope, Video};

/// Load a channel page by handle.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_channel_profile<T: Transport>(
    services: &Services<T>,
    username: &str,
) -> ApiResult<Envelope<ChannelProfile>> {
    let path = format!("/users/c/{}", urlencoding::encode(username));
    run(
        services,
        OpSpec::fetch("fetch_channel_profile", ResourceKey::path(&path)),
        |phase| StoreAction::User(UserOp::FetchChannelProfile(phase)),
        services.client.get(&path, &[]),
    )
    .await
}

/// Load the viewer's watch history.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_watch_history<T: Transport>(
    services: &Services<T>,
) -> ApiResult<Envelope<Vec<Video>>> {
    const PATH: &str = "/users/watch-history";
    run(
        services,
        OpSpec::fetch("fetch_watch_history", ResourceKey::path(PATH)),
        |phase| StoreAction::User(UserOp::FetchWatchHistory(phase)),
        services.client.get(PATH, &[]),
    )
    .await
}
