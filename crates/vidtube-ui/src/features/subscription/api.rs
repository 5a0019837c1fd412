//! Subscription operations.

use crate::core::error::ApiResult;
use crate::core::http::Transport;
use crate::core::ledger::ResourceKey;
use crate::core::runner::{OpSpec, Services, SuccessToast, run};
use crate::core::store::StoreAction;
use crate::features::subscription::state::SubscriptionOp;
use vidtube_api_models::{ChannelSubscriber, Envelope, SubscribedChannel, SubscriptionToggle};

/// Subscribe to or unsubscribe from a channel.
///
/// # Errors
/// Transport and server failures.
pub async fn toggle_subscription<T: Transport>(
    services: &Services<T>,
    channel_id: &str,
) -> ApiResult<Envelope<SubscriptionToggle>> {
    let path = format!("/subscriptions/c/{channel_id}");
    run(
        services,
        OpSpec::mutation("toggle_subscription", SuccessToast::Silent),
        |phase| StoreAction::Subscription(SubscriptionOp::Toggle(phase)),
        services.client.post_empty(&path),
    )
    .await
}

/// Load a channel's subscribers.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_channel_subscribers<T: Transport>(
    services: &Services<T>,
    channel_id: &str,
) -> ApiResult<Envelope<Vec<ChannelSubscriber>>> {
    let path = format!("/subscriptions/c/{channel_id}");
    run(
        services,
        OpSpec::fetch("fetch_channel_subscribers", ResourceKey::path(&path)),
        |phase| StoreAction::Subscription(SubscriptionOp::FetchChannelSubscribers(phase)),
        services.client.get(&path, &[]),
    )
    .await
}

/// Load the channels a user follows.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_subscribed_channels<T: Transport>(
    services: &Services<T>,
    subscriber_id: &str,
) -> ApiResult<Envelope<Vec<SubscribedChannel>>> {
    let path = format!("/subscriptions/u/{subscriber_id}");
    run(
        services,
        OpSpec::fetch("fetch_subscribed_channels", ResourceKey::path(&path)),
        |phase| StoreAction::Subscription(SubscriptionOp::FetchSubscribedChannels(phase)),
        services.client.get(&path, &[]),
    )
    .await
}
