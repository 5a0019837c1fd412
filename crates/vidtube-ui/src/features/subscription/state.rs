//! Channel subscriptions.

use crate::core::store::Phase;
use vidtube_api_models::{ChannelSubscriber, SubscribedChannel, SubscriptionToggle};

/// Subscription slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubscriptionSlice {
    /// A request is in flight.
    pub loading: bool,
    /// Result of the last toggle; `None` until one completes.
    pub subscribed: Option<bool>,
    /// Subscribers of the viewed channel.
    pub channel_subscribers: Vec<ChannelSubscriber>,
    /// Channels the viewer follows that have at least one upload.
    pub my_subscriptions: Vec<SubscribedChannel>,
}

/// Subscription reducer inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum SubscriptionOp {
    /// Subscribe or unsubscribe.
    Toggle(Phase<SubscriptionToggle>),
    /// Subscribers of one channel.
    FetchChannelSubscribers(Phase<Vec<ChannelSubscriber>>),
    /// Channels one user follows.
    FetchSubscribedChannels(Phase<Vec<SubscribedChannel>>),
}

/// Apply a subscription op.
pub fn reduce(slice: &mut SubscriptionSlice, op: SubscriptionOp) {
    match op {
        SubscriptionOp::Toggle(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(toggle) = phase {
                slice.subscribed = Some(toggle.subscribed);
            }
        }
        SubscriptionOp::FetchChannelSubscribers(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(subscribers) = phase {
                slice.channel_subscribers = subscribers;
            }
        }
        SubscriptionOp::FetchSubscribedChannels(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(channels) = phase {
                slice.my_subscriptions = channels
                    .into_iter()
                    .filter(|entry| entry.subscribed_channel.latest_video.is_some())
                    .collect();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::Failure;
    use serde_json::json;

    fn channel(id: &str, with_video: bool) -> SubscribedChannel {
        let latest = with_video.then(|| json!({"_id": format!("{id}-video")}));
        serde_json::from_value(json!({
            "subscribedChannel": {"_id": id, "username": id, "latestVideo": latest}
        }))
        .unwrap_or_else(|err| panic!("fixture: {err}"))
    }

    #[test]
    fn toggle_records_server_state() {
        let mut slice = SubscriptionSlice::default();
        reduce(&mut slice, SubscriptionOp::Toggle(Phase::Pending));
        assert!(slice.loading);
        reduce(
            &mut slice,
            SubscriptionOp::Toggle(Phase::Fulfilled(SubscriptionToggle { subscribed: true })),
        );
        assert_eq!(slice.subscribed, Some(true));
        assert!(!slice.loading);
    }

    #[test]
    fn channels_without_uploads_are_dropped() {
        let mut slice = SubscriptionSlice::default();
        reduce(
            &mut slice,
            SubscriptionOp::FetchSubscribedChannels(Phase::Fulfilled(vec![
                channel("a", true),
                channel("b", false),
                channel("c", true),
            ])),
        );
        let ids: Vec<&str> = slice
            .my_subscriptions
            .iter()
            .map(|s| s.subscribed_channel.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn failed_toggle_keeps_previous_flag() {
        let mut slice = SubscriptionSlice {
            subscribed: Some(false),
            ..SubscriptionSlice::default()
        };
        reduce(&mut slice, SubscriptionOp::Toggle(Phase::Pending));
        reduce(&mut slice, SubscriptionOp::Toggle(Phase::Rejected(Failure::default())));
        assert_eq!(slice.subscribed, Some(false));
        assert!(!slice.loading);
    }
}
