//! Viewed channel profile and the viewer's watch history.

use crate::core::store::Phase;
use vidtube_api_models::{ChannelProfile, Video};

/// User slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserSlice {
    /// A fetch is in flight.
    pub loading: bool,
    /// Channel shown on the channel page.
    pub profile: Option<ChannelProfile>,
    /// Videos the viewer watched, most recent first as sent by the server.
    pub history: Vec<Video>,
}

/// User reducer inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum UserOp {
    /// Channel profile fetch.
    FetchChannelProfile(Phase<ChannelProfile>),
    /// Watch history fetch.
    FetchWatchHistory(Phase<Vec<Video>>),
}

/// Apply a user op.
pub fn reduce(slice: &mut UserSlice, op: UserOp) {
    match op {
        UserOp::FetchChannelProfile(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(profile) = phase {
                slice.profile = Some(profile);
            }
        }
        UserOp::FetchWatchHistory(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(history) = phase {
                slice.history = history;
            }
        }
    }
}

impl UserSlice {
    /// Id of the viewed channel.
    #[must_use]
    pub fn profile_id(&self) -> Option<&str> {
        self.profile.as_ref().map(|profile| profile.user.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::Failure;

    fn profile(id: &str) -> ChannelProfile {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "username": "maya",
            "fullName": "Maya",
            "email": "maya@example.com",
            "subscribersCount": 3,
            "channelsSubscribedToCount": 1,
            "isSubscribed": false
        }))
        .unwrap_or_else(|err| panic!("fixture: {err}"))
    }

    #[test]
    fn profile_replaces_and_exposes_id() {
        let mut slice = UserSlice::default();
        reduce(&mut slice, UserOp::FetchChannelProfile(Phase::Pending));
        assert!(slice.loading);
        reduce(&mut slice, UserOp::FetchChannelProfile(Phase::Fulfilled(profile("u1"))));
        assert_eq!(slice.profile_id(), Some("u1"));
        assert!(!slice.loading);
    }

    #[test]
    fn rejected_history_keeps_previous() {
        let video: Video = serde_json::from_value(serde_json::json!({"_id": "v1"}))
            .unwrap_or_else(|err| panic!("fixture: {err}"));
        let mut slice = UserSlice {
            history: vec![video],
            ..UserSlice::default()
        };
        reduce(&mut slice, UserOp::FetchWatchHistory(Phase::Pending));
        reduce(&mut slice, UserOp::FetchWatchHistory(Phase::Rejected(Failure::default())));
        assert_eq!(slice.history.len(), 1);
        assert!(!slice.loading);
    }
}
