//! App-wide yewdux store.
//!
//! # Design
//! - One store, one independently owned slice per domain.
//! - Slices change only through their pure reducer, fed a [`StoreAction`].
//! - Async results are tagged with a [`Phase`] and a request [`Ticket`];
//!   settled results for superseded tickets are dropped.

use crate::core::ledger::{RequestLedger, Ticket};
use crate::core::notify::Notifications;
use crate::features::auth::state::{AuthOp, AuthSlice};
use crate::features::comment::state::{CommentOp, CommentSlice};
use crate::features::dashboard::state::{DashboardOp, DashboardSlice};
use crate::features::like::state::{LikeOp, LikeSlice};
use crate::features::playlist::state::{PlaylistOp, PlaylistSlice};
use crate::features::subscription::state::{SubscriptionOp, SubscriptionSlice};
use crate::features::tweet::state::{TweetOp, TweetSlice};
use crate::features::user::state::{UserOp, UserSlice};
use crate::features::video::state::{VideoOp, VideoSlice};
use yewdux::store::Store;

/// Lifecycle of one asynchronous operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Phase<T> {
    /// Request dispatched, no response yet.
    Pending,
    /// Request succeeded with a payload.
    Fulfilled(T),
    /// Request failed.
    Rejected(Failure),
}

impl<T> Phase<T> {
    /// True once a response (or failure) arrived.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Failure details kept for reducers and views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Failure {
    /// Server message, when one was sent.
    pub message: Option<String>,
    /// HTTP status, when the server responded.
    pub status: Option<u16>,
}

/// Global application store.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppStore {
    /// Authenticated identity.
    pub auth: AuthSlice,
    /// Video listing, current video, and upload flags.
    pub video: VideoSlice,
    /// Comments for the open video.
    pub comment: CommentSlice,
    /// Tweets of the viewed channel.
    pub tweet: TweetSlice,
    /// Liked videos.
    pub like: LikeSlice,
    /// Playlists.
    pub playlist: PlaylistSlice,
    /// Subscriptions.
    pub subscription: SubscriptionSlice,
    /// Channel dashboard.
    pub dashboard: DashboardSlice,
    /// Viewed channel profile and watch history.
    pub user: UserSlice,
    /// Latest ticket per resource.
    pub requests: RequestLedger,
    /// Visible toasts.
    pub notifications: Notifications,
}

/// A reducer input routed to one slice.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreAction {
    /// Auth slice.
    Auth(AuthOp),
    /// Video slice.
    Video(VideoOp),
    /// Comment slice.
    Comment(CommentOp),
    /// Tweet slice.
    Tweet(TweetOp),
    /// Like slice.
    Like(LikeOp),
    /// Playlist slice.
    Playlist(PlaylistOp),
    /// Subscription slice.
    Subscription(SubscriptionOp),
    /// Dashboard slice.
    Dashboard(DashboardOp),
    /// User slice.
    User(UserOp),
}

impl AppStore {
    /// Route `action` to its slice reducer.
    pub fn apply(&mut self, action: StoreAction) {
        use crate::features;
        match action {
            StoreAction::Auth(op) => features::auth::state::reduce(&mut self.auth, op),
            StoreAction::Video(op) => features::video::state::reduce(&mut self.video, op),
            StoreAction::Comment(op) => features::comment::state::reduce(&mut self.comment, op),
            StoreAction::Tweet(op) => features::tweet::state::reduce(&mut self.tweet, op),
            StoreAction::Like(op) => features::like::state::reduce(&mut self.like, op),
            StoreAction::Playlist(op) => {
                features::playlist::state::reduce(&mut self.playlist, op);
            }
            StoreAction::Subscription(op) => {
                features::subscription::state::reduce(&mut self.subscription, op);
            }
            StoreAction::Dashboard(op) => {
                features::dashboard::state::reduce(&mut self.dashboard, op);
            }
            StoreAction::User(op) => features::user::state::reduce(&mut self.user, op),
        }
    }

    /// Apply a settled result unless `ticket` was superseded.
    ///
    /// Returns `false` when the result was dropped as stale.
    pub fn settle(&mut self, ticket: &Ticket, action: StoreAction) -> bool {
        if !self.requests.is_current(ticket) {
            return false;
        }
        self.requests.finish(ticket);
        self.apply(action);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::ResourceKey;
    use vidtube_api_models::Video;

    fn video(id: &str, title: &str) -> Video {
        serde_json::from_value(serde_json::json!({"_id": id, "title": title}))
            .unwrap_or_else(|err| panic!("fixture: {err}"))
    }

    #[test]
    fn stale_fetch_never_overwrites_newer_result() {
        let mut store = AppStore::default();
        let key = ResourceKey::path("/videos/v1");
        let older = store.requests.begin(Some(key.clone()));
        store.apply(StoreAction::Video(VideoOp::FetchVideo(Phase::Pending)));
        let newer = store.requests.begin(Some(key));
        store.apply(StoreAction::Video(VideoOp::FetchVideo(Phase::Pending)));

        assert!(store.settle(
            &newer,
            StoreAction::Video(VideoOp::FetchVideo(Phase::Fulfilled(video("v1", "fresh"))))
        ));
        assert!(!store.settle(
            &older,
            StoreAction::Video(VideoOp::FetchVideo(Phase::Fulfilled(video("v1", "stale"))))
        ));
        assert_eq!(
            store.video.current.as_ref().map(|v| v.title.as_str()),
            Some("fresh")
        );
        assert!(!store.video.loading);
        assert_eq!(store.requests.in_flight(), 0);
    }

    #[test]
    fn settled_fetches_leave_no_ledger_entries() {
        let mut store = AppStore::default();
        for i in 0..50 {
            let ticket = store
                .requests
                .begin(Some(ResourceKey::path(&format!("/videos/v{i}"))));
            store.apply(StoreAction::Video(VideoOp::FetchVideo(Phase::Pending)));
            assert!(store.settle(
                &ticket,
                StoreAction::Video(VideoOp::FetchVideo(Phase::Fulfilled(video(
                    &format!("v{i}"),
                    "t"
                ))))
            ));
        }
        assert_eq!(store.requests.in_flight(), 0);
    }

    #[test]
    fn slices_are_independent() {
        let mut store = AppStore::default();
        store.apply(StoreAction::Comment(CommentOp::FetchComments(Phase::Rejected(
            Failure::default(),
        ))));
        assert_eq!(store.video, VideoSlice::default());
        assert_eq!(store.auth, AuthSlice::default());
    }
}
