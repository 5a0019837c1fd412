//! Liked videos.
//!
//! # Design
//! - Like toggles leave the slice untouched; the clicked control owns its
//!   optimistic display state.

use crate::core::store::Phase;
use serde_json::Value;
use vidtube_api_models::LikedVideo;

/// Like slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LikeSlice {
    /// Liked-videos fetch is in flight.
    pub loading: bool,
    /// Videos the viewer liked.
    pub liked_videos: Vec<LikedVideo>,
}

/// What a like toggle targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LikeTarget {
    /// A video.
    Video,
    /// A tweet.
    Tweet,
    /// A comment.
    Comment,
}

impl LikeTarget {
    /// Route segment under `/likes/toggle`.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Video => "v",
            Self::Tweet => "t",
            Self::Comment => "c",
        }
    }

    /// Operation name used in logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Video => "toggle_video_like",
            Self::Tweet => "toggle_tweet_like",
            Self::Comment => "toggle_comment_like",
        }
    }
}

/// Like reducer inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum LikeOp {
    /// Like toggle on any target.
    Toggle {
        /// Target kind.
        target: LikeTarget,
        /// Request phase.
        phase: Phase<Value>,
    },
    /// Liked-videos listing.
    FetchLikedVideos(Phase<Vec<LikedVideo>>),
}

/// Apply a like op.
pub fn reduce(slice: &mut LikeSlice, op: LikeOp) {
    match op {
        LikeOp::Toggle { .. } => {}
        LikeOp::FetchLikedVideos(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(videos) = phase {
                slice.liked_videos = videos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::Failure;

    #[test]
    fn toggles_leave_slice_untouched() {
        let mut slice = LikeSlice::default();
        for phase in [
            Phase::Pending,
            Phase::Fulfilled(Value::Null),
            Phase::Rejected(Failure::default()),
        ] {
            reduce(
                &mut slice,
                LikeOp::Toggle {
                    target: LikeTarget::Tweet,
                    phase,
                },
            );
            assert_eq!(slice, LikeSlice::default());
        }
    }

    #[test]
    fn liked_videos_are_replaced() {
        let liked: LikedVideo =
            serde_json::from_value(serde_json::json!({"likedVideo": {"_id": "v1"}}))
                .unwrap_or_else(|err| panic!("fixture: {err}"));
        let mut slice = LikeSlice::default();
        reduce(&mut slice, LikeOp::FetchLikedVideos(Phase::Pending));
        assert!(slice.loading);
        reduce(&mut slice, LikeOp::FetchLikedVideos(Phase::Fulfilled(vec![liked])));
        assert_eq!(slice.liked_videos.len(), 1);
        assert!(!slice.loading);
    }

    #[test]
    fn segments_match_routes() {
        assert_eq!(LikeTarget::Video.segment(), "v");
        assert_eq!(LikeTarget::Tweet.segment(), "t");
        assert_eq!(LikeTarget::Comment.segment(), "c");
    }
}
