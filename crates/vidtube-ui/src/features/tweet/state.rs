//! Tweets of the viewed channel.

use crate::core::store::Phase;
use vidtube_api_models::{DeletedTweet, Tweet};

/// Tweet slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TweetSlice {
    /// A fetch or mutation is in flight.
    pub loading: bool,
    /// Channel tweets, newest creations first.
    pub tweets: Vec<Tweet>,
}

/// Tweet reducer inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum TweetOp {
    /// Channel listing.
    FetchUserTweets(Phase<Vec<Tweet>>),
    /// New tweet.
    Create(Phase<Tweet>),
    /// Content edit.
    Edit {
        /// Edited tweet.
        id: String,
        /// Request phase.
        phase: Phase<Tweet>,
    },
    /// Removal; the server echoes the removed id.
    Delete(Phase<DeletedTweet>),
}

/// Apply a tweet op.
pub fn reduce(slice: &mut TweetSlice, op: TweetOp) {
    match op {
        TweetOp::FetchUserTweets(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(tweets) = phase {
                slice.tweets = tweets;
            }
        }
        TweetOp::Create(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(tweet) = phase {
                slice.tweets.insert(0, tweet);
            }
        }
        TweetOp::Edit { id, phase } => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(edited) = phase
                && let Some(held) = slice.tweets.iter_mut().find(|t| t.id == id)
            {
                *held = edited;
            }
        }
        TweetOp::Delete(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(deleted) = phase {
                slice.tweets.retain(|t| t.id != deleted.tweet_id);
            }
        }
    }
}
