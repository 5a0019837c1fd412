//! Tweet and comment composer behaviour.
//!
//! # Design
//! - One composer serves both targets; the target picks placeholder and route.
//! - The draft clears only after the server accepts the post.

use crate::core::error::ApiResult;
use crate::core::http::Transport;
use crate::core::runner::Services;
use crate::core::validation::ContentForm;
use crate::features::{comment, tweet};

/// Where a composed post goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComposerTarget {
    /// Tweet on the viewer's channel.
    Tweet,
    /// Comment under a video.
    Comment {
        /// Video being commented on.
        video_id: String,
    },
}

impl ComposerTarget {
    /// Input placeholder.
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Tweet => "Write a tweet",
            Self::Comment { .. } => "Add a Comment",
        }
    }
}

/// Composer input state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerDraft {
    /// Text as typed.
    pub text: String,
}

impl ComposerDraft {
    /// Form for the current text.
    #[must_use]
    pub fn form(&self) -> ContentForm {
        ContentForm::new(self.text.clone())
    }

    /// Clear the text when the post went through.
    pub fn settle(&mut self, accepted: bool) {
        if accepted {
            self.text.clear();
        }
    }
}

/// Send the draft to its target.
///
/// # Errors
/// Validation, transport, and server failures from the target operation.
pub async fn submit<T: Transport>(
    services: &Services<T>,
    target: &ComposerTarget,
    form: &ContentForm,
) -> ApiResult<()> {
    match target {
        ComposerTarget::Tweet => tweet::api::create_tweet(services, form).await.map(drop),
        ComposerTarget::Comment { video_id } => {
            comment::api::create_comment(services, video_id, form)
                .await
                .map(drop)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::runner::test_support::stub_services;
    use serde_json::json;

    #[test]
    fn placeholders_follow_target() {
        assert_eq!(ComposerTarget::Tweet.placeholder(), "Write a tweet");
        let target = ComposerTarget::Comment {
            video_id: "v1".into(),
        };
        assert_eq!(target.placeholder(), "Add a Comment");
    }

    #[test]
    fn draft_clears_only_when_accepted() {
        let mut draft = ComposerDraft {
            text: "hello".into(),
        };
        draft.settle(false);
        assert_eq!(draft.text, "hello");
        draft.settle(true);
        assert!(draft.text.is_empty());
    }

    #[tokio::test]
    async fn comment_target_posts_under_video() -> ApiResult<()> {
        let (services, stub) = stub_services(Some("tok"));
        stub.push_json(200, &json!({"data": {"_id": "c1", "content": "hi"}, "success": true}));
        let target = ComposerTarget::Comment {
            video_id: "v7".into(),
        };
        submit(&services, &target, &ContentForm::new("hi")).await?;
        assert!(stub.requests()[0].url.ends_with("/comment/v7"));
        assert_eq!(services.state().comment.comments.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn tweet_target_prepends_tweet() -> ApiResult<()> {
        let (services, stub) = stub_services(Some("tok"));
        stub.push_json(200, &json!({"data": {"_id": "t1", "content": "hi"}, "success": true}));
        submit(&services, &ComposerTarget::Tweet, &ContentForm::new("hi")).await?;
        assert!(stub.requests()[0].url.ends_with("/tweet"));
        assert_eq!(services.state().tweet.tweets.len(), 1);
        Ok(())
    }
}
