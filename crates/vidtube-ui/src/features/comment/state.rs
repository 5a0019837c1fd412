//! Comments under the open video.

use crate::core::store::Phase;
use vidtube_api_models::{Comment, DeletedComment, Page};

/// Comment slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentSlice {
    /// A fetch or mutation is in flight.
    pub loading: bool,
    /// Loaded comments, newest creations first.
    pub comments: Vec<Comment>,
    /// Server total, adjusted locally on create and delete.
    pub total_comments: u64,
    /// Server reports another page.
    pub has_next_page: bool,
}

/// Comment reducer inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum CommentOp {
    /// Page fetch.
    FetchComments(Phase<Page<Comment>>),
    /// New comment.
    Create(Phase<Comment>),
    /// Content edit.
    Edit {
        /// Edited comment.
        id: String,
        /// Request phase.
        phase: Phase<Comment>,
    },
    /// Removal; the server echoes the removed id.
    Delete(Phase<DeletedComment>),
    /// Forget everything when leaving the video.
    CleanUp,
}

/// Apply a comment op.
pub fn reduce(slice: &mut CommentSlice, op: CommentOp) {
    match op {
        CommentOp::FetchComments(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(page) = phase {
                slice.comments.extend(page.docs);
                slice.total_comments = page.total_docs;
                slice.has_next_page = page.has_next_page;
            }
        }
        CommentOp::Create(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(comment) = phase {
                slice.comments.insert(0, comment);
                slice.total_comments += 1;
            }
        }
        CommentOp::Edit { id, phase } => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(edited) = phase
                && let Some(held) = slice.comments.iter_mut().find(|c| c.id == id)
            {
                *held = edited;
            }
        }
        CommentOp::Delete(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(deleted) = phase {
                let before = slice.comments.len();
                slice.comments.retain(|c| c.id != deleted.comment_id);
                if slice.comments.len() < before {
                    slice.total_comments = slice.total_comments.saturating_sub(1);
                }
            }
        }
        CommentOp::CleanUp => {
            slice.comments.clear();
            slice.total_comments = 0;
            slice.has_next_page = false;
        }
    }
}
