//! Video listing, current video, and upload progress.
//!
//! # Design
//! - Paginated fetches append; only `ClearVideos` empties the list.
//! - Upload flags are shared by publish and edit so one modal can watch both.

use crate::core::http::FilePart;
use crate::core::store::Phase;
use crate::core::validation::{FieldValue, FormFields};
use serde_json::Value;
use vidtube_api_models::{Page, PublishState, Video};

/// Accumulated pages of the video feed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoList {
    /// Videos in server order across pages.
    pub docs: Vec<Video>,
    /// Server reports another page.
    pub has_next_page: bool,
}

/// Video slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoSlice {
    /// A listing or detail fetch is in flight.
    pub loading: bool,
    /// A publish or edit upload is in flight.
    pub uploading: bool,
    /// The last upload finished.
    pub uploaded: bool,
    /// Feed pages.
    pub videos: VideoList,
    /// Video open on the watch page.
    pub current: Option<Video>,
    /// Flips on every successful publish toggle so views can refetch.
    pub publish_toggled: bool,
}

/// Video reducer inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum VideoOp {
    /// Feed page fetch.
    FetchVideos(Phase<Page<Video>>),
    /// New upload.
    Publish(Phase<Video>),
    /// Metadata edit.
    Update {
        /// Edited video.
        id: String,
        /// Request phase.
        phase: Phase<Video>,
    },
    /// Removal.
    Delete {
        /// Removed video.
        id: String,
        /// Request phase.
        phase: Phase<Value>,
    },
    /// Detail fetch.
    FetchVideo(Phase<Video>),
    /// Visibility toggle.
    TogglePublish {
        /// Toggled video.
        id: String,
        /// Request phase.
        phase: Phase<PublishState>,
    },
    /// Clear upload flags after the modal closes.
    ResetUploadState,
    /// Drop accumulated feed pages.
    ClearVideos,
}

/// Apply a video op.
pub fn reduce(slice: &mut VideoSlice, op: VideoOp) {
    match op {
        VideoOp::FetchVideos(phase) => match phase {
            Phase::Pending => slice.loading = true,
            Phase::Fulfilled(page) => {
                slice.loading = false;
                slice.videos.docs.extend(page.docs);
                slice.videos.has_next_page = page.has_next_page;
            }
            Phase::Rejected(_) => slice.loading = false,
        },
        VideoOp::Publish(phase) => {
            let succeeded = matches!(phase, Phase::Fulfilled(_));
            upload_phase(slice, phase.is_settled(), succeeded);
        }
        VideoOp::Update { id, phase } => {
            let settled = phase.is_settled();
            let ok = matches!(phase, Phase::Fulfilled(_));
            if let Phase::Fulfilled(video) = phase
                && slice.current.as_ref().is_some_and(|current| current.id == id)
            {
                slice.current = Some(video);
            }
            upload_phase(slice, settled, ok);
        }
        VideoOp::Delete { id, phase } => match phase {
            Phase::Pending => slice.loading = true,
            Phase::Fulfilled(_) => {
                slice.loading = false;
                slice.videos.docs.retain(|video| video.id != id);
                if slice.current.as_ref().is_some_and(|current| current.id == id) {
                    slice.current = None;
                }
            }
            Phase::Rejected(_) => slice.loading = false,
        },
        VideoOp::FetchVideo(phase) => match phase {
            Phase::Pending => slice.loading = true,
            Phase::Fulfilled(video) => {
                slice.loading = false;
                slice.current = Some(video);
            }
            Phase::Rejected(_) => slice.loading = false,
        },
        VideoOp::TogglePublish { id, phase } => {
            if let Phase::Fulfilled(state) = phase {
                slice.publish_toggled = !slice.publish_toggled;
                if let Some(current) = slice.current.as_mut().filter(|video| video.id == id) {
                    current.is_published = state.is_published;
                }
                if let Some(listed) = slice.videos.docs.iter_mut().find(|video| video.id == id) {
                    listed.is_published = state.is_published;
                }
            }
        }
        VideoOp::ResetUploadState => {
            slice.uploading = false;
            slice.uploaded = false;
        }
        VideoOp::ClearVideos => {
            slice.videos.docs.clear();
        }
    }
}

fn upload_phase(slice: &mut VideoSlice, settled: bool, succeeded: bool) {
    slice.uploading = !settled;
    if succeeded {
        slice.uploaded = true;
    }
}

/// New video upload form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublishVideoForm {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Video file.
    pub video_file: Option<FilePart>,
    /// Poster image.
    pub thumbnail: Option<FilePart>,
}

impl FormFields for PublishVideoForm {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "title" => FieldValue::Text(&self.title),
            "description" => FieldValue::Text(&self.description),
            "videoFile" => FieldValue::Files(usize::from(self.video_file.is_some())),
            "thumbnail" => FieldValue::Files(usize::from(self.thumbnail.is_some())),
            _ => FieldValue::Missing,
        }
    }
}

/// Video metadata edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateVideoForm {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Replacement poster image.
    pub thumbnail: Option<FilePart>,
}

impl UpdateVideoForm {
    /// Form prefilled from an existing video.
    #[must_use]
    pub fn from_video(video: &Video) -> Self {
        Self {
            title: video.title.clone(),
            description: video.description.clone(),
            thumbnail: None,
        }
    }
}

impl FormFields for UpdateVideoForm {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "title" => FieldValue::Text(&self.title),
            "description" => FieldValue::Text(&self.description),
            "thumbnail" => FieldValue::Files(usize::from(self.thumbnail.is_some())),
            _ => FieldValue::Missing,
        }
    }
}
