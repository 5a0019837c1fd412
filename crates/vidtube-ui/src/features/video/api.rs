//! Video operations.

use crate::core::error::ApiResult;
use crate::core::http::{MultipartForm, Transport};
use crate::core::ledger::ResourceKey;
use crate::core::runner::{OpSpec, Services, SuccessToast, run, validate};
use crate::core::store::StoreAction;
use crate::core::validation::{PUBLISH_VIDEO, UPDATE_VIDEO};
use crate::features::video::state::{PublishVideoForm, UpdateVideoForm, VideoOp};
use serde_json::Value;
use vidtube_api_models::{Envelope, Page, PublishState, Video, VideoQuery};

/// Fetch one feed page and append it.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_videos<T: Transport>(
    services: &Services<T>,
    query: &VideoQuery,
) -> ApiResult<Envelope<Page<Video>>> {
    let pairs = query.to_pairs();
    run(
        services,
        OpSpec::fetch("fetch_videos", ResourceKey::new("/videos", &pairs)),
        |phase| StoreAction::Video(VideoOp::FetchVideos(phase)),
        services.client.get("/videos", &pairs),
    )
    .await
}

/// Upload a new video.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn publish_video<T: Transport>(
    services: &Services<T>,
    form: PublishVideoForm,
) -> ApiResult<Envelope<Video>> {
    validate(services, &PUBLISH_VIDEO, &form)?;
    let body = MultipartForm::new()
        .text("title", form.title.trim())
        .text("description", form.description.trim())
        .optional_file("videoFile", form.video_file)
        .optional_file("thumbnail", form.thumbnail);
    run(
        services,
        OpSpec::mutation("publish_video", SuccessToast::ServerMessage),
        |phase| StoreAction::Video(VideoOp::Publish(phase)),
        services.client.post_multipart("/videos", body),
    )
    .await
}

/// Edit a video's title, description, and thumbnail.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn update_video<T: Transport>(
    services: &Services<T>,
    video_id: &str,
    form: UpdateVideoForm,
) -> ApiResult<Envelope<Video>> {
    validate(services, &UPDATE_VIDEO, &form)?;
    let body = MultipartForm::new()
        .text("title", form.title.trim())
        .text("description", form.description.trim())
        .optional_file("thumbnail", form.thumbnail);
    let path = format!("/videos/{video_id}");
    run(
        services,
        OpSpec::mutation("update_video", SuccessToast::ServerMessage),
        |phase| {
            StoreAction::Video(VideoOp::Update {
                id: video_id.to_string(),
                phase,
            })
        },
        services.client.patch_multipart(&path, body),
    )
    .await
}

/// Delete a video.
///
/// # Errors
/// Transport and server failures.
pub async fn delete_video<T: Transport>(
    services: &Services<T>,
    video_id: &str,
) -> ApiResult<Envelope<Value>> {
    let path = format!("/videos/{video_id}");
    run(
        services,
        OpSpec::mutation("delete_video", SuccessToast::ServerMessage),
        |phase| {
            StoreAction::Video(VideoOp::Delete {
                id: video_id.to_string(),
                phase,
            })
        },
        services.client.delete(&path),
    )
    .await
}

/// Load one video into the watch slot.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_video<T: Transport>(
    services: &Services<T>,
    video_id: &str,
) -> ApiResult<Envelope<Video>> {
    let path = format!("/videos/{video_id}");
    run(
        services,
        OpSpec::fetch("fetch_video", ResourceKey::path(&path)),
        |phase| StoreAction::Video(VideoOp::FetchVideo(phase)),
        services.client.get(&path, &[]),
    )
    .await
}

/// Flip a video's published flag.
///
/// # Errors
/// Transport and server failures.
pub async fn toggle_publish<T: Transport>(
    services: &Services<T>,
    video_id: &str,
) -> ApiResult<Envelope<PublishState>> {
    let path = format!("/videos/toggle/publish/{video_id}");
    run(
        services,
        OpSpec::mutation("toggle_publish", SuccessToast::ServerMessage),
        |phase| {
            StoreAction::Video(VideoOp::TogglePublish {
                id: video_id.to_string(),
                phase,
            })
        },
        services.client.patch_empty(&path),
    )
    .await
}

/// Clear upload flags.
pub fn reset_upload_state<T>(services: &Services<T>) {
    services.apply(StoreAction::Video(VideoOp::ResetUploadState));
}

/// Drop accumulated feed pages before a fresh listing.
pub fn clear_videos<T>(services: &Services<T>) {
    services.apply(StoreAction::Video(VideoOp::ClearVideos));
}
