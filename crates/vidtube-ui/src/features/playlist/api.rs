//! Playlist operations.

use crate::core::error::ApiResult;
use crate::core::http::Transport;
use crate::core::ledger::ResourceKey;
use crate::core::runner::{OpSpec, Services, SuccessToast, run, validate};
use crate::core::store::StoreAction;
use crate::core::validation::PLAYLIST;
use crate::features::playlist::state::{PlaylistForm, PlaylistOp};
use serde_json::Value;
use vidtube_api_models::{Envelope, Playlist};

/// Create a playlist for the signed-in user.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn create_playlist<T: Transport>(
    services: &Services<T>,
    form: &PlaylistForm,
) -> ApiResult<Envelope<Playlist>> {
    validate(services, &PLAYLIST, form)?;
    run(
        services,
        OpSpec::mutation("create_playlist", SuccessToast::ServerMessage),
        |phase| StoreAction::Playlist(PlaylistOp::Create(phase)),
        services.client.post_json("/playlist", &form.to_request()),
    )
    .await
}

/// Add a video to a playlist.
///
/// # Errors
/// Transport and server failures.
pub async fn add_video_to_playlist<T: Transport>(
    services: &Services<T>,
    video_id: &str,
    playlist_id: &str,
) -> ApiResult<Envelope<Playlist>> {
    let path = format!("/playlist/add/{video_id}/{playlist_id}");
    run(
        services,
        OpSpec::mutation("add_video_to_playlist", SuccessToast::ServerMessage),
        |phase| StoreAction::Playlist(PlaylistOp::AddVideo(phase)),
        services.client.patch_empty(&path),
    )
    .await
}

/// Remove a video from a playlist.
///
/// # Errors
/// Transport and server failures.
pub async fn remove_video_from_playlist<T: Transport>(
    services: &Services<T>,
    video_id: &str,
    playlist_id: &str,
) -> ApiResult<Envelope<Playlist>> {
    let path = format!("/playlist/remove/{video_id}/{playlist_id}");
    run(
        services,
        OpSpec::mutation("remove_video_from_playlist", SuccessToast::ServerMessage),
        |phase| StoreAction::Playlist(PlaylistOp::RemoveVideo(phase)),
        services.client.patch_empty(&path),
    )
    .await
}

/// Delete a playlist.
///
/// # Errors
/// Transport and server failures.
pub async fn delete_playlist<T: Transport>(
    services: &Services<T>,
    playlist_id: &str,
) -> ApiResult<Envelope<Value>> {
    let path = format!("/playlist/{playlist_id}");
    run(
        services,
        OpSpec::mutation("delete_playlist", SuccessToast::ServerMessage),
        |phase| {
            StoreAction::Playlist(PlaylistOp::Delete {
                id: playlist_id.to_string(),
                phase,
            })
        },
        services.client.delete(&path),
    )
    .await
}

/// Load a channel's playlists.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_user_playlists<T: Transport>(
    services: &Services<T>,
    user_id: &str,
) -> ApiResult<Envelope<Vec<Playlist>>> {
    let path = format!("/playlist/user/{user_id}");
    run(
        services,
        OpSpec::fetch("fetch_user_playlists", ResourceKey::path(&path)),
        |phase| StoreAction::Playlist(PlaylistOp::FetchUserPlaylists(phase)),
        services.client.get(&path, &[]),
    )
    .await
}

/// Rename a playlist or change its description.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn update_playlist<T: Transport>(
    services: &Services<T>,
    playlist_id: &str,
    form: &PlaylistForm,
) -> ApiResult<Envelope<Playlist>> {
    validate(services, &PLAYLIST, form)?;
    let path = format!("/playlist/{playlist_id}");
    run(
        services,
        OpSpec::mutation("update_playlist", SuccessToast::ServerMessage),
        |phase| {
            StoreAction::Playlist(PlaylistOp::Update {
                id: playlist_id.to_string(),
                phase,
            })
        },
        services.client.patch_json(&path, &form.to_request()),
    )
    .await
}

/// Load one playlist into the detail slot.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_playlist<T: Transport>(
    services: &Services<T>,
    playlist_id: &str,
) -> ApiResult<Envelope<Playlist>> {
    let path = format!("/playlist/{playlist_id}");
    run(
        services,
        OpSpec::fetch("fetch_playlist", ResourceKey::path(&path)),
        |phase| StoreAction::Playlist(PlaylistOp::FetchPlaylist(phase)),
        services.client.get(&path, &[]),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::http::{HttpMethod, RequestBody};
    use crate::core::runner::test_support::{stub_services, toast_texts};
    use serde_json::json;

    fn form(name: &str) -> PlaylistForm {
        PlaylistForm {
            name: name.into(),
            description: "desc".into(),
        }
    }

    #[tokio::test]
    async fn create_then_refetch_lists_new_playlist() -> ApiResult<()> {
        let (services, stub) = stub_services(Some("tok"));
        stub.push_json(200, &json!({"data": {"_id": "p1", "name": "Mix"}, "message": "Playlist created", "success": true}));
        stub.push_json(200, &json!({"data": [{"_id": "p1", "name": "Mix"}], "success": true}));

        create_playlist(&services, &form("Mix")).await?;
        fetch_user_playlists(&services, "u1").await?;

        let requests = stub.requests();
        assert_eq!(
            requests[0].body,
            RequestBody::Json(r#"{"name":"Mix","description":"desc"}"#.into())
        );
        assert!(requests[1].url.ends_with("/playlist/user/u1"));
        assert_eq!(services.state().playlist.playlists.len(), 1);
        assert_eq!(toast_texts(&services), vec!["Playlist created".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn long_name_is_rejected_before_network() {
        let (services, stub) = stub_services(Some("tok"));
        let result = create_playlist(&services, &form(&"x".repeat(101))).await;
        assert!(result.is_err());
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn membership_routes_put_video_before_playlist() -> ApiResult<()> {
        let (services, stub) = stub_services(Some("tok"));
        stub.push_json(200, &json!({"data": {"_id": "p1", "name": "Mix", "videos": []}, "success": true}));
        stub.push_json(200, &json!({"data": {"_id": "p1", "videos": ["v1"]}, "success": true}));
        stub.push_json(200, &json!({"data": {"_id": "p1", "videos": []}, "success": true}));

        fetch_playlist(&services, "p1").await?;
        add_video_to_playlist(&services, "v1", "p1").await?;
        remove_video_from_playlist(&services, "v1", "p1").await?;

        let requests = stub.requests();
        assert!(requests[1].url.ends_with("/playlist/add/v1/p1"));
        assert!(requests[2].url.ends_with("/playlist/remove/v1/p1"));
        assert_eq!(requests[2].method, HttpMethod::Patch);
        assert!(services.state().playlist.active.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_touch_held_playlists() -> ApiResult<()> {
        let (services, stub) = stub_services(Some("tok"));
        stub.push_json(200, &json!({"data": [{"_id": "p1", "name": "a"}, {"_id": "p2", "name": "b"}], "success": true}));
        stub.push_json(200, &json!({"data": {"_id": "p2", "name": "renamed", "description": "desc"}, "success": true}));
        stub.push_json(200, &json!({"data": {}, "message": "Playlist deleted", "success": true}));

        fetch_user_playlists(&services, "u1").await?;
        update_playlist(&services, "p2", &form("renamed")).await?;
        delete_playlist(&services, "p1").await?;

        let state = services.state();
        let names: Vec<&str> = state.playlist.playlists.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["renamed"]);
        assert_eq!(stub.requests()[2].method, HttpMethod::Delete);
        Ok(())
    }
}
