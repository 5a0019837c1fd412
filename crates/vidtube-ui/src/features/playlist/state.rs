//! Playlists of the viewed channel and the playlist open in detail.

use crate::core::store::Phase;
use crate::core::validation::{FieldValue, FormFields};
use serde_json::Value;
use vidtube_api_models::{Playlist, PlaylistRequest};

/// Playlist slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaylistSlice {
    /// A create request is in flight.
    pub loading: bool,
    /// Playlist open on the detail page.
    pub active: Option<Playlist>,
    /// Playlists of the viewed channel.
    pub playlists: Vec<Playlist>,
}

/// Playlist reducer inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaylistOp {
    /// New playlist.
    Create(Phase<Playlist>),
    /// Video added; the server returns the updated playlist.
    AddVideo(Phase<Playlist>),
    /// Video removed; the server returns the updated playlist.
    RemoveVideo(Phase<Playlist>),
    /// Removal.
    Delete {
        /// Removed playlist.
        id: String,
        /// Request phase.
        phase: Phase<Value>,
    },
    /// Channel listing.
    FetchUserPlaylists(Phase<Vec<Playlist>>),
    /// Name and description edit.
    Update {
        /// Edited playlist.
        id: String,
        /// Request phase.
        phase: Phase<Playlist>,
    },
    /// Detail fetch.
    FetchPlaylist(Phase<Playlist>),
}

/// Apply a playlist op.
pub fn reduce(slice: &mut PlaylistSlice, op: PlaylistOp) {
    match op {
        PlaylistOp::Create(phase) => slice.loading = !phase.is_settled(),
        PlaylistOp::AddVideo(Phase::Fulfilled(updated))
        | PlaylistOp::RemoveVideo(Phase::Fulfilled(updated)) => {
            if slice.active.as_ref().is_some_and(|active| active.id == updated.id) {
                slice.active = Some(updated);
            }
        }
        PlaylistOp::Delete {
            id,
            phase: Phase::Fulfilled(_),
        } => {
            slice.playlists.retain(|playlist| playlist.id != id);
            if slice.active.as_ref().is_some_and(|active| active.id == id) {
                slice.active = None;
            }
        }
        PlaylistOp::FetchUserPlaylists(Phase::Fulfilled(playlists)) => {
            slice.playlists = playlists;
        }
        PlaylistOp::Update {
            id,
            phase: Phase::Fulfilled(updated),
        } => {
            let held = slice
                .active
                .iter_mut()
                .chain(slice.playlists.iter_mut())
                .filter(|playlist| playlist.id == id);
            for playlist in held {
                playlist.name.clone_from(&updated.name);
                playlist.description.clone_from(&updated.description);
            }
        }
        PlaylistOp::FetchPlaylist(Phase::Fulfilled(playlist)) => {
            slice.active = Some(playlist);
        }
        PlaylistOp::AddVideo(_)
        | PlaylistOp::RemoveVideo(_)
        | PlaylistOp::Delete { .. }
        | PlaylistOp::FetchUserPlaylists(_)
        | PlaylistOp::Update { .. }
        | PlaylistOp::FetchPlaylist(_) => {}
    }
}

/// Create or edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaylistForm {
    /// Playlist name.
    pub name: String,
    /// Playlist description.
    pub description: String,
}

impl PlaylistForm {
    /// Wire body with trimmed fields.
    #[must_use]
    pub fn to_request(&self) -> PlaylistRequest {
        PlaylistRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

impl FormFields for PlaylistForm {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => FieldValue::Text(&self.name),
            "description" => FieldValue::Text(&self.description),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::Failure;

    fn playlist(id: &str, name: &str) -> Playlist {
        serde_json::from_value(serde_json::json!({"_id": id, "name": name, "description": "d"}))
            .unwrap_or_else(|err| panic!("fixture: {err}"))
    }

    fn names(slice: &PlaylistSlice) -> Vec<&str> {
        slice.playlists.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn create_only_toggles_loading() {
        let mut slice = PlaylistSlice::default();
        reduce(&mut slice, PlaylistOp::Create(Phase::Pending));
        assert!(slice.loading);
        reduce(&mut slice, PlaylistOp::Create(Phase::Fulfilled(playlist("p1", "a"))));
        assert!(!slice.loading);
        assert!(slice.playlists.is_empty());
    }

    #[test]
    fn delete_removes_matching_playlist_and_active() {
        let mut slice = PlaylistSlice {
            active: Some(playlist("p2", "b")),
            playlists: vec![playlist("p1", "a"), playlist("p2", "b"), playlist("p3", "c")],
            ..PlaylistSlice::default()
        };
        reduce(
            &mut slice,
            PlaylistOp::Delete {
                id: "p2".into(),
                phase: Phase::Fulfilled(Value::Null),
            },
        );
        assert_eq!(names(&slice), ["a", "c"]);
        assert!(slice.active.is_none());
    }

    #[test]
    fn add_video_replaces_active_only_when_ids_match() {
        let mut slice = PlaylistSlice {
            active: Some(playlist("p1", "a")),
            ..PlaylistSlice::default()
        };
        reduce(&mut slice, PlaylistOp::AddVideo(Phase::Fulfilled(playlist("p9", "other"))));
        assert_eq!(slice.active.as_ref().map(|p| p.name.as_str()), Some("a"));
        reduce(&mut slice, PlaylistOp::RemoveVideo(Phase::Fulfilled(playlist("p1", "fresh"))));
        assert_eq!(slice.active.as_ref().map(|p| p.name.as_str()), Some("fresh"));
    }

    #[test]
    fn update_rewrites_name_on_active_and_listing() {
        let mut slice = PlaylistSlice {
            active: Some(playlist("p1", "a")),
            playlists: vec![playlist("p1", "a"), playlist("p2", "b")],
            ..PlaylistSlice::default()
        };
        let mut updated = playlist("p1", "renamed");
        updated.description = "new".into();
        reduce(
            &mut slice,
            PlaylistOp::Update {
                id: "p1".into(),
                phase: Phase::Fulfilled(updated),
            },
        );
        assert_eq!(names(&slice), ["renamed", "b"]);
        let active = slice.active.as_ref().map(|p| (p.name.as_str(), p.description.as_str()));
        assert_eq!(active, Some(("renamed", "new")));
    }

    #[test]
    fn rejections_change_nothing() {
        let mut slice = PlaylistSlice {
            playlists: vec![playlist("p1", "a")],
            ..PlaylistSlice::default()
        };
        let before = slice.clone();
        reduce(&mut slice, PlaylistOp::FetchUserPlaylists(Phase::Rejected(Failure::default())));
        reduce(
            &mut slice,
            PlaylistOp::Delete {
                id: "p1".into(),
                phase: Phase::Rejected(Failure::default()),
            },
        );
        assert_eq!(slice, before);
    }

    #[test]
    fn form_trims_request_fields() {
        let form = PlaylistForm {
            name: " Mix ".into(),
            description: " chill ".into(),
        };
        let request = form.to_request();
        assert_eq!((request.name.as_str(), request.description.as_str()), ("Mix", "chill"));
    }
}
