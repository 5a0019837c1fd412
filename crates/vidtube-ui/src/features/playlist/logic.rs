//! Page-local playlist logic kept out of the views.

use crate::features::playlist::state::PlaylistForm;
use vidtube_api_models::Playlist;

/// Whether the signed-in user may create or delete playlists on a channel.
#[must_use]
pub fn can_manage_playlists(auth_id: Option<&str>, profile_id: Option<&str>) -> bool {
    matches!((auth_id, profile_id), (Some(auth), Some(profile)) if auth == profile)
}

/// Inline name/description editor on the playlist detail page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaylistEditor {
    /// Edit fields are shown.
    pub editing: bool,
    /// Draft name.
    pub name: String,
    /// Draft description.
    pub description: String,
}

impl PlaylistEditor {
    /// Editor seeded from the loaded playlist, closed.
    #[must_use]
    pub fn seeded(playlist: Option<&Playlist>) -> Self {
        let mut editor = Self::default();
        editor.reseed(playlist);
        editor
    }

    /// Refresh the drafts after the playlist reloads.
    pub fn reseed(&mut self, playlist: Option<&Playlist>) {
        if let Some(playlist) = playlist {
            self.name.clone_from(&playlist.name);
            self.description.clone_from(&playlist.description);
        }
    }

    /// Open the edit fields.
    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Close the edit fields and restore the drafts from `playlist`.
    pub fn cancel(&mut self, playlist: Option<&Playlist>) {
        self.editing = false;
        self.reseed(playlist);
    }

    /// Form to submit for the current drafts.
    #[must_use]
    pub fn payload(&self) -> PlaylistForm {
        PlaylistForm {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist() -> Playlist {
        serde_json::from_value(serde_json::json!({"_id": "p1", "name": "Mix", "description": "chill"}))
            .unwrap_or_else(|err| panic!("fixture: {err}"))
    }

    #[test]
    fn ownership_requires_both_ids() {
        assert!(can_manage_playlists(Some("u1"), Some("u1")));
        assert!(!can_manage_playlists(Some("u1"), Some("u2")));
        assert!(!can_manage_playlists(None, None));
        assert!(!can_manage_playlists(Some("u1"), None));
    }

    #[test]
    fn editor_round_trip() {
        let source = playlist();
        let mut editor = PlaylistEditor::seeded(Some(&source));
        assert!(!editor.editing);
        assert_eq!(editor.name, "Mix");

        editor.begin_edit();
        editor.name = "Renamed".into();
        assert_eq!(editor.payload().name, "Renamed");

        editor.cancel(Some(&source));
        assert!(!editor.editing);
        assert_eq!(editor.name, "Mix");
        assert_eq!(editor.description, "chill");
    }

    #[test]
    fn seeding_without_playlist_leaves_blank_drafts() {
        let editor = PlaylistEditor::seeded(None);
        assert_eq!(editor, PlaylistEditor::default());
    }
}
