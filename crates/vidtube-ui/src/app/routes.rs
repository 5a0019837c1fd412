//! Routing definitions for the VidTube UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/watch/:video_id")]
    Watch { video_id: String },
    #[at("/channel/:username/playlists")]
    ChannelPlaylists { username: String },
    #[at("/playlist/:playlist_id")]
    PlaylistDetail { playlist_id: String },
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}
