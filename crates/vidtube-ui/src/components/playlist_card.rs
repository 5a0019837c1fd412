use crate::app::Route;
use crate::core::format::time_ago;
use chrono::Utc;
use vidtube_api_models::Playlist;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PlaylistCardProps {
    pub playlist: Playlist,
    /// Delete control; rendered only for the owner.
    #[prop_or_default]
    pub on_delete: Option<Callback<String>>,
}

/// Playlist tile using the first video's thumbnail as cover.
#[function_component(PlaylistCard)]
pub(crate) fn playlist_card(props: &PlaylistCardProps) -> Html {
    let playlist = &props.playlist;
    let cover = playlist
        .videos
        .first()
        .and_then(|video| video.thumbnail.as_ref())
        .map(|media| media.url().to_string());
    let updated = playlist
        .updated_at
        .map(|at| time_ago(at, Utc::now()))
        .unwrap_or_default();

    let delete = props.on_delete.clone().map(|on_delete| {
        let id = playlist.id.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_delete.emit(id.clone());
        });
        html! {
            <button class="text-xs text-red-400" {onclick}>{"Delete"}</button>
        }
    });

    html! {
        <Link<Route> to={Route::PlaylistDetail { playlist_id: playlist.id.clone() }} classes="block space-y-2">
            <div class="relative w-full aspect-video bg-[#222222] rounded-lg overflow-hidden">
                {for cover.map(|src| html! { <img {src} alt={playlist.name.clone()} class="w-full h-full object-cover" /> })}
                <span class="absolute bottom-1 right-1 text-xs bg-black/80 px-1 rounded">
                    {format!("{} videos", playlist.total_videos)}
                </span>
            </div>
            <div class="flex justify-between items-start">
                <div>
                    <h3 class="font-medium">{playlist.name.clone()}</h3>
                    <p class="text-xs text-slate-400">{playlist.description.clone()}</p>
                    <p class="text-xs text-slate-500">{updated}</p>
                </div>
                {for delete}
            </div>
        </Link<Route>>
    }
}
