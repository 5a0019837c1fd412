//! Channel playlists, playlist detail, and the save-to-playlist picker.
//!
//! # Design
//! - Create and delete controls render only for the channel owner.
//! - Listing mutations re-fetch the channel's playlists afterwards.

use crate::app::{Route, use_services};
use crate::components::button::Button;
use crate::components::container::Container;
use crate::components::playlist_card::PlaylistCard;
use crate::components::video_card::VideoCard;
use crate::core::format::compact_count;
use crate::core::store::AppStore;
use crate::features::playlist::api::{
    add_video_to_playlist, create_playlist, delete_playlist, fetch_playlist, fetch_user_playlists,
    remove_video_from_playlist, update_playlist,
};
use crate::features::playlist::logic::{PlaylistEditor, can_manage_playlists};
use crate::features::playlist::state::PlaylistForm;
use crate::features::tweet::view::ChannelTweets;
use crate::features::user::api::fetch_channel_profile;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

fn text_input(placeholder: &'static str, value: &str, on_value: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
            on_value.emit(input.value());
        }
    });
    html! {
        <input
            class="w-full bg-transparent border border-slate-600 p-2 text-sm"
            {placeholder}
            value={value.to_string()}
            {oninput}
        />
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ChannelPlaylistsProps {
    pub username: String,
}

#[function_component(ChannelPlaylists)]
pub(crate) fn channel_playlists(props: &ChannelPlaylistsProps) -> Html {
    let services = use_services();
    let profile = use_selector(|store: &AppStore| store.user.profile.clone());
    let playlists = use_selector(|store: &AppStore| store.playlist.playlists.clone());
    let creating = use_selector(|store: &AppStore| store.playlist.loading);
    let can_manage = *use_selector(|store: &AppStore| {
        can_manage_playlists(store.auth.user_id(), store.user.profile_id())
    });
    let form = use_state(|| None::<PlaylistForm>);

    {
        let services = services.clone();
        use_effect_with_deps(
            move |username: &String| {
                if let Some(services) = services {
                    let username = username.clone();
                    yew::platform::spawn_local(async move {
                        if let Ok(envelope) = fetch_channel_profile(&services, &username).await {
                            let _ = fetch_user_playlists(&services, &envelope.data.user.id).await;
                        }
                    });
                }
                || ()
            },
            props.username.clone(),
        );
    }

    let refresh = {
        let services = services.clone();
        let owner_id = (*profile).as_ref().map(|profile| profile.user.id.clone());
        move || {
            let (Some(services), Some(owner_id)) = (services.clone(), owner_id.clone()) else {
                return;
            };
            yew::platform::spawn_local(async move {
                let _ = fetch_user_playlists(&services, &owner_id).await;
            });
        }
    };

    let on_open = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.set(Some(PlaylistForm::default())))
    };
    let on_close = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.set(None))
    };
    let on_name = {
        let form = form.clone();
        Callback::from(move |name: String| {
            let description = (*form).clone().unwrap_or_default().description;
            form.set(Some(PlaylistForm { name, description }));
        })
    };
    let on_description = {
        let form = form.clone();
        Callback::from(move |description: String| {
            let name = (*form).clone().unwrap_or_default().name;
            form.set(Some(PlaylistForm { name, description }));
        })
    };
    let on_create = {
        let services = services.clone();
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (Some(services), Some(draft)) = (services.clone(), (*form).clone()) else {
                return;
            };
            let form = form.clone();
            let refresh = refresh.clone();
            yew::platform::spawn_local(async move {
                if create_playlist(&services, &draft).await.is_ok() {
                    form.set(None);
                    refresh();
                }
            });
        })
    };
    let on_delete = {
        Callback::from(move |playlist_id: String| {
            let Some(services) = services.clone() else {
                return;
            };
            let refresh = refresh.clone();
            yew::platform::spawn_local(async move {
                if delete_playlist(&services, &playlist_id).await.is_ok() {
                    refresh();
                }
            });
        })
    };

    let header = (*profile).as_ref().map(|profile| {
        let avatar = profile
            .user
            .avatar
            .as_ref()
            .map(|media| media.url().to_string())
            .unwrap_or_default();
        html! {
            <div class="flex gap-3 items-center">
                <img src={avatar} alt={profile.user.username.clone()} class="w-16 h-16 rounded-full object-cover" />
                <div>
                    <h1 class="text-xl font-semibold">{profile.user.full_name.clone()}</h1>
                    <p class="text-sm text-slate-400">
                        {format!(
                            "@{} · {} Subscribers · {} Subscribed",
                            profile.user.username,
                            compact_count(profile.subscribers_count),
                            compact_count(profile.channels_subscribed_to_count),
                        )}
                    </p>
                </div>
            </div>
        }
    });

    let create_form = (*form).as_ref().map(|draft| {
        html! {
            <form class="border border-slate-600 rounded-lg p-3 space-y-2" onsubmit={on_create.clone()}>
                {text_input("Name", &draft.name, on_name.clone())}
                {text_input("Description", &draft.description, on_description.clone())}
                <div class="flex gap-2 justify-end">
                    <Button class={classes!("border", "px-3", "py-1")} onclick={on_close.clone()}>{"Cancel"}</Button>
                    <Button r#type="submit" class={classes!("bg-purple-500", "px-3", "py-1")} disabled={*creating}>
                        {"Create"}
                    </Button>
                </div>
            </form>
        }
    });

    html! {
        <Container>
            <div class="space-y-4">
                {for header}
                if can_manage && form.is_none() {
                    <Button class={classes!("bg-purple-500", "px-3", "py-1")} onclick={on_open}>
                        {"New playlist"}
                    </Button>
                }
                {for create_form}
                if playlists.is_empty() {
                    <p class="text-center text-slate-400">{"No playlists created"}</p>
                }
                <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    {for playlists.iter().map(|playlist| html! {
                        <PlaylistCard
                            key={playlist.id.clone()}
                            playlist={playlist.clone()}
                            on_delete={can_manage.then(|| on_delete.clone())}
                        />
                    })}
                </div>
                {for (*profile).as_ref().map(|profile| html! {
                    <ChannelTweets user_id={profile.user.id.clone()} can_post={can_manage} />
                })}
            </div>
        </Container>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PlaylistDetailProps {
    pub playlist_id: String,
}

#[function_component(PlaylistDetail)]
pub(crate) fn playlist_detail(props: &PlaylistDetailProps) -> Html {
    let services = use_services();
    let navigator = use_navigator();
    let active = use_selector(|store: &AppStore| store.playlist.active.clone());
    let viewer = use_selector(|store: &AppStore| store.auth.user.clone());
    let editor = use_state(|| PlaylistEditor::seeded((*active).as_ref()));

    {
        let services = services.clone();
        use_effect_with_deps(
            move |playlist_id: &String| {
                if let Some(services) = services {
                    let playlist_id = playlist_id.clone();
                    yew::platform::spawn_local(async move {
                        // Failure is recorded as a toast.
                        let _ = fetch_playlist(&services, &playlist_id).await;
                    });
                }
                || ()
            },
            props.playlist_id.clone(),
        );
    }
    {
        let editor = editor.clone();
        use_effect_with_deps(
            move |active| {
                let mut next = (*editor).clone();
                next.reseed((**active).as_ref());
                editor.set(next);
                || ()
            },
            active.clone(),
        );
    }

    let playlist = (*active)
        .as_ref()
        .filter(|playlist| playlist.id == props.playlist_id);
    let owner_id = playlist
        .and_then(|playlist| playlist.owner.as_ref())
        .map(|owner| owner.id().to_string());
    let is_owner = can_manage_playlists(
        (*viewer).as_ref().map(|user| user.id.as_str()),
        owner_id.as_deref(),
    );

    let on_edit = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*editor).clone();
            next.begin_edit();
            editor.set(next);
        })
    };
    let on_cancel = {
        let editor = editor.clone();
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*editor).clone();
            next.cancel((*active).as_ref());
            editor.set(next);
        })
    };
    let on_name = {
        let editor = editor.clone();
        Callback::from(move |name: String| {
            editor.set(PlaylistEditor {
                name,
                ..(*editor).clone()
            });
        })
    };
    let on_description = {
        let editor = editor.clone();
        Callback::from(move |description: String| {
            editor.set(PlaylistEditor {
                description,
                ..(*editor).clone()
            });
        })
    };
    let on_save = {
        let services = services.clone();
        let editor = editor.clone();
        let playlist_id = props.playlist_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(services) = services.clone() else {
                return;
            };
            let form = editor.payload();
            let editor = editor.clone();
            let playlist_id = playlist_id.clone();
            yew::platform::spawn_local(async move {
                if update_playlist(&services, &playlist_id, &form).await.is_ok() {
                    editor.set(PlaylistEditor {
                        editing: false,
                        ..(*editor).clone()
                    });
                }
            });
        })
    };
    let on_delete = {
        let services = services.clone();
        let playlist_id = props.playlist_id.clone();
        let username = (*viewer).as_ref().map(|user| user.username.clone());
        Callback::from(move |_: MouseEvent| {
            let Some(services) = services.clone() else {
                return;
            };
            let playlist_id = playlist_id.clone();
            let navigator = navigator.clone();
            let username = username.clone();
            yew::platform::spawn_local(async move {
                if delete_playlist(&services, &playlist_id).await.is_ok()
                    && let Some(navigator) = navigator
                {
                    match username {
                        Some(username) => navigator.push(&Route::ChannelPlaylists { username }),
                        None => navigator.push(&Route::Home),
                    }
                }
            });
        })
    };
    let on_remove = {
        let playlist_id = props.playlist_id.clone();
        Callback::from(move |video_id: String| {
            let Some(services) = services.clone() else {
                return;
            };
            let playlist_id = playlist_id.clone();
            yew::platform::spawn_local(async move {
                let _ = remove_video_from_playlist(&services, &video_id, &playlist_id).await;
            });
        })
    };

    let Some(playlist) = playlist else {
        return html! {
            <Container>
                <p class="text-center text-slate-400">{"Loading playlist..."}</p>
            </Container>
        };
    };

    let heading = if editor.editing {
        html! {
            <form class="space-y-2" onsubmit={on_save}>
                {text_input("Name", &editor.name, on_name)}
                {text_input("Description", &editor.description, on_description)}
                <div class="flex gap-2">
                    <Button r#type="submit" class={classes!("bg-purple-500", "px-3", "py-1")}>{"Save"}</Button>
                    <Button class={classes!("border", "px-3", "py-1")} onclick={on_cancel}>{"Cancel"}</Button>
                </div>
            </form>
        }
    } else {
        html! {
            <div class="flex justify-between items-start">
                <div>
                    <h1 class="text-2xl font-semibold">{playlist.name.clone()}</h1>
                    <p class="text-sm text-slate-400">{playlist.description.clone()}</p>
                    <p class="text-xs text-slate-500">
                        {format!("{} videos · {} views", playlist.total_videos, compact_count(playlist.total_views))}
                    </p>
                </div>
                if is_owner {
                    <div class="flex gap-2">
                        <Button class={classes!("border", "px-3", "py-1")} onclick={on_edit}>{"Edit"}</Button>
                        <Button class={classes!("bg-red-500", "px-3", "py-1")} onclick={on_delete}>{"Delete"}</Button>
                    </div>
                }
            </div>
        }
    };

    html! {
        <Container>
            <div class="space-y-4">
                {heading}
                if playlist.videos.is_empty() {
                    <p class="text-center text-slate-400">{"No videos in this playlist"}</p>
                }
                <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    {for playlist.videos.iter().map(|video| {
                        let on_remove = on_remove.clone();
                        let video_id = video.id.clone();
                        let onclick = Callback::from(move |_: MouseEvent| on_remove.emit(video_id.clone()));
                        html! {
                            <div key={video.id.clone()} class="space-y-1">
                                <VideoCard video={video.clone()} />
                                if is_owner {
                                    <button class="text-xs text-red-400" {onclick}>{"Remove"}</button>
                                }
                            </div>
                        }
                    })}
                </div>
            </div>
        </Container>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SaveToPlaylistProps {
    pub video_id: String,
}

/// Picker listing the viewer's playlists for the video being watched.
#[function_component(SaveToPlaylist)]
pub(crate) fn save_to_playlist(props: &SaveToPlaylistProps) -> Html {
    let services = use_services();
    let viewer_id = use_selector(|store: &AppStore| store.auth.user_id().map(str::to_string));
    let playlists = use_selector(|store: &AppStore| store.playlist.playlists.clone());
    let open = use_state(|| false);

    let on_toggle = {
        let services = services.clone();
        let open = open.clone();
        let viewer_id = viewer_id.clone();
        Callback::from(move |_: MouseEvent| {
            let opening = !*open;
            open.set(opening);
            let (true, Some(services), Some(viewer_id)) =
                (opening, services.clone(), (*viewer_id).clone())
            else {
                return;
            };
            yew::platform::spawn_local(async move {
                let _ = fetch_user_playlists(&services, &viewer_id).await;
            });
        })
    };

    if viewer_id.is_none() {
        return Html::default();
    }

    let entries = playlists.iter().map(|playlist| {
        let services = services.clone();
        let open = open.clone();
        let video_id = props.video_id.clone();
        let playlist_id = playlist.id.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            let Some(services) = services.clone() else {
                return;
            };
            let open = open.clone();
            let video_id = video_id.clone();
            let playlist_id = playlist_id.clone();
            yew::platform::spawn_local(async move {
                if add_video_to_playlist(&services, &video_id, &playlist_id).await.is_ok() {
                    open.set(false);
                }
            });
        });
        html! {
            <li key={playlist.id.clone()}>
                <button class="w-full text-left text-sm px-2 py-1 hover:bg-slate-700" {onclick}>
                    {playlist.name.clone()}
                </button>
            </li>
        }
    });

    html! {
        <div class="relative">
            <Button class={classes!("border", "px-3", "py-1", "text-sm")} onclick={on_toggle}>{"Save"}</Button>
            if *open {
                <ul class="absolute right-0 mt-1 w-48 bg-[#222222] border border-slate-600 rounded z-30">
                    {for entries}
                </ul>
            }
        </div>
    }
}
