use crate::app::Route;
use crate::components::avatar::Avatar;
use crate::core::format::{compact_count, format_duration, time_ago};
use chrono::Utc;
use vidtube_api_models::Video;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct VideoCardProps {
    pub video: Video,
}

/// Feed tile: thumbnail with duration badge, title, channel, and age.
#[function_component(VideoCard)]
pub(crate) fn video_card(props: &VideoCardProps) -> Html {
    let navigator = use_navigator();
    let video = &props.video;
    let onclick = {
        let video_id = video.id.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.clone() {
                navigator.push(&Route::Watch {
                    video_id: video_id.clone(),
                });
            }
        })
    };

    let thumbnail = video
        .thumbnail
        .as_ref()
        .map(|media| media.url().to_string())
        .unwrap_or_default();
    let summary = video.owner.as_ref().and_then(|owner| owner.summary());
    let posted = video
        .created_at
        .map(|created| time_ago(created, Utc::now()))
        .unwrap_or_default();

    html! {
        <article class="cursor-pointer space-y-2" {onclick}>
            <div class="relative">
                <img src={thumbnail} alt={video.title.clone()} class="w-full aspect-video object-cover rounded-lg" />
                <span class="absolute bottom-1 right-1 text-xs bg-black/80 px-1 rounded">
                    {format_duration(video.duration)}
                </span>
            </div>
            <div class="flex gap-2">
                {for summary.map(|owner| html! {
                    <Avatar
                        src={owner.avatar.as_ref().map(|media| media.url().to_string())}
                        username={owner.username.clone()}
                    />
                })}
                <div>
                    <h3 class="font-medium line-clamp-2">{video.title.clone()}</h3>
                    {for summary.map(|owner| html! {
                        <p class="text-xs text-slate-400">{owner.username.clone()}</p>
                    })}
                    <p class="text-xs text-slate-400">
                        {format!("{} views · {posted}", compact_count(video.views))}
                    </p>
                </div>
            </div>
        </article>
    }
}
