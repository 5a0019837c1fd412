//! Watch-page description panel with channel info and subscribe button.

use crate::app::use_services;
use crate::components::avatar::Avatar;
use crate::components::button::Button;
use crate::components::like::Like;
use crate::core::format::{compact_count, time_ago};
use crate::core::optimistic::OptimisticToggle;
use crate::features::like::state::LikeTarget;
use crate::features::subscription::api::toggle_subscription;
use chrono::Utc;
use vidtube_api_models::Video;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DescriptionProps {
    pub video: Video,
    #[prop_or_default]
    pub is_subscribed: bool,
    #[prop_or_default]
    pub subscribers_count: u64,
}

#[function_component(Description)]
pub(crate) fn description(props: &DescriptionProps) -> Html {
    let services = use_services();
    let shadow =
        use_mut_ref(|| OptimisticToggle::new(props.is_subscribed, props.subscribers_count));
    let rerender = use_force_update();
    let expanded = use_state(|| false);

    {
        let shadow = shadow.clone();
        let rerender = rerender.clone();
        use_effect_with_deps(
            move |(subscribed, count)| {
                shadow.borrow_mut().sync(*subscribed, *count);
                rerender.force_update();
                || ()
            },
            (props.is_subscribed, props.subscribers_count),
        );
    }

    let owner = props.video.owner.as_ref();
    let channel_id = owner.map(|owner| owner.id().to_string()).unwrap_or_default();
    let summary = owner.and_then(|owner| owner.summary());

    let on_subscribe = {
        let shadow = shadow.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            let token = shadow.borrow_mut().toggle();
            rerender.force_update();
            let Some(services) = services.clone() else {
                return;
            };
            let shadow = shadow.clone();
            let rerender = rerender.clone();
            let channel_id = channel_id.clone();
            yew::platform::spawn_local(async move {
                let succeeded = toggle_subscription(&services, &channel_id).await.is_ok();
                if shadow.borrow_mut().settle(token, succeeded) {
                    rerender.force_update();
                }
            });
        })
    };

    let toggle_expanded = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let video = &props.video;
    let posted = video
        .created_at
        .map(|created| time_ago(created, Utc::now()))
        .unwrap_or_default();
    let current = *shadow.borrow();
    let username = summary.map(|s| s.username.clone()).unwrap_or_default();
    let avatar = summary
        .and_then(|s| s.avatar.as_ref())
        .map(|media| media.url().to_string());

    html! {
        <section class="border border-slate-600 rounded-xl p-3 space-y-3">
            <div class="flex justify-between items-start">
                <div>
                    <h1 class="sm:text-2xl font-semibold">{video.title.clone()}</h1>
                    <p class="text-xs text-slate-400">
                        {format!("{} views · {posted}", compact_count(video.views))}
                    </p>
                </div>
                <Like
                    target={LikeTarget::Video}
                    id={video.id.clone()}
                    is_liked={video.is_liked.unwrap_or_default()}
                    likes_count={video.likes_count.unwrap_or_default()}
                />
            </div>
            <div class="flex justify-between items-center">
                <div class="flex gap-2 items-center">
                    <Avatar src={avatar} username={username.clone()} class={classes!("w-10", "h-10")} />
                    <div>
                        <p class="font-medium">{username}</p>
                        <p class="text-xs text-slate-400">
                            {format!("{} Subscribers", compact_count(current.count()))}
                        </p>
                    </div>
                </div>
                <Button
                    class={classes!("border-slate-500", "px-3", "py-2", if current.active() { "bg-[#222222]" } else { "bg-purple-500" })}
                    onclick={on_subscribe}
                >
                    {if current.active() { "Subscribed" } else { "Subscribe" }}
                </Button>
            </div>
            <p
                class={classes!("text-xs", "bg-[#222222]", "rounded-lg", "p-2", "cursor-pointer", (!*expanded).then_some("line-clamp-2"))}
                onclick={toggle_expanded}
            >
                {video.description.clone()}
            </p>
        </section>
    }
}
