//! Channel tweet feed.

use crate::app::use_services;
use crate::components::avatar::Avatar;
use crate::components::composer::Composer;
use crate::components::like::Like;
use crate::core::format::time_ago;
use crate::core::store::AppStore;
use crate::features::composer::ComposerTarget;
use crate::features::like::state::LikeTarget;
use crate::features::tweet::api::{delete_tweet, fetch_user_tweets};
use chrono::Utc;
use vidtube_api_models::Tweet;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct ChannelTweetsProps {
    pub user_id: String,
    /// The viewer owns the channel.
    #[prop_or_default]
    pub can_post: bool,
}

#[function_component(ChannelTweets)]
pub(crate) fn channel_tweets(props: &ChannelTweetsProps) -> Html {
    let services = use_services();
    let tweets = use_selector(|store: &AppStore| store.tweet.tweets.clone());

    {
        let services = services.clone();
        use_effect_with_deps(
            move |user_id: &String| {
                if let Some(services) = services {
                    let user_id = user_id.clone();
                    yew::platform::spawn_local(async move {
                        let _ = fetch_user_tweets(&services, &user_id).await;
                    });
                }
                || ()
            },
            props.user_id.clone(),
        );
    }

    let on_delete = Callback::from(move |tweet_id: String| {
        let Some(services) = services.clone() else {
            return;
        };
        yew::platform::spawn_local(async move {
            // Outcome is surfaced as a toast.
            let _ = delete_tweet(&services, &tweet_id).await;
        });
    });

    html! {
        <section class="space-y-3">
            <h2 class="font-semibold">{"Tweets"}</h2>
            if props.can_post {
                <Composer target={ComposerTarget::Tweet} />
            }
            if tweets.is_empty() {
                <p class="text-sm text-slate-400">{"No tweets yet"}</p>
            }
            {for tweets.iter().map(|tweet| html! {
                <TweetItem
                    key={tweet.id.clone()}
                    tweet={tweet.clone()}
                    on_delete={props.can_post.then(|| on_delete.clone())}
                />
            })}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TweetItemProps {
    tweet: Tweet,
    #[prop_or_default]
    on_delete: Option<Callback<String>>,
}

#[function_component(TweetItem)]
fn tweet_item(props: &TweetItemProps) -> Html {
    let tweet = &props.tweet;
    let summary = tweet.owner.as_ref().and_then(|owner| owner.summary());
    let username = summary.map(|s| s.username.clone()).unwrap_or_default();
    let avatar = summary
        .and_then(|s| s.avatar.as_ref())
        .map(|media| media.url().to_string());
    let posted = tweet
        .created_at
        .map(|created| time_ago(created, Utc::now()))
        .unwrap_or_default();
    let delete = props.on_delete.clone().map(|on_delete| {
        let id = tweet.id.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()));
        html! { <button class="text-xs text-red-400" {onclick}>{"Delete"}</button> }
    });

    html! {
        <article class="flex gap-3 border-b border-slate-700 py-2">
            <Avatar src={avatar} username={username.clone()} />
            <div class="flex-1 space-y-1">
                <p class="text-xs text-slate-400">{format!("@{username} · {posted}")}</p>
                <p class="text-sm">{tweet.content.clone()}</p>
                <div class="flex items-center gap-3">
                    <Like
                        target={LikeTarget::Tweet}
                        id={tweet.id.clone()}
                        is_liked={tweet.is_liked}
                        likes_count={tweet.likes_count}
                    />
                    {for delete}
                </div>
            </div>
        </article>
    }
}
