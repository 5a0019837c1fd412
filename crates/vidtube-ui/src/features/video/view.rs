//! Home feed and watch page.
//!
//! # Design
//! - Both pages page through results with an intersection sentinel.
//! - The watch page drops its comments when it unmounts or switches video.

use crate::app::{use_page_limit, use_services};
use crate::components::avatar::Avatar;
use crate::components::composer::Composer;
use crate::components::container::Container;
use crate::components::description::Description;
use crate::components::infinite_scroll::InfiniteScroll;
use crate::components::like::Like;
use crate::components::video_card::VideoCard;
use crate::core::format::time_ago;
use crate::core::scroll::next_page;
use crate::core::store::AppStore;
use crate::core::validation::ContentForm;
use crate::features::comment::api::{
    clean_up_comments, delete_comment, edit_comment, fetch_comments,
};
use crate::features::composer::ComposerTarget;
use crate::features::like::state::LikeTarget;
use crate::features::playlist::view::SaveToPlaylist;
use crate::features::video::api::{clear_videos, fetch_video, fetch_videos};
use chrono::Utc;
use vidtube_api_models::{Comment, PageQuery, VideoQuery};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(HomeFeed)]
pub(crate) fn home_feed() -> Html {
    let services = use_services();
    let limit = use_page_limit();
    let videos = use_selector(|store: &AppStore| store.video.videos.clone());
    let loading = use_selector(|store: &AppStore| store.video.loading);
    let loaded = use_mut_ref(|| 0_u32);

    let load_page = {
        let services = services.clone();
        let loaded = loaded.clone();
        Callback::from(move |()| {
            let Some(services) = services.clone() else {
                return;
            };
            let loaded = loaded.clone();
            let page = next_page(*loaded.borrow());
            yew::platform::spawn_local(async move {
                let query = VideoQuery {
                    page: Some(page),
                    limit: Some(limit),
                    ..VideoQuery::default()
                };
                if fetch_videos(&services, &query).await.is_ok() {
                    *loaded.borrow_mut() = page;
                }
            });
        })
    };

    {
        let load_page = load_page.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(services) = services.as_ref() {
                    clear_videos(services);
                }
                *loaded.borrow_mut() = 0;
                load_page.emit(());
                || ()
            },
            (),
        );
    }

    html! {
        <Container>
            <InfiniteScroll has_next_page={videos.has_next_page} busy={*loading} fetch_more={load_page}>
                <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    {for videos.docs.iter().map(|video| html! {
                        <VideoCard key={video.id.clone()} video={video.clone()} />
                    })}
                </div>
            </InfiniteScroll>
            if *loading {
                <p class="text-center text-sm text-slate-400 mt-4">{"Loading..."}</p>
            }
        </Container>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct WatchPageProps {
    pub video_id: String,
}

#[function_component(WatchPage)]
pub(crate) fn watch_page(props: &WatchPageProps) -> Html {
    let services = use_services();
    let limit = use_page_limit();
    let video = use_selector(|store: &AppStore| store.video.current.clone());
    let comments = use_selector(|store: &AppStore| store.comment.comments.clone());
    let total_comments = use_selector(|store: &AppStore| store.comment.total_comments);
    let has_next_page = use_selector(|store: &AppStore| store.comment.has_next_page);
    let comments_loading = use_selector(|store: &AppStore| store.comment.loading);
    let loaded = use_mut_ref(|| 0_u32);

    let load_comments = {
        let services = services.clone();
        let loaded = loaded.clone();
        let video_id = props.video_id.clone();
        Callback::from(move |()| {
            let Some(services) = services.clone() else {
                return;
            };
            let loaded = loaded.clone();
            let video_id = video_id.clone();
            let page = next_page(*loaded.borrow());
            yew::platform::spawn_local(async move {
                let query = PageQuery {
                    page: Some(page),
                    limit: Some(limit),
                };
                if fetch_comments(&services, &video_id, query).await.is_ok() {
                    *loaded.borrow_mut() = page;
                }
            });
        })
    };

    {
        let load_comments = load_comments.clone();
        let services = services.clone();
        use_effect_with_deps(
            move |video_id: &String| {
                if let Some(services) = services.clone() {
                    clean_up_comments(&services);
                    let video_id = video_id.clone();
                    yew::platform::spawn_local(async move {
                        // Failure is recorded in the video slice.
                        let _ = fetch_video(&services, &video_id).await;
                    });
                }
                *loaded.borrow_mut() = 0;
                load_comments.emit(());
                move || {
                    if let Some(services) = services {
                        clean_up_comments(&services);
                    }
                }
            },
            props.video_id.clone(),
        );
    }

    let player = (*video)
        .as_ref()
        .filter(|video| video.id == props.video_id)
        .map(|video| {
            let src = video
                .video_file
                .as_ref()
                .map(|media| media.url().to_string())
                .unwrap_or_default();
            let owner = video.owner.as_ref().and_then(|owner| owner.summary());
            html! {
                <>
                    <video {src} controls={true} autoplay={true} class="w-full rounded-lg max-h-[70vh]"></video>
                    <div class="flex justify-end">
                        <SaveToPlaylist video_id={video.id.clone()} />
                    </div>
                    <Description
                        video={video.clone()}
                        is_subscribed={owner.and_then(|owner| owner.is_subscribed).unwrap_or_default()}
                        subscribers_count={owner.and_then(|owner| owner.subscribers_count).unwrap_or_default()}
                    />
                </>
            }
        });

    html! {
        <Container>
            <div class="space-y-4 max-w-4xl mx-auto">
                {for player}
                <section class="space-y-3">
                    <h2 class="font-semibold">{format!("{} Comments", *total_comments)}</h2>
                    <Composer target={ComposerTarget::Comment { video_id: props.video_id.clone() }} />
                    <InfiniteScroll has_next_page={*has_next_page} busy={*comments_loading} fetch_more={load_comments}>
                        {for comments.iter().map(|comment| html! {
                            <CommentItem key={comment.id.clone()} comment={comment.clone()} />
                        })}
                    </InfiniteScroll>
                </section>
            </div>
        </Container>
    }
}

#[derive(Properties, PartialEq)]
struct CommentItemProps {
    comment: Comment,
}

#[function_component(CommentItem)]
fn comment_item(props: &CommentItemProps) -> Html {
    let services = use_services();
    let viewer = use_selector(|store: &AppStore| store.auth.user_id().map(str::to_string));
    let draft = use_state(|| None::<String>);
    let comment = &props.comment;
    let owner = comment.owner.as_ref();
    let summary = owner.and_then(|owner| owner.summary());
    let is_author = owner.is_some_and(|owner| (*viewer).as_deref() == Some(owner.id()));

    let on_edit = {
        let draft = draft.clone();
        let content = comment.content.clone();
        Callback::from(move |_: MouseEvent| draft.set(Some(content.clone())))
    };
    let on_cancel = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.set(None))
    };
    let on_draft = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                draft.set(Some(input.value()));
            }
        })
    };
    let on_save = {
        let services = services.clone();
        let draft = draft.clone();
        let id = comment.id.clone();
        Callback::from(move |_: MouseEvent| {
            let (Some(services), Some(text)) = (services.clone(), (*draft).clone()) else {
                return;
            };
            let draft = draft.clone();
            let id = id.clone();
            yew::platform::spawn_local(async move {
                if edit_comment(&services, &id, &ContentForm::new(text)).await.is_ok() {
                    draft.set(None);
                }
            });
        })
    };
    let on_delete = {
        let id = comment.id.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(services) = services.clone() else {
                return;
            };
            let id = id.clone();
            yew::platform::spawn_local(async move {
                // Outcome is surfaced as a toast.
                let _ = delete_comment(&services, &id).await;
            });
        })
    };

    let posted = comment
        .created_at
        .map(|created| time_ago(created, Utc::now()))
        .unwrap_or_default();
    let username = summary.map(|s| s.username.clone()).unwrap_or_default();
    let avatar = summary
        .and_then(|s| s.avatar.as_ref())
        .map(|media| media.url().to_string());

    let body = match &*draft {
        Some(text) => html! {
            <div class="flex gap-2">
                <input class="flex-1 bg-transparent border-b border-slate-600 text-sm" value={text.clone()} oninput={on_draft} />
                <button class="text-xs" onclick={on_save}>{"Save"}</button>
                <button class="text-xs" onclick={on_cancel}>{"Cancel"}</button>
            </div>
        },
        None => html! { <p class="text-sm">{comment.content.clone()}</p> },
    };

    html! {
        <article class="flex gap-3 border-b border-slate-700 py-2">
            <Avatar src={avatar} username={username.clone()} />
            <div class="flex-1 space-y-1">
                <p class="text-xs text-slate-400">{format!("@{username} · {posted}")}</p>
                {body}
                <div class="flex items-center gap-3">
                    <Like
                        target={LikeTarget::Comment}
                        id={comment.id.clone()}
                        is_liked={comment.is_liked}
                        likes_count={comment.likes_count}
                    />
                    if is_author && draft.is_none() {
                        <button class="text-xs" onclick={on_edit}>{"Edit"}</button>
                        <button class="text-xs text-red-400" onclick={on_delete}>{"Delete"}</button>
                    }
                </div>
            </div>
        </article>
    }
}
