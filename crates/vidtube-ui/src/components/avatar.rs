use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AvatarProps {
    pub src: Option<String>,
    pub username: String,
    #[prop_or_default]
    pub class: Classes,
}

/// Round channel picture linking to the channel's playlists.
#[function_component(Avatar)]
pub(crate) fn avatar(props: &AvatarProps) -> Html {
    let navigator = use_navigator();
    let onclick = {
        let username = props.username.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            if let Some(navigator) = navigator.clone() {
                navigator.push(&Route::ChannelPlaylists {
                    username: username.clone(),
                });
            }
        })
    };

    html! {
        <img
            src={props.src.clone().unwrap_or_default()}
            alt={props.username.clone()}
            class={classes!("rounded-full", "object-cover", "cursor-pointer", "w-8", "h-8", props.class.clone())}
            {onclick}
        />
    }
}
