//! Like control with an optimistic counter.

use crate::app::use_services;
use crate::core::optimistic::OptimisticToggle;
use crate::features::like::api::toggle_like;
use crate::features::like::state::LikeTarget;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LikeProps {
    pub target: LikeTarget,
    pub id: String,
    #[prop_or_default]
    pub is_liked: bool,
    #[prop_or_default]
    pub likes_count: u64,
}

#[function_component(Like)]
pub(crate) fn like(props: &LikeProps) -> Html {
    let services = use_services();
    let shadow = use_mut_ref(|| OptimisticToggle::new(props.is_liked, props.likes_count));
    let rerender = use_force_update();

    {
        let shadow = shadow.clone();
        let rerender = rerender.clone();
        use_effect_with_deps(
            move |(is_liked, likes_count)| {
                shadow.borrow_mut().sync(*is_liked, *likes_count);
                rerender.force_update();
                || ()
            },
            (props.is_liked, props.likes_count),
        );
    }

    let onclick = {
        let shadow = shadow.clone();
        let target = props.target;
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            let token = shadow.borrow_mut().toggle();
            rerender.force_update();
            let Some(services) = services.clone() else {
                return;
            };
            let shadow = shadow.clone();
            let rerender = rerender.clone();
            let id = id.clone();
            yew::platform::spawn_local(async move {
                let succeeded = toggle_like(&services, target, &id).await.is_ok();
                if shadow.borrow_mut().settle(token, succeeded) {
                    rerender.force_update();
                }
            });
        })
    };

    let current = *shadow.borrow();
    html! {
        <div class="flex items-center gap-1">
            <button
                class={classes!("cursor-pointer", current.active().then_some("text-purple-500"))}
                aria-pressed={current.active().to_string()}
                {onclick}
            >
                {"👍"}
            </button>
            <span class="text-xs mr-3">{current.count()}</span>
        </div>
    }
}
