use crate::app::use_services;
use crate::components::button::Button;
use crate::features::composer::{ComposerDraft, ComposerTarget, submit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ComposerProps {
    pub target: ComposerTarget,
    /// Fired after the server accepted the post.
    #[prop_or_default]
    pub on_posted: Callback<()>,
}

/// Single-line composer for tweets and comments.
#[function_component(Composer)]
pub(crate) fn composer(props: &ComposerProps) -> Html {
    let services = use_services();
    let draft = use_state(ComposerDraft::default);
    let sending = use_state(|| false);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                draft.set(ComposerDraft {
                    text: input.value(),
                });
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let sending = sending.clone();
        let target = props.target.clone();
        let on_posted = props.on_posted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(services) = services.clone() else {
                return;
            };
            let form = draft.form();
            let draft = draft.clone();
            let sending = sending.clone();
            let target = target.clone();
            let on_posted = on_posted.clone();
            sending.set(true);
            yew::platform::spawn_local(async move {
                let accepted = submit(&services, &target, &form).await.is_ok();
                let mut next = (*draft).clone();
                next.settle(accepted);
                draft.set(next);
                sending.set(false);
                if accepted {
                    on_posted.emit(());
                }
            });
        })
    };

    html! {
        <form class="flex gap-2 w-full" {onsubmit}>
            <input
                class="flex-1 bg-transparent border-b border-slate-600 outline-none text-sm p-2"
                placeholder={props.target.placeholder()}
                value={draft.text.clone()}
                {oninput}
            />
            <Button r#type="submit" class={classes!("bg-purple-500", "px-3", "text-sm")} disabled={*sending}>
                {"Send"}
            </Button>
        </form>
    }
}
