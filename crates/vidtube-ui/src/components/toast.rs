use crate::core::notify::Toast;
use crate::core::store::AppStore;
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub timeout_ms: u32,
    pub on_dismiss: Callback<u64>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let toasts = use_selector(|store: &AppStore| store.notifications.toasts().to_vec());
    {
        let on_dismiss = props.on_dismiss.clone();
        let timeout_ms = props.timeout_ms;
        use_effect_with_deps(
            move |list: &std::rc::Rc<Vec<Toast>>| {
                let handles: Vec<Timeout> = list
                    .iter()
                    .map(|toast| {
                        let on_dismiss = on_dismiss.clone();
                        let id = toast.id;
                        Timeout::new(timeout_ms, move || on_dismiss.emit(id))
                    })
                    .collect();
                move || drop(handles)
            },
            toasts.clone(),
        );
    }

    html! {
        <div class={classes!("fixed", "bottom-4", "right-4", "space-y-2", "z-50", props.class.clone())} aria-live="polite" aria-atomic="true">
            {for toasts.iter().map(|toast| render_toast(toast, props.on_dismiss.clone()))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>) -> Html {
    let id = toast.id;
    let on_close = Callback::from(move |_: MouseEvent| on_dismiss.emit(id));

    html! {
        <div class={classes!("toast", toast.kind.class())} role="status">
            <span>{toast.message.clone()}</span>
            <button class="ml-2" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
