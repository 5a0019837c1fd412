//! Auth-gated wrapper and the login prompt it falls back to.

use crate::app::Route;
use crate::components::button::Button;
use crate::core::gate::{GateView, gate};
use crate::core::store::AppStore;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct AuthLayoutProps {
    #[prop_or(true)]
    pub requires_auth: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AuthLayout)]
pub(crate) fn auth_layout(props: &AuthLayoutProps) -> Html {
    let authenticated = use_selector(|store: &AppStore| store.auth.status);
    match gate(props.requires_auth, *authenticated) {
        GateView::LoginPrompt => html! { <LoginPrompt /> },
        GateView::Content => html! { <>{for props.children.iter()}</> },
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct LoginPromptProps {
    #[prop_or(AttrValue::Static("Login to continue"))]
    pub message: AttrValue,
}

#[function_component(LoginPrompt)]
pub(crate) fn login_prompt(props: &LoginPromptProps) -> Html {
    let navigator = use_navigator();
    let on_login = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.clone() {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <div class="flex flex-col items-center gap-4 mt-20">
            <p class="text-lg">{props.message.clone()}</p>
            <Button class={classes!("bg-purple-500", "px-4", "py-2")} onclick={on_login}>
                {"Login"}
            </Button>
        </div>
    }
}
