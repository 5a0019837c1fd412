use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub r#type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={props.r#type.clone()}
            class={classes!("hover:scale-110", "transition-all", "duration-300", props.class.clone())}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            {for props.children.iter()}
        </button>
    }
}
