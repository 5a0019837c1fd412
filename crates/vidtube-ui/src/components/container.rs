use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ContainerProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Container)]
pub(crate) fn container(props: &ContainerProps) -> Html {
    html! {
        <div class="w-full sm:p-5 p-2 text-white">
            {for props.children.iter()}
        </div>
    }
}
