//! Sentinel-driven pagination wrapper.

use crate::core::scroll::should_fetch_more;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct InfiniteScrollProps {
    pub has_next_page: bool,
    #[prop_or_default]
    pub busy: bool,
    pub fetch_more: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(InfiniteScroll)]
pub(crate) fn infinite_scroll(props: &InfiniteScrollProps) -> Html {
    let sentinel = use_node_ref();
    let fetch_more = use_mut_ref(|| props.fetch_more.clone());
    *fetch_more.borrow_mut() = props.fetch_more.clone();

    // Rebuilt whenever paging state changes: a fresh observer reports the
    // sentinel's current visibility, which catches a sentinel that never
    // left the viewport.
    {
        let sentinel = sentinel.clone();
        use_effect_with_deps(
            move |&(has_next_page, busy): &(bool, bool)| {
                let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                    move |entries: Array, _observer: IntersectionObserver| {
                        let intersecting = entries
                            .iter()
                            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                            .any(|entry| entry.is_intersecting());
                        if should_fetch_more(intersecting, has_next_page, busy) {
                            fetch_more.borrow().emit(());
                        }
                    },
                );
                let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()).ok();
                if let (Some(observer), Some(element)) = (&observer, sentinel.cast::<Element>()) {
                    observer.observe(&element);
                }
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(on_intersect);
                }
            },
            (props.has_next_page, props.busy),
        );
    }

    html! {
        <>
            {for props.children.iter()}
            <div ref={sentinel} class="h-4 w-full"></div>
        </>
    }
}
