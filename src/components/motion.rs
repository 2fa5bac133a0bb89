use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::{Presence, Reveal, Variants, Viewport};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe(
    node: &NodeRef,
    viewport: Viewport,
    set_presence: UseStateSetter<Presence>,
) -> Option<(IntersectionObserver, EntriesCallback)> {
    let Some(element) = node.cast::<Element>() else {
        warn!("reveal target was not mounted, leaving it hidden");
        return None;
    };

    let mut reveal = Reveal::new(viewport);
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if reveal.observe(entry.intersection_ratio(), entry.is_intersecting()) {
                set_presence.set(reveal.presence());
            }
        }

        if reveal.is_settled() {
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(viewport.amount));

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            warn!("could not create IntersectionObserver: {:?}", err);
            return None;
        }
    };
    observer.observe(&element);
    debug!("observing <{}> at threshold {}", element.tag_name(), viewport.amount);

    Some((observer, callback))
}

/// Tracks whether the element behind `node` has entered the viewport.
///
/// Always starts out [`Presence::Hidden`], even for elements that are
/// already on screen when mounted; the observer reports them right after
/// the first paint.
#[hook]
pub fn use_in_view(node: NodeRef, viewport: Viewport) -> Presence {
    let presence = use_state(|| Presence::Hidden);

    {
        let set_presence = presence.setter();
        use_effect_with_deps(
            move |(node, viewport): &(NodeRef, Viewport)| {
                let observed = observe(node, *viewport, set_presence);
                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            (node, viewport),
        );
    }

    *presence
}

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    pub variants: Variants,
    /// Position within a staggered group.
    #[prop_or_default]
    pub custom: u32,
    #[prop_or_default]
    pub viewport: Viewport,
    #[prop_or("div")]
    pub tag: &'static str,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// An element that fades into place the first time it is scrolled into view.
#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let node = use_node_ref();
    let presence = use_in_view(node.clone(), props.viewport);
    let style = props.variants.style(presence, props.custom);

    html! {
        <@{props.tag}
            ref={node}
            id={props.id.clone()}
            class={props.class.clone()}
            style={style}
        >
            { for props.children.iter() }
        </@>
    }
}
