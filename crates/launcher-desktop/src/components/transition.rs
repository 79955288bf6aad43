//! Animated route transitions

use dioxus::prelude::*;

/// Replays the enter animation whenever `route_key` changes.
///
/// The content is rendered as a one-element keyed list, so a new key
/// unmounts the old subtree and mounts a fresh one with the
/// `route-transition` CSS animation.
#[component]
pub fn RouteTransition(#[props(into)] route_key: String, children: Element) -> Element {
    let keyed = std::iter::once(rsx! {
        div {
            key: "{route_key}",
            class: "route-transition",
            {children}
        }
    });

    rsx! {
        div {
            class: "route-transition-host",
            {keyed}
        }
    }
}
