use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

const HEADER_CLASS: &str = "settings-row-header";

/// Shared row layout: icon, title and description, then trailing content.
///
/// When `onclick` is set the row gets the interactive styling and calls the
/// handler once per click, or per Enter/Space press while focused. Without it
/// the row is inert.
#[component]
pub fn SettingsRow(
    #[props(into)] title: String,
    #[props(into)] description: String,
    icon: Element,
    onclick: Option<EventHandler<()>>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let body = rsx! {
        div {
            class: "settings-row-icon",
            {icon}
        }
        div {
            class: "settings-row-info",
            div {
                class: "settings-row-title",
                "{title}"
            }
            div {
                class: "settings-row-description",
                "{description}"
            }
        }
        div {
            class: "settings-row-control",
            {children}
        }
    };

    match onclick {
        Some(handler) => rsx! {
            div {
                class: "settings-row settings-row--interactive",
                role: "button",
                tabindex: "0",
                onclick: move |_| handler.call(()),
                onkeydown: move |event: KeyboardEvent| {
                    if is_activation_key(&event.key()) {
                        event.prevent_default();
                        handler.call(());
                    }
                },
                {body}
            }
        },
        None => rsx! {
            div {
                class: "settings-row",
                {body}
            }
        },
    }
}

/// Keys that press a focused row, matching a native button.
fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(text) => text == " ",
        _ => false,
    }
}

/// Section heading placed above a group of rows.
///
/// A caller-supplied `class` is appended to the default header class; all
/// other attributes are forwarded to the `h3` untouched.
#[component]
pub fn SettingsRowHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let (extra_class, attributes) = take_class(attributes);
    let class = header_class(extra_class.as_deref());

    rsx! {
        h3 {
            class: class,
            ..attributes,
            {children}
        }
    }
}

/// Default header classes followed by the override, if it has any content.
fn header_class(extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{HEADER_CLASS} {extra}"),
        _ => HEADER_CLASS.to_string(),
    }
}

/// Split the `class` attribute out of a spread attribute list.
fn take_class(attributes: Vec<Attribute>) -> (Option<String>, Vec<Attribute>) {
    let mut class = None;
    let mut rest = Vec::with_capacity(attributes.len());
    for attribute in attributes {
        if attribute.name == "class" {
            if let AttributeValue::Text(text) = &attribute.value {
                class = Some(text.clone());
            }
        } else {
            rest.push(attribute);
        }
    }
    (class, rest)
}
