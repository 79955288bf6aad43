use dioxus::prelude::*;

/// On/off badge shown as the trailing content of toggle rows.
#[component]
pub fn ToggleIndicator(checked: bool) -> Element {
    let (class, label) = if checked {
        ("toggle toggle--on", "On")
    } else {
        ("toggle", "Off")
    };

    rsx! {
        span {
            class: class,
            role: "switch",
            "aria-checked": if checked { "true" } else { "false" },
            "{label}"
        }
    }
}
