//! Inline SVG icons

use dioxus::prelude::*;

use launcher_core::Icon;

/// Stroke paths drawn on a 24x24 grid.
const fn icon_path(icon: Icon) -> &'static str {
    match icon {
        Icon::Eye => "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6Z",
        Icon::Terminal => "m4 17 6-6-6-6 M12 19h8",
        Icon::Package => "M21 8 12 3 3 8v8l9 5 9-5Z M3 8l9 5 9-5 M12 13v8",
        Icon::Image => "M3 3h18v18H3Z M21 15l-5-5L5 21 M9 7a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z",
        Icon::Globe => {
            "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20Z M2 12h20 M12 2a15 15 0 0 1 0 20 15 15 0 0 1 0-20Z"
        }
        Icon::Gamepad => {
            "M6 12h4 M8 10v4 M15 13h.01 M18 11h.01 M17.3 5H6.7a4 4 0 0 0-4 3.6L2 15a3 3 0 0 0 5.2 2.1L9 15h6l1.8 2.1A3 3 0 0 0 22 15l-.7-6.4A4 4 0 0 0 17.3 5Z"
        }
        Icon::Cpu => {
            "M4 4h16v16H4Z M9 9h6v6H9Z M9 1v3 M15 1v3 M9 20v3 M15 20v3 M20 9h3 M20 14h3 M1 9h3 M1 14h3"
        }
        Icon::Monitor => "M2 3h20v14H2Z M8 21h8 M12 17v4",
        Icon::Memory => "M2 7h20v9H2Z M6 19v-3 M10 19v-3 M14 19v-3 M18 19v-3",
        Icon::Palette => {
            "M12 2a10 10 0 0 0 0 20c1.1 0 2-.9 2-2 0-.5-.2-1-.5-1.3-.3-.4-.5-.8-.5-1.3 0-1.1.9-2 2-2h2.4A5.6 5.6 0 0 0 22 9.8C22 5.5 17.5 2 12 2Z"
        }
        Icon::Home => "M3 10 12 3l9 7v11H3Z M9 21v-6h6v6",
    }
}

/// Renders a named icon as an inline SVG.
#[component]
pub fn IconGlyph(icon: Icon) -> Element {
    let name = icon.name();
    let stroke = icon_path(icon);

    rsx! {
        svg {
            class: "icon icon-{name}",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            path { d: stroke }
        }
    }
}
