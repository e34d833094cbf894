use dioxus::prelude::*;

use diagnostix_api::prelude::*;

/// Stroke icons drawn on a 24x24 grid.
#[component]
pub fn IconSvg(
    icon: Icon,
    #[props(default = 16)] size: u32,
    #[props(into, default = "currentColor".to_string())] color: String,
) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{color}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            style: "flex-shrink: 0;",
            {shapes(icon)}
        }
    }
}

fn shapes(icon: Icon) -> Element {
    match icon {
        Icon::Activity => rsx! {
            path { d: "M22 12h-4l-3 9L9 3l-3 9H2" }
        },
        Icon::ArrowRight => rsx! {
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        },
        Icon::Brain => rsx! {
            path { d: "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" }
            path { d: "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z" }
        },
        Icon::Calendar => rsx! {
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            line { x1: "16", y1: "2", x2: "16", y2: "6" }
            line { x1: "8", y1: "2", x2: "8", y2: "6" }
            line { x1: "3", y1: "10", x2: "21", y2: "10" }
        },
        Icon::Heart => rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        },
        Icon::LogOut => rsx! {
            path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
            polyline { points: "16 17 21 12 16 7" }
            line { x1: "21", y1: "12", x2: "9", y2: "12" }
        },
        Icon::Shield => rsx! {
            path { d: "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" }
        },
        Icon::Stethoscope => rsx! {
            path { d: "M4.8 2.3A.3.3 0 1 0 5 2H4a2 2 0 0 0-2 2v5a6 6 0 0 0 6 6a6 6 0 0 0 6-6V4a2 2 0 0 0-2-2h-1a.2.2 0 1 0 .3.3" }
            path { d: "M8 15v1a6 6 0 0 0 6 6a6 6 0 0 0 6-6v-4" }
            circle { cx: "20", cy: "10", r: "2" }
        },
        Icon::TrendingUp => rsx! {
            polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
            polyline { points: "16 7 22 7 22 13" }
        },
        Icon::User => rsx! {
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        },
        Icon::Wind => rsx! {
            path { d: "M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2" }
            path { d: "M9.6 4.6A2 2 0 1 1 11 8H2" }
            path { d: "M12.6 19.4A2 2 0 1 0 14 16H2" }
        },
    }
}
