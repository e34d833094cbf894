use dioxus::prelude::*;
use diagnostix_api::prelude::*;

use super::components::Header;
use crate::Route;
use crate::style;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let model = find_by_path(&path);
    if model.is_none() {
        log::error!("404: no route for {path}");
    }

    rsx! {
        div {
            style: style::PAGE,
            Header {}
            div {
                style: "padding: 96px 16px; text-align: center;",
                if let Some(model) = model {
                    h1 {
                        style: "font-size: 36px; font-weight: bold; margin-bottom: 16px;",
                        "{model.name}"
                    }
                    p {
                        style: "font-size: 18px; color: {style::MUTED}; margin-bottom: 16px;",
                        "{model.name} detection is not available here yet."
                    }
                } else {
                    h1 {
                        style: "font-size: 36px; font-weight: bold; margin-bottom: 16px;",
                        "404"
                    }
                    p {
                        style: "font-size: 20px; color: {style::MUTED}; margin-bottom: 16px;",
                        "Oops! Page not found"
                    }
                }
                Link {
                    style: "color: {style::PRIMARY};",
                    to: Route::IndexView {},
                    "Return to Home"
                }
            }
        }
    }
}
