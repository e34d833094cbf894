use dioxus::prelude::*;

use crate::TOASTS;
use crate::dismiss_toast;

#[component]
pub fn Toaster() -> Element {
    rsx! {
        div {
            style: "position: fixed; bottom: 16px; right: 16px; z-index: 100; display: flex; flex-direction: column; gap: 8px; max-width: 420px;",
            for toast in TOASTS.read().iter() {
                div {
                    key: "{toast.id}",
                    style: "padding: 16px; border-radius: 6px; cursor: pointer; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);",
                    style: if toast.is_error() {
                        "background-color: #ef4444; color: white; border: 1px solid #dc2626;"
                    } else {
                        "background-color: white; color: #0f172a; border: 1px solid #e2e8f0;"
                    },
                    onclick: {
                        let id = toast.id;
                        move |_| dismiss_toast(id)
                    },
                    div {
                        style: "font-size: 14px; font-weight: 600;",
                        "{toast.title}"
                    }
                    div {
                        style: "font-size: 14px; opacity: 0.9;",
                        "{toast.description}"
                    }
                }
            }
        }
    }
}
