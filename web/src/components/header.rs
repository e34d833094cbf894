use dioxus::prelude::*;

use diagnostix_api::prelude::*;

use super::IconSvg;
use crate::Route;
use crate::show_toast;
use crate::style;
use crate::use_session;

#[component]
pub fn Header() -> Element {
    let session = use_session();
    let mut menu_open = use_signal(|| false);
    let cluster = ActionCluster::for_state(&session.state.read());

    rsx! {
        div {
            style: "position: sticky; top: 0; z-index: 50; width: 100%; border-bottom: 1px solid #e2e8f0; background-color: rgba(255, 255, 255, 0.95);",
            div {
                style: "{style::CONTAINER} padding-top: 16px; padding-bottom: 16px; display: flex; flex-direction: row; align-items: center; justify-content: space-between;",
                Link {
                    style: "{style::LINK_RESET} display: flex; align-items: center; gap: 8px;",
                    to: Route::IndexView {},
                    IconSvg { icon: Icon::Stethoscope, size: 32, color: style::PRIMARY }
                    span {
                        style: "font-size: 20px; font-weight: bold; color: {style::PRIMARY};",
                        "DiagnostiX"
                    }
                }
                div {
                    style: "position: relative;",
                    onmouseleave: move |_| menu_open.set(false),
                    button {
                        style: style::BUTTON_GHOST,
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(!open);
                        },
                        onmouseenter: move |_| menu_open.set(true),
                        "Disease Models"
                    }
                    if menu_open() {
                        div {
                            style: "position: absolute; left: 50%; transform: translateX(-50%); top: 100%; width: 520px; display: grid; grid-template-columns: 1fr 1fr; gap: 12px; padding: 16px; background-color: white; border: 1px solid #e2e8f0; border-radius: 8px; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);",
                            for model in DISEASE_MODELS.iter() {
                                Link {
                                    key: "{model.slug}",
                                    style: "{style::LINK_RESET} display: block; padding: 12px; border-radius: 6px;",
                                    to: Route::from_path(model.path),
                                    onclick: move |_| menu_open.set(false),
                                    div {
                                        style: "display: flex; align-items: center; gap: 8px;",
                                        IconSvg { icon: model.icon, color: model.accent.hex() }
                                        div {
                                            style: "font-size: 14px; font-weight: 500;",
                                            "{model.name}"
                                        }
                                    }
                                    p {
                                        style: "margin: 4px 0px 0px 0px; font-size: 14px; color: {style::MUTED};",
                                        "{model.menu_blurb()}"
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    for action in cluster.actions() {
                        ActionButton { key: "{action:?}", action }
                    }
                }
            }
        }
    }
}

#[component]
fn ActionButton(action: HeaderAction) -> Element {
    let session = use_session();
    let navigator = use_navigator();

    match action {
        HeaderAction::Navigate {
            label,
            path,
            icon,
            primary,
        } => rsx! {
            button {
                style: if primary { style::BUTTON_PRIMARY } else { style::BUTTON_GHOST },
                onclick: move |_| {
                    navigator.push(Route::from_path(path));
                },
                if let Some(icon) = icon {
                    IconSvg { icon }
                }
                "{label}"
            }
        },
        HeaderAction::SignOut { label, icon } => rsx! {
            button {
                style: style::BUTTON_GHOST,
                onclick: move |_| {
                    let mirror = session.mirror.clone();
                    spawn(async move {
                        let report = mirror.sign_out().await;
                        show_toast(report.toast);
                        if let Some(path) = report.redirect {
                            navigator.push(Route::from_path(path));
                        }
                    });
                },
                IconSvg { icon }
                "{label}"
            }
        },
    }
}
