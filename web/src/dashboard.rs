use dioxus::prelude::*;
use diagnostix_api::prelude::*;

use super::components::Header;
use super::components::IconSvg;
use crate::Route;
use crate::style;
use crate::use_session;

struct Stat {
    title: &'static str,
    value: &'static str,
    caption: &'static str,
    icon: Icon,
}

// Placeholders until detections are recorded somewhere.
const STATS: [Stat; 3] = [
    Stat {
        title: "Total Detections",
        value: "0",
        caption: "No detections yet",
        icon: Icon::TrendingUp,
    },
    Stat {
        title: "Models Used",
        value: "0",
        caption: "Different models accessed",
        icon: Icon::Brain,
    },
    Stat {
        title: "Last Session",
        value: "-",
        caption: "No sessions yet",
        icon: Icon::Calendar,
    },
];

#[component]
pub fn DashboardView() -> Element {
    let navigator = use_navigator();
    let state = use_session().state;

    // runs again whenever the session changes, so signing out anywhere
    // leaves the dashboard
    use_effect(move || {
        if let Gate::Redirect(path) = dashboard_gate(&state.read()) {
            log::debug!("dashboard: no user, redirecting to {path}");
            navigator.replace(Route::from_path(path));
        }
    });

    let display_name = match dashboard_gate(&state.read()) {
        Gate::Loading => {
            return rsx! {
                div {
                    style: "min-height: 100vh; display: flex; align-items: center; justify-content: center;",
                    div {
                        style: "text-align: center;",
                        IconSvg { icon: Icon::Activity, size: 48, color: style::PRIMARY }
                        p {
                            style: "margin-top: 16px; color: {style::MUTED};",
                            "Loading dashboard..."
                        }
                    }
                }
            };
        }
        Gate::Redirect(_) => return rsx! {},
        Gate::Allow(user) => user.display_name().to_string(),
    };

    rsx! {
        div {
            style: style::PAGE,
            Header {}
            div {
                style: "{style::CONTAINER} padding-top: 32px; padding-bottom: 32px;",

                div {
                    style: "margin-bottom: 32px;",
                    h1 {
                        style: "font-size: 30px; font-weight: bold; margin: 0px 0px 8px 0px;",
                        "Welcome back, {display_name}"
                    }
                    p {
                        style: "margin: 0px; color: {style::MUTED};",
                        "Access our AI-powered disease detection models and track your health insights."
                    }
                }

                div {
                    style: "{style::CARD_GRID} margin-bottom: 32px;",
                    for stat in STATS.iter() {
                        div {
                            key: "{stat.title}",
                            style: style::CARD,
                            div {
                                style: "display: flex; flex-direction: row; align-items: center; justify-content: space-between; padding-bottom: 8px;",
                                div {
                                    style: "font-size: 14px; font-weight: 500;",
                                    "{stat.title}"
                                }
                                IconSvg { icon: stat.icon, color: style::MUTED }
                            }
                            div {
                                style: "font-size: 24px; font-weight: bold;",
                                "{stat.value}"
                            }
                            p {
                                style: "margin: 0px; font-size: 12px; color: {style::MUTED};",
                                "{stat.caption}"
                            }
                        }
                    }
                }

                div {
                    style: "margin-bottom: 32px;",
                    h2 {
                        style: "font-size: 24px; font-weight: 600; margin: 0px 0px 24px 0px;",
                        "Disease Detection Models"
                    }
                    div {
                        style: style::CARD_GRID,
                        for model in DISEASE_MODELS.iter() {
                            div {
                                key: "{model.slug}",
                                style: style::CARD,
                                div {
                                    style: "display: flex; align-items: center; gap: 12px;",
                                    div {
                                        style: style::ICON_TILE,
                                        IconSvg { icon: model.icon, size: 24, color: model.accent.hex() }
                                    }
                                    h3 {
                                        style: "margin: 0px; font-size: 18px;",
                                        "{model.name}"
                                    }
                                }
                                p {
                                    style: "color: {style::MUTED}; font-size: 14px;",
                                    "{model.description}"
                                }
                                Link {
                                    to: Route::from_path(model.path),
                                    button {
                                        style: "{style::BUTTON_PRIMARY} width: 100%; justify-content: center;",
                                        "Start Detection"
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    style: style::CARD,
                    h3 {
                        style: "margin: 0px 0px 4px 0px;",
                        "Recent Activity"
                    }
                    p {
                        style: "margin: 0px; color: {style::MUTED}; font-size: 14px;",
                        "Your latest detection sessions and results"
                    }
                    div {
                        style: "text-align: center; padding: 32px 0px; color: {style::MUTED}; display: flex; flex-direction: column; align-items: center;",
                        IconSvg { icon: Icon::Activity, size: 48 }
                        p { "No recent activity" }
                        p {
                            style: "font-size: 14px; margin: 0px;",
                            "Start using our detection models to see your history here."
                        }
                    }
                }
            }
        }
    }
}
