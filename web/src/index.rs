use dioxus::prelude::*;
use diagnostix_api::prelude::*;

use super::components::Header;
use super::components::IconSvg;
use crate::Route;
use crate::style;

const FEATURES: [(Icon, &str, &str); 3] = [
    (
        Icon::Brain,
        "Advanced Chat Bot",
        "An AI-powered chatbot that provides instant support and information, enhancing user engagement and accessibility.",
    ),
    (
        Icon::Shield,
        "EXPLAINABLE AI (XAI)",
        "A branch of AI focused on making model decisions transparent and understandable, helping clinicians trust and interpret predictions with clear visual explanations.",
    ),
    (
        Icon::TrendingUp,
        "Accurate Results",
        "High precision detection with confidence scores and detailed analysis reports",
    ),
];

#[component]
pub fn IndexView() -> Element {
    let stats = [
        ("95%+".to_string(), "Accuracy Rate"),
        (DISEASE_MODELS.len().to_string(), "Disease Models"),
        ("1M+".to_string(), "Analyses Completed"),
        ("24/7".to_string(), "AI Availability"),
    ];

    rsx! {
        div {
            style: style::PAGE,
            Header {}

            // hero
            div {
                style: "background: linear-gradient(135deg, rgba(14, 165, 233, 0.1), #ffffff, rgba(56, 189, 248, 0.05));",
                div {
                    style: "{style::CONTAINER} padding-top: 80px; padding-bottom: 128px; text-align: center;",
                    div {
                        style: "display: inline-flex; align-items: center; gap: 8px; background-color: rgba(14, 165, 233, 0.1); color: {style::PRIMARY}; padding: 8px 16px; border-radius: 9999px; font-size: 14px; font-weight: 500; margin-bottom: 32px;",
                        IconSvg { icon: Icon::Stethoscope }
                        "Advanced AI Healthcare"
                    }
                    h1 {
                        style: "font-size: 56px; font-weight: bold; margin: 0px 0px 24px 0px;",
                        "Multi-Disease"
                        span {
                            style: "display: block; color: {style::PRIMARY};",
                            "Detection System"
                        }
                    }
                    p {
                        style: "font-size: 20px; color: {style::MUTED}; max-width: 672px; margin: 0 auto 32px auto; line-height: 1.6;",
                        "Harness the power of AI to detect and analyze multiple diseases with cutting-edge machine learning models. Fast, accurate, and designed for healthcare professionals."
                    }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 16px; justify-content: center;",
                        Link {
                            to: Route::from_path(AUTH_PATH),
                            button {
                                style: style::BUTTON_LARGE,
                                "Get Started"
                                IconSvg { icon: Icon::ArrowRight, size: 20 }
                            }
                        }
                        Link {
                            to: Route::from_path(DASHBOARD_PATH),
                            button {
                                style: style::BUTTON_OUTLINE,
                                "View Models"
                            }
                        }
                    }
                }
            }

            // models
            div {
                style: "padding: 80px 0px; background-color: #f8fafc;",
                div {
                    style: style::CONTAINER,
                    div {
                        style: "text-align: center; margin-bottom: 64px;",
                        h2 {
                            style: "font-size: 36px; font-weight: bold; margin: 0px 0px 16px 0px;",
                            "AI-Powered Disease Detection"
                        }
                        p {
                            style: "font-size: 18px; color: {style::MUTED}; max-width: 672px; margin: 0 auto;",
                            "Advanced machine learning models for accurate disease detection and analysis"
                        }
                    }
                    div {
                        style: style::CARD_GRID,
                        for model in DISEASE_MODELS.iter() {
                            div {
                                key: "{model.slug}",
                                style: style::CARD,
                                div {
                                    style: "{style::ICON_TILE} margin-bottom: 16px;",
                                    IconSvg { icon: model.icon, size: 24, color: model.accent.hex() }
                                }
                                h3 {
                                    style: "margin: 0px 0px 8px 0px; font-size: 20px;",
                                    "{model.name}"
                                }
                                p {
                                    style: "margin: 0px; color: {style::MUTED}; font-size: 14px;",
                                    "{model.tagline}"
                                }
                            }
                        }
                    }
                }
            }

            // features
            div {
                style: "padding: 80px 0px;",
                div {
                    style: "{style::CONTAINER} {style::CARD_GRID}",
                    for (icon, title, blurb) in FEATURES {
                        div {
                            key: "{title}",
                            style: style::CARD,
                            div {
                                style: "{style::ICON_TILE} margin-bottom: 16px;",
                                IconSvg { icon, size: 24, color: style::PRIMARY }
                            }
                            h3 {
                                style: "margin: 0px 0px 8px 0px; font-size: 20px;",
                                "{title}"
                            }
                            p {
                                style: "margin: 0px; color: {style::MUTED}; font-size: 14px;",
                                "{blurb}"
                            }
                        }
                    }
                }
            }

            // stats
            div {
                style: "padding: 80px 0px; background-color: #f8fafc;",
                div {
                    style: "{style::CONTAINER} display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 32px; max-width: 896px; text-align: center;",
                    for (value, label) in stats {
                        div {
                            key: "{label}",
                            div {
                                style: "font-size: 36px; font-weight: bold; color: {style::PRIMARY}; margin-bottom: 8px;",
                                "{value}"
                            }
                            div {
                                style: "color: {style::MUTED};",
                                "{label}"
                            }
                        }
                    }
                }
            }

            // call to action
            div {
                style: "padding: 80px 0px; background-color: rgba(14, 165, 233, 0.05);",
                div {
                    style: "{style::CONTAINER} text-align: center; max-width: 672px;",
                    h2 {
                        style: "font-size: 36px; font-weight: bold; margin: 0px 0px 16px 0px;",
                        "Ready to Transform Healthcare with AI?"
                    }
                    p {
                        style: "font-size: 18px; color: {style::MUTED}; margin: 0px 0px 32px 0px;",
                        "Join healthcare professionals worldwide using our AI-powered disease detection platform"
                    }
                    Link {
                        to: Route::from_path(AUTH_PATH),
                        button {
                            style: style::BUTTON_LARGE,
                            "Start Detecting Now"
                            IconSvg { icon: Icon::ArrowRight, size: 20 }
                        }
                    }
                }
            }
        }
    }
}
