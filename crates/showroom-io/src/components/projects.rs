//! Community project gallery.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdArrowUpRight, LdClock};

use crate::i18n::I18n;

/// Sample render shown while the visitor has not uploaded anything.
const SAMPLE_RENDER_URL: &str =
    "https://roomify-mlhuk267-dfwu1i.puter.site/projects/1770803585402/rendered.png";

/// Props for the [`Projects`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ProjectsProps {
    /// Data-URI of the visitor's most recent render, shown as an
    /// extra card when present.
    #[props(default)]
    rendered: Option<String>,
}

/// Scroll-in gallery of rendered projects.
///
/// Always shows one sample community card; once an upload cycle has
/// delivered its payload, the fresh render appears as the first card.
#[component]
pub fn Projects(props: ProjectsProps) -> Element {
    let i18n = use_context::<I18n>();

    rsx! {
        section { class: "projects",
            div { class: "section-inner",
                div { class: "section-head",
                    div { class: "copy",
                        h2 { {i18n.t("projects-title")} }
                        p { {i18n.t("projects-description")} }
                    }
                }

                div { class: "projects-grid",
                    if let Some(ref data_uri) = props.rendered {
                        {render_card(&i18n, data_uri, &i18n.t("projects-latest"), "By you")}
                    }
                    {render_card(&i18n, SAMPLE_RENDER_URL, "Project Soweto", "By Sipha")}
                }
            }
        }
    }
}

/// Render a single project card.
fn render_card(i18n: &I18n, src: &str, title: &str, author: &str) -> Element {
    rsx! {
        div { class: "project-card",
            div { class: "preview",
                img { src: "{src}", alt: "preview" }
                div { class: "badge",
                    span { {i18n.t("projects-badge")} }
                }
            }

            div { class: "card-body",
                div {
                    h3 { "{title}" }
                    div { class: "meta",
                        Icon { width: 12, height: 12, icon: LdClock }
                        span { "1/1/2026" }
                        span { "{author}" }
                    }
                }

                div { class: "arrow",
                    Icon { width: 16, height: 16, icon: LdArrowUpRight }
                }
            }
        }
    }
}
