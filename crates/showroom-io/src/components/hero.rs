//! Animated hero section hosting the upload shell.
//!
//! Entrance choreography is pure CSS: the announce pill, subtitle, and
//! upload shell fade up via stylesheet animations, and the title is
//! split into per-character spans whose reveal is staggered through an
//! inline `animation-delay`.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdArrowRight, LdLayers};

use crate::components::upload::Upload;
use crate::i18n::I18n;

/// Per-character stagger of the title reveal, in milliseconds.
const TITLE_STAGGER_MS: usize = 28;

/// Props for the [`Hero`] component.
#[derive(Props, Clone, PartialEq)]
pub struct HeroProps {
    /// Forwarded to the upload widget; receives the decoded data-URI
    /// when an upload cycle completes.
    on_complete: EventHandler<String>,
}

/// Hero section: announce pill, staggered title, subtitle, CTA, and
/// the upload shell with its grid overlay.
#[component]
pub fn Hero(props: HeroProps) -> Element {
    let i18n = use_context::<I18n>();
    let title = i18n.t("hero-title");
    let chars = title
        .chars()
        .enumerate()
        .map(|(index, ch)| render_title_char(index, ch));

    let on_complete = props.on_complete;

    rsx! {
        section { class: "hero",
            div { class: "announce",
                div { class: "dot", div { class: "pulse" } }
                p { {i18n.t("hero-introducing")} }
            }

            h1 { class: "hero-title", aria_label: "{title}", {chars} }

            p { class: "subtitle", {i18n.t("hero-subtitle")} }

            div { class: "actions",
                a { class: "cta", href: "#upload",
                    {i18n.t("hero-get-started")}
                    span { class: "icon", Icon { width: 16, height: 16, icon: LdArrowRight } }
                }
            }

            div { id: "upload", class: "upload-shell",
                div { class: "grid-overlay" }
                div { class: "upload-card",
                    div { class: "upload-head",
                        div { class: "upload-icon", Icon { width: 18, height: 18, icon: LdLayers } }
                        h3 { {i18n.t("hero-upload")} }
                        p { {i18n.t("hero-upload-description")} }
                    }
                    Upload {
                        on_complete: move |data_uri: String| on_complete.call(data_uri),
                    }
                }
            }
        }
    }
}

/// Render one character of the hero title with its entrance delay.
///
/// Spaces become non-breaking so the flex-wrapped spans keep the
/// original word spacing.
fn render_title_char(index: usize, ch: char) -> Element {
    let class = if ch == ' ' {
        "hero-title-char hero-title-space"
    } else {
        "hero-title-char"
    };
    let delay = index * TITLE_STAGGER_MS;
    let glyph = if ch == ' ' { '\u{a0}' } else { ch };
    rsx! {
        span {
            key: "{index}",
            class: "{class}",
            style: "animation-delay: {delay}ms",
            "{glyph}"
        }
    }
}
