//! Shared button with the landing page's visual variants.

use dioxus::prelude::*;

/// Visual style of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Neutral button.
    #[default]
    Default,
    /// Low-emphasis text button (used for Log in).
    Ghost,
    /// Bordered button.
    Outline,
    /// High-emphasis call to action.
    Cta,
}

impl ButtonVariant {
    /// CSS class for the variant.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "btn-default",
            Self::Ghost => "login",
            Self::Outline => "btn-outline",
            Self::Cta => "cta",
        }
    }
}

/// Props for the [`Button`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Button label.
    text: String,
    /// Click handler. A CTA button without one renders as an anchor
    /// link to the upload shell instead of a `<button>`.
    #[props(default)]
    on_click: Option<EventHandler<MouseEvent>>,
    /// Visual variant.
    #[props(default)]
    variant: ButtonVariant,
    /// Whether the button is disabled.
    #[props(default)]
    disabled: bool,
}

/// Landing page button.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = props.variant.class();
    let text = props.text.clone();

    if props.variant == ButtonVariant::Cta && props.on_click.is_none() {
        return rsx! {
            a { class: "{class}", href: "#upload", "{text}" }
        };
    }

    let on_click = props.on_click;
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(ref handler) = on_click {
                    handler.call(evt);
                }
            },
            "{text}"
        }
    }
}
