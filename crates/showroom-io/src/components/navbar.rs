//! Navigation bar with authentication affordances.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdBox;
use fluent::FluentArgs;

use crate::analytics;
use crate::auth::AuthContext;
use crate::components::button::{Button, ButtonVariant};
use crate::i18n::I18n;

/// Fixed header with brand, product links, and sign-in/out actions.
///
/// Reads the shared [`AuthContext`]: signed-in visitors see a greeting
/// and a Log out button, anonymous visitors see Log in and Get
/// Started. The widget never mutates auth state directly; clicks go
/// through the context's capability actions.
#[component]
pub fn Navbar() -> Element {
    let i18n = use_context::<I18n>();
    let auth = use_context::<AuthContext>();
    let state = auth.snapshot();

    let handle_auth = move |_| {
        spawn(async move {
            let mut auth = auth;
            if auth.is_signed_in() {
                if auth.sign_out().await {
                    analytics::track_auth("sign_out");
                }
            } else if auth.sign_in().await {
                analytics::track_auth("sign_in");
            }
        });
    };

    let greeting = state.username.as_ref().map(|name| {
        let mut args = FluentArgs::new();
        args.set("name", name.clone());
        i18n.t_with("navbar-greeting", &args)
    });

    rsx! {
        header { class: "navbar",
            nav { class: "inner",
                div { class: "left",
                    div { class: "brand",
                        span { class: "logo", Icon { width: 22, height: 22, icon: LdBox } }
                        span { class: "name", {i18n.t("navbar-brand")} }
                    }
                    ul { class: "links",
                        li { a { href: "#", {i18n.t("navbar-product")} } }
                        li { a { href: "#", {i18n.t("navbar-pricing")} } }
                        li { a { href: "#", {i18n.t("navbar-community")} } }
                    }
                }
                div { class: "actions",
                    if state.signed_in {
                        if let Some(greeting) = greeting {
                            span { class: "greeting", "{greeting}" }
                        }
                        Button {
                            text: i18n.t("navbar-logout"),
                            variant: ButtonVariant::Cta,
                            on_click: handle_auth,
                        }
                    } else {
                        Button {
                            text: i18n.t("navbar-login"),
                            variant: ButtonVariant::Ghost,
                            on_click: handle_auth,
                        }
                        Button {
                            text: i18n.t("navbar-get-started"),
                            variant: ButtonVariant::Cta,
                        }
                    }
                }
            }
        }
    }
}
