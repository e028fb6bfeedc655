use dioxus::prelude::*;
use showroom_io::{AuthContext, Hero, I18n, Language, Navbar, Projects};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Provides the auth and i18n contexts, composes the page sections,
/// and receives the upload widget's completion payload. A completed
/// cycle's render shows up in the project gallery; a full product
/// would redirect to the editor here instead.
fn app() -> Element {
    let _auth = AuthContext::use_provider();
    use_context_provider(|| I18n::new(Language::EnUs));

    let mut rendered = use_signal(|| Option::<String>::None);

    let on_complete = move |data_uri: String| {
        rendered.set(Some(data_uri));
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/showroom.css") }

        // Identity service bridge — exposes the global `puter.auth`
        // object the auth context talks to.
        script { src: "https://js.puter.com/v2/" }

        div { class: "home",
            Navbar {}

            Hero { on_complete }

            Projects { rendered: rendered() }
        }
    }
}
