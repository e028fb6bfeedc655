//! Fluent-based localization.
//!
//! Translation strings live as Fluent (FTL) resources per locale;
//! components look them up through an opaque `t(key) -> String`
//! surface. A missing key resolves to the key itself so a dropped
//! entry shows up in the page instead of crashing it.

use std::rc::Rc;

use fluent::{FluentArgs, FluentBundle, FluentResource};
use unic_langid::langid;

pub mod en_us;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (United States). The only shipped locale so far.
    #[default]
    EnUs,
}

/// Shared translation handle, cheap to clone into components.
///
/// Wraps the Fluent bundle in `Rc` because `FluentBundle` itself is
/// neither `Clone` nor needed mutably after construction.
#[derive(Clone)]
pub struct I18n(Rc<FluentBundle<FluentResource>>);

impl I18n {
    /// Build the bundle for a language.
    #[must_use]
    pub fn new(language: Language) -> Self {
        let ftl = match language {
            Language::EnUs => en_us::LANDING,
        };
        // try_new hands back the parsed resource even when some
        // entries contain errors; broken entries are simply dropped.
        let resource =
            FluentResource::try_new(ftl.to_owned()).unwrap_or_else(|(resource, _errors)| resource);

        let locale = match language {
            Language::EnUs => langid!("en-US"),
        };
        let mut bundle = FluentBundle::new(vec![locale]);
        // Keep output free of Unicode isolation marks; every string is
        // rendered whole, never spliced into surrounding text.
        bundle.set_use_isolating(false);
        // Duplicate-id errors cannot occur with a single static resource.
        let _ = bundle.add_resource(resource);
        Self(Rc::new(bundle))
    }

    /// Look up a translation by key.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Look up a translation with interpolated arguments
    /// (e.g. `navbar-greeting` with `$name`).
    #[must_use]
    pub fn t_with(&self, key: &str, args: &FluentArgs) -> String {
        self.format(key, Some(args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let bundle = &self.0;
        let Some(pattern) = bundle.get_message(key).and_then(|m| m.value()) else {
            return key.to_owned();
        };
        let mut errors = Vec::new();
        bundle.format_pattern(pattern, args, &mut errors).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every key the components reference.
    const USED_KEYS: &[&str] = &[
        "navbar-brand",
        "navbar-product",
        "navbar-pricing",
        "navbar-community",
        "navbar-login",
        "navbar-logout",
        "navbar-get-started",
        "navbar-greeting",
        "hero-introducing",
        "hero-title",
        "hero-subtitle",
        "hero-get-started",
        "hero-upload",
        "hero-upload-description",
        "hero-upload-active",
        "hero-upload-inactive",
        "hero-analysing",
        "hero-redirecting",
        "hero-upload-failed",
        "projects-title",
        "projects-description",
        "projects-badge",
        "projects-latest",
    ];

    #[test]
    fn resolves_known_keys() {
        let i18n = I18n::new(Language::EnUs);
        assert_eq!(i18n.t("navbar-brand"), "ShowRoom");
        assert_eq!(i18n.t("navbar-login"), "Log in");
        assert_eq!(i18n.t("hero-analysing"), "Analysing your floor plan...");
    }

    #[test]
    fn every_component_key_is_translated() {
        let i18n = I18n::new(Language::EnUs);
        for key in USED_KEYS {
            assert_ne!(
                i18n.t(key),
                *key,
                "key {key:?} is missing from the en-US resource"
            );
        }
    }

    #[test]
    fn missing_key_falls_back_to_the_key_itself() {
        let i18n = I18n::new(Language::EnUs);
        assert_eq!(i18n.t("navbar-nonexistent"), "navbar-nonexistent");
    }

    #[test]
    fn greeting_interpolates_the_username() {
        let i18n = I18n::new(Language::EnUs);
        let mut args = FluentArgs::new();
        args.set("name", "Sipha");
        assert_eq!(i18n.t_with("navbar-greeting", &args), "Hi, Sipha");
    }
}
