use std::collections::HashMap;

/// Information about a supported language
#[derive(PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// The language the shop crew works in.
pub const DEFAULT_LANGUAGE: &str = "de";

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "de",
            LanguageInfo {
                code: "de",
                flag: "🇩🇪",
                translation: include_str!("../translations/de.json"),
                native_name: "Deutsch",
            },
        ),
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(root: &'a serde_json::Value, dotted: &str) -> Option<&'a str> {
        let mut node = root;
        for part in dotted.split('.') {
            node = node.get(part)?;
        }
        node.as_str()
    }

    /// Test that both bundles parse and agree on the key set the forms use.
    #[test]
    fn test_translation_bundles() {
        for info in supported_languages().values() {
            let parsed: serde_json::Value =
                serde_json::from_str(info.translation).expect("translation bundle parses");
            for key in [
                "app.title",
                "nav.dashboard",
                "form.errors.required",
                "form.errors.positive_number",
                "login.title",
                "pos.checkout",
            ] {
                assert!(
                    lookup(&parsed, key).is_some(),
                    "{} missing {key}",
                    info.code
                );
            }
        }
    }

    /// Test the German messages the shelf form is specified against.
    #[test]
    fn test_german_form_messages() {
        let info = get_language_info("de").expect("german bundle");
        let parsed: serde_json::Value = serde_json::from_str(info.translation).unwrap();
        assert_eq!(lookup(&parsed, "form.errors.required"), Some("Pflichtfeld"));
        assert_eq!(
            lookup(&parsed, "form.errors.positive_number"),
            Some("Muss eine positive Zahl sein")
        );
        assert_eq!(lookup(&parsed, "app.title"), Some("Warenwelt"));
    }

    #[test]
    fn test_default_language_is_supported() {
        assert!(get_language_info(DEFAULT_LANGUAGE).is_some());
        assert!(get_language_info("fr").is_none());
    }
}
