use serde_json::Value;

/// Locale used at startup and as the fallback for missing keys.
pub const DEFAULT_LANG: &str = "pt";

pub const LOCALE_TABLE: &[(&str, &str)] = &[
    ("pt", include_str!("../../i18n/pt.json")),
    ("en", include_str!("../../i18n/en.json")),
];

pub(super) fn is_supported(lang: &str) -> bool {
    LOCALE_TABLE.iter().any(|(code, _)| *code == lang)
}

pub(super) fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_table_entry_parses() {
        for (code, _) in LOCALE_TABLE {
            assert!(is_supported(code));
            let value = load_translations(code).expect("locale should parse");
            assert!(value.get("checkout").is_some(), "{code} lacks checkout keys");
        }
    }

    #[test]
    fn unknown_locale_loads_default_table() {
        assert_eq!(load_translations("xx"), load_translations(DEFAULT_LANG));
        assert!(!is_supported("xx"));
    }
}
