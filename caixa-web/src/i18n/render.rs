use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(lang: &str, count: f64) -> String {
    // Intl folds 0 into "one" for Portuguese; bundles spell out zero themselves.
    if count.abs() < f64::EPSILON {
        return "zero".to_string();
    }

    #[cfg(target_arch = "wasm32")]
    {
        let locales = {
            let arr = Array::new();
            arr.push(&wasm_bindgen::JsValue::from_str(lang));
            arr
        };
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        if let Some(selected) = rules.select(count).as_string() {
            return selected;
        }
    }

    let _ = lang;
    if (count - 1.0).abs() < f64::EPSILON {
        "one".to_string()
    } else {
        "other".to_string()
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let count = args
                .and_then(|m| m.get("count"))
                .and_then(|c| c.parse::<f64>().ok());
            count
                .and_then(|count| {
                    let category = plural_category(lang, count);
                    map.get(&category).or_else(|| {
                        (category == "zero")
                            .then(|| map.get("other"))
                            .flatten()
                    })
                })
                .or_else(|| map.get("_"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}");
            let ph2 = format!("{{{k}}}");
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key)
                    .and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Translate a key to the current language
///
/// Falls back to Portuguese, then to the key itself, when no translation exists.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_selection_defaults() {
        let mut map = serde_json::Map::new();
        map.insert("one".into(), Value::String("{count} item".into()));
        map.insert("other".into(), Value::String("{count} itens".into()));
        let value = Value::Object(map);
        let mut args = BTreeMap::new();
        args.insert("count", "1");
        assert_eq!(render_value(&value, "pt", Some(&args)).unwrap(), "1 item");
        args.insert("count", "3");
        assert_eq!(render_value(&value, "pt", Some(&args)).unwrap(), "3 itens");
    }

    #[test]
    fn zero_count_never_reads_singular() {
        let mut map = serde_json::Map::new();
        map.insert("one".into(), Value::String("{count} item".into()));
        map.insert("other".into(), Value::String("{count} itens".into()));
        let value = Value::Object(map);
        let mut args = BTreeMap::new();
        args.insert("count", "0");
        assert_eq!(render_value(&value, "pt", Some(&args)).unwrap(), "0 itens");

        crate::i18n::set_lang("pt");
        assert_eq!(tr("checkout.cart.count", Some(&args)), "0 itens");
        crate::i18n::set_lang("en");
        assert_eq!(tr("checkout.cart.count", Some(&args)), "0 items");
        crate::i18n::set_lang("pt");
    }

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Olá, {name}! {{name}}!".into());
        let mut args = BTreeMap::new();
        args.insert("name", "Ana");
        let resolved = render_value(&value, "pt", Some(&args)).unwrap();
        assert_eq!(resolved, "Olá, Ana! Ana!");
    }

    #[test]
    fn missing_keys_echo_the_key() {
        crate::i18n::set_lang("pt");
        assert_eq!(t("checkout.nope"), "checkout.nope");
        assert_eq!(t("checkout.save"), "Finalizar Venda");
    }

    #[test]
    fn english_bundle_resolves_catalog_labels() {
        crate::i18n::set_lang("en");
        assert_eq!(t("checkout.catalog.products"), "Products");
        crate::i18n::set_lang("pt");
    }
}
