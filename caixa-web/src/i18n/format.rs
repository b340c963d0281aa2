#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Intl, Object};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

fn split_cents(cents: i64) -> (&'static str, u64, u64) {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    (sign, abs / 100, abs % 100)
}

/// Currency with a point decimal separator, as printed on cart lines: `R$ 10.00`.
#[must_use]
pub fn fmt_brl_plain(cents: i64) -> String {
    let (sign, whole, frac) = split_cents(cents);
    format!("R$ {sign}{whole}.{frac:02}")
}

/// Currency in Brazilian notation, as printed on the totals footer: `R$ 45,00`.
#[must_use]
pub fn fmt_brl(cents: i64) -> String {
    let (sign, whole, frac) = split_cents(cents);
    format!("R$ {sign}{whole},{frac:02}")
}

/// Discount as echoed back into its input field. NaN shows as an empty field.
#[must_use]
pub fn fmt_discount(discount: f64) -> String {
    if discount.is_nan() {
        String::new()
    } else if discount.is_infinite() {
        if discount.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        }
    } else {
        discount.to_string()
    }
}

/// Format a number using the current locale via Intl
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let locales = {
                let arr = js_sys::Array::new();
                arr.push(&JsValue::from_str(&bundle.lang));
                arr
            };
            let nf = Intl::NumberFormat::new(&locales, &Object::new());
            let format_fn: Function = nf.format();
            format_fn
                .call1(&nf, &JsValue::from_f64(num))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| num.to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        num.to_string()
    }
}
