//! User intents emitted by the checkout screen and the command surface that receives them.
use crate::catalog::{CatalogMode, ItemKind};
use serde::{Deserialize, Serialize};

/// A single gesture forwarded from the checkout screen, unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CheckoutIntent {
    ResetForm,
    SetSelectedClientId(String),
    SetDiscount(f64),
    SetPaymentMethod(String),
    SetActiveCatalog(CatalogMode),
    SetCatalogSearch(String),
    UpdateQuantity { index: usize, delta: i32 },
    RemoveItem(usize),
    Save,
    AddItem { id: String, kind: ItemKind },
}

impl CheckoutIntent {
    /// Route this intent to the matching command.
    pub fn dispatch<C>(self, commands: &mut C)
    where
        C: CheckoutCommands + ?Sized,
    {
        match self {
            Self::ResetForm => commands.reset_form(),
            Self::SetSelectedClientId(id) => commands.set_selected_client_id(id),
            Self::SetDiscount(value) => commands.set_discount(value),
            Self::SetPaymentMethod(name) => commands.set_payment_method(name),
            Self::SetActiveCatalog(mode) => commands.set_active_catalog(mode),
            Self::SetCatalogSearch(text) => commands.set_catalog_search(text),
            Self::UpdateQuantity { index, delta } => commands.update_quantity(index, delta),
            Self::RemoveItem(index) => commands.remove_item(index),
            Self::Save => commands.save(),
            Self::AddItem { id, kind } => commands.add_item(id, kind),
        }
    }

    /// Short stable name, used in logs and transcripts.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ResetForm => "reset_form",
            Self::SetSelectedClientId(_) => "set_selected_client_id",
            Self::SetDiscount(_) => "set_discount",
            Self::SetPaymentMethod(_) => "set_payment_method",
            Self::SetActiveCatalog(_) => "set_active_catalog",
            Self::SetCatalogSearch(_) => "set_catalog_search",
            Self::UpdateQuantity { .. } => "update_quantity",
            Self::RemoveItem(_) => "remove_item",
            Self::Save => "save",
            Self::AddItem { .. } => "add_item",
        }
    }
}

/// Operations the owner of checkout state exposes to the screen.
///
/// Every call is fire-and-forget: the screen never inspects an outcome.
pub trait CheckoutCommands {
    fn reset_form(&mut self);
    fn set_selected_client_id(&mut self, id: String);
    fn set_discount(&mut self, discount: f64);
    fn set_payment_method(&mut self, name: String);
    fn set_active_catalog(&mut self, mode: CatalogMode);
    fn set_catalog_search(&mut self, text: String);
    fn update_quantity(&mut self, index: usize, delta: i32);
    fn remove_item(&mut self, index: usize);
    fn save(&mut self);
    fn add_item(&mut self, id: String, kind: ItemKind);
}

/// Recorder that keeps every intent it receives, in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IntentLog {
    pub intents: Vec<CheckoutIntent>,
}

impl CheckoutCommands for IntentLog {
    fn reset_form(&mut self) {
        self.intents.push(CheckoutIntent::ResetForm);
    }
    fn set_selected_client_id(&mut self, id: String) {
        self.intents.push(CheckoutIntent::SetSelectedClientId(id));
    }
    fn set_discount(&mut self, discount: f64) {
        self.intents.push(CheckoutIntent::SetDiscount(discount));
    }
    fn set_payment_method(&mut self, name: String) {
        self.intents.push(CheckoutIntent::SetPaymentMethod(name));
    }
    fn set_active_catalog(&mut self, mode: CatalogMode) {
        self.intents.push(CheckoutIntent::SetActiveCatalog(mode));
    }
    fn set_catalog_search(&mut self, text: String) {
        self.intents.push(CheckoutIntent::SetCatalogSearch(text));
    }
    fn update_quantity(&mut self, index: usize, delta: i32) {
        self.intents
            .push(CheckoutIntent::UpdateQuantity { index, delta });
    }
    fn remove_item(&mut self, index: usize) {
        self.intents.push(CheckoutIntent::RemoveItem(index));
    }
    fn save(&mut self) {
        self.intents.push(CheckoutIntent::Save);
    }
    fn add_item(&mut self, id: String, kind: ItemKind) {
        self.intents.push(CheckoutIntent::AddItem { id, kind });
    }
}

/// Convert free text to a number the way a browser's `Number(text)` does.
///
/// Blank input is `0`; anything that is not a decimal, exponent, hex/octal/binary
/// or `Infinity` literal becomes NaN.
#[must_use]
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    let value = digits.chars().fold(0.0_f64, |acc, c| {
        acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
    });
    Some(value)
}

fn is_decimal_literal(text: &str) -> bool {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let mut parts = mantissa.splitn(2, '.');
    let int_part = parts.next().unwrap_or_default();
    let frac_part = parts.next();
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    let has_digits =
        !int_part.is_empty() || frac_part.is_some_and(|f| !f.is_empty());
    if !has_digits || !all_digits(int_part) || !frac_part.is_none_or(all_digits) {
        return false;
    }

    exponent.is_none_or(|exp| {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        !digits.is_empty() && all_digits(digits)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_number_matches_browser_rules() {
        assert!((coerce_number("") - 0.0).abs() < f64::EPSILON);
        assert!((coerce_number("   ") - 0.0).abs() < f64::EPSILON);
        assert!((coerce_number("5") - 5.0).abs() < f64::EPSILON);
        assert!((coerce_number(" 12.5 ") - 12.5).abs() < f64::EPSILON);
        assert!((coerce_number(".5") - 0.5).abs() < f64::EPSILON);
        assert!((coerce_number("5.") - 5.0).abs() < f64::EPSILON);
        assert!((coerce_number("-3") + 3.0).abs() < f64::EPSILON);
        assert!((coerce_number("1e2") - 100.0).abs() < f64::EPSILON);
        assert!((coerce_number("0x1F") - 31.0).abs() < f64::EPSILON);
        assert!((coerce_number("0b101") - 5.0).abs() < f64::EPSILON);
        assert!(coerce_number("Infinity").is_infinite());
        assert!(coerce_number("-Infinity").is_sign_negative());
    }

    #[test]
    fn coerce_number_rejects_garbage_as_nan() {
        for text in ["abc", "5,00", "1e", ".", "+", "inf", "nan", "0x", "0xZ", "1.2.3", "--1"] {
            assert!(coerce_number(text).is_nan(), "{text:?} should be NaN");
        }
    }

    #[test]
    fn dispatch_routes_each_intent_once() {
        let intents = vec![
            CheckoutIntent::ResetForm,
            CheckoutIntent::SetSelectedClientId("c1".into()),
            CheckoutIntent::SetDiscount(2.5),
            CheckoutIntent::SetPaymentMethod("Pix".into()),
            CheckoutIntent::SetActiveCatalog(CatalogMode::Services),
            CheckoutIntent::SetCatalogSearch("oil".into()),
            CheckoutIntent::UpdateQuantity { index: 1, delta: -1 },
            CheckoutIntent::RemoveItem(0),
            CheckoutIntent::Save,
            CheckoutIntent::AddItem {
                id: "S1".into(),
                kind: ItemKind::Service,
            },
        ];
        let mut log = IntentLog::default();
        for intent in intents.clone() {
            intent.dispatch(&mut log);
        }
        assert_eq!(log.intents, intents);
    }

    #[test]
    fn intents_serialize_with_type_tag() {
        let json = serde_json::to_value(CheckoutIntent::UpdateQuantity { index: 2, delta: 1 })
            .unwrap();
        assert_eq!(json["type"], "update_quantity");
        assert_eq!(json["value"]["index"], 2);
        let save = serde_json::to_value(CheckoutIntent::Save).unwrap();
        assert_eq!(save["type"], "save");
        assert_eq!(CheckoutIntent::Save.name(), "save");
    }
}
