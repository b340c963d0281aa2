use crate::pos::{CatalogMode, CheckoutIntent, ItemKind, coerce_number};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Callback that forwards one fixed intent each time it fires.
pub fn forward(on_intent: &Callback<CheckoutIntent>, intent: CheckoutIntent) -> Callback<()> {
    let on_intent = on_intent.clone();
    Callback::from(move |()| on_intent.emit(intent.clone()))
}

/// Finalize handler; does nothing while the cart is empty.
pub fn save_handler(on_intent: &Callback<CheckoutIntent>, can_save: bool) -> Callback<()> {
    let on_intent = on_intent.clone();
    Callback::from(move |()| {
        if can_save {
            on_intent.emit(CheckoutIntent::Save);
        }
    })
}

/// Decrement and increment handlers for the cart line at `index`.
pub fn quantity_handlers(
    on_intent: &Callback<CheckoutIntent>,
    index: usize,
) -> (Callback<()>, Callback<()>) {
    (
        forward(on_intent, CheckoutIntent::UpdateQuantity { index, delta: -1 }),
        forward(on_intent, CheckoutIntent::UpdateQuantity { index, delta: 1 }),
    )
}

pub fn remove_handler(on_intent: &Callback<CheckoutIntent>, index: usize) -> Callback<()> {
    forward(on_intent, CheckoutIntent::RemoveItem(index))
}

pub fn add_item_handler(
    on_intent: &Callback<CheckoutIntent>,
    id: &str,
    kind: ItemKind,
) -> Callback<()> {
    forward(
        on_intent,
        CheckoutIntent::AddItem {
            id: id.to_string(),
            kind,
        },
    )
}

pub fn tab_handler(on_intent: &Callback<CheckoutIntent>, mode: CatalogMode) -> Callback<()> {
    forward(on_intent, CheckoutIntent::SetActiveCatalog(mode))
}

/// The client icon button only ever clears the selection.
pub fn clear_client_handler(on_intent: &Callback<CheckoutIntent>) -> Callback<()> {
    forward(on_intent, CheckoutIntent::SetSelectedClientId(String::new()))
}

pub fn discount_text_handler(on_intent: &Callback<CheckoutIntent>) -> Callback<String> {
    on_intent.reform(|text: String| CheckoutIntent::SetDiscount(coerce_number(&text)))
}

pub fn search_text_handler(on_intent: &Callback<CheckoutIntent>) -> Callback<String> {
    on_intent.reform(CheckoutIntent::SetCatalogSearch)
}

pub fn client_choice_handler(on_intent: &Callback<CheckoutIntent>) -> Callback<String> {
    on_intent.reform(CheckoutIntent::SetSelectedClientId)
}

pub fn payment_choice_handler(on_intent: &Callback<CheckoutIntent>) -> Callback<String> {
    on_intent.reform(CheckoutIntent::SetPaymentMethod)
}

pub fn on_click(handler: Callback<()>) -> Callback<MouseEvent> {
    handler.reform(|_: MouseEvent| ())
}

pub fn on_text_input(handler: Callback<String>) -> Callback<InputEvent> {
    handler.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())
}

pub fn on_select_change(handler: Callback<String>) -> Callback<Event> {
    handler.reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value())
}
