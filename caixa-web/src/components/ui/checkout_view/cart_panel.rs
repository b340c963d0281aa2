use super::CheckoutViewProps;
use super::interactions::{
    discount_text_handler, on_click, on_select_change, on_text_input, payment_choice_handler,
    quantity_handlers, remove_handler, save_handler,
};
use super::view_model::{CartLineView, CheckoutViewModel};
use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

pub fn render_cart_panel(
    vm: &CheckoutViewModel,
    props: &CheckoutViewProps,
    payment_ref: &NodeRef,
) -> Html {
    html! {
        <section class="cart-panel" aria-labelledby="cart-title">
            <header class="cart-header">
                <h2 id="cart-title">{ i18n::t("checkout.cart.title") }</h2>
                <span class="cart-count">{ vm.item_count.clone() }</span>
            </header>
            { if vm.lines.is_empty() {
                html! { <p class="cart-empty">{ i18n::t("checkout.cart.empty") }</p> }
            } else {
                html! {
                    <ul class="cart-lines">
                        { for vm.lines.iter().map(|line| render_cart_line(line, props)) }
                    </ul>
                }
            }}
            { render_totals(vm, props, payment_ref) }
        </section>
    }
}

fn render_cart_line(line: &CartLineView, props: &CheckoutViewProps) -> Html {
    let (on_dec, on_inc) = quantity_handlers(&props.on_intent, line.index);
    let on_remove = remove_handler(&props.on_intent, line.index);
    let vars = BTreeMap::from([("item", line.name.as_str())]);

    html! {
        <li key={line.index} class="cart-line" data-index={line.index.to_string()} data-kind={line.kind.as_str()}>
            <div class="cart-line-info">
                <span class="cart-line-name">{ line.name.clone() }</span>
                <span class="cart-line-detail">{ line.detail.clone() }</span>
            </div>
            <div class="cart-line-qty">
                <button type="button"
                        class="qty-btn qty-dec"
                        data-delta="-1"
                        aria-label={i18n::tr("checkout.cart.decrease", Some(&vars))}
                        onclick={on_click(on_dec)}>{ "−" }</button>
                <span class="qty" aria-live="polite">{ line.quantity.to_string() }</span>
                <button type="button"
                        class="qty-btn qty-inc"
                        data-delta="1"
                        aria-label={i18n::tr("checkout.cart.increase", Some(&vars))}
                        onclick={on_click(on_inc)}>{ "+" }</button>
            </div>
            <span class="cart-line-total">{ line.total.clone() }</span>
            <button type="button"
                    class="cart-line-remove"
                    aria-label={i18n::tr("checkout.cart.remove", Some(&vars))}
                    onclick={on_click(on_remove)}>{ "×" }</button>
        </li>
    }
}

fn render_totals(
    vm: &CheckoutViewModel,
    props: &CheckoutViewProps,
    payment_ref: &NodeRef,
) -> Html {
    let on_discount = on_text_input(discount_text_handler(&props.on_intent));
    let on_payment = on_select_change(payment_choice_handler(&props.on_intent));
    let on_save = on_click(save_handler(&props.on_intent, vm.can_save));

    html! {
        <footer class="totals">
            <div class="totals-row totals-subtotal">
                <span class="label">{ i18n::t("checkout.totals.subtotal") }</span>
                <span class="value">{ vm.subtotal.clone() }</span>
            </div>
            <div class="totals-row totals-discount">
                <label for="discount-input" class="label">{ i18n::t("checkout.totals.discount") }</label>
                <span class="currency-prefix" aria-hidden="true">{ "R$" }</span>
                <input id="discount-input"
                       class="discount-input"
                       type="text"
                       inputmode="decimal"
                       value={vm.discount_value.clone()}
                       oninput={on_discount} />
            </div>
            <div class="totals-row totals-total">
                <span class="label">{ i18n::t("checkout.totals.total") }</span>
                <strong class="value" aria-live="polite">{ vm.total.clone() }</strong>
            </div>
            <div class="totals-row totals-payment">
                <label for="payment-select" class="label">{ i18n::t("checkout.totals.payment") }</label>
                <select id="payment-select" class="payment-select" ref={payment_ref.clone()} onchange={on_payment}>
                    { for vm.payment_options.iter().map(|method| html! {
                        <option key={method.id.clone()}
                                value={method.name.clone()}
                                selected={method.name.as_str() == props.payment_method.as_str()}>
                            { method.name.clone() }
                        </option>
                    }) }
                </select>
            </div>
            <button type="button"
                    class="checkout-save"
                    disabled={!vm.can_save}
                    aria-disabled={(!vm.can_save).to_string()}
                    onclick={on_save}>
                { i18n::t("checkout.save") }
            </button>
        </footer>
    }
}
