use anyhow::{Result, ensure};
use caixa_core::{
    CatalogData, CheckoutCommands, CheckoutError, CheckoutSession, FALLBACK_PAYMENT_METHOD,
    ItemKind, payment_options,
};

pub fn empty_cart_save(_seed: u64) -> Result<()> {
    let mut session = CheckoutSession::demo();
    session.save();
    ensure!(session.sales().is_empty(), "empty cart produced a sale");
    ensure!(
        session.last_error() == Some(&CheckoutError::EmptyCart),
        "expected EmptyCart, got {:?}",
        session.last_error()
    );
    Ok(())
}

pub fn quantity_policy(seed: u64) -> Result<()> {
    let mut session = CheckoutSession::demo();
    let id = session
        .catalog
        .services
        .first()
        .map(|s| s.id.clone())
        .ok_or_else(|| anyhow::anyhow!("demo catalog has no services"))?;

    let extra = i32::try_from(seed % 4).unwrap_or(0);
    session.add_item(id.clone(), ItemKind::Service);
    session.update_quantity(0, extra);
    session.update_quantity(0, -(extra + 1));
    ensure!(
        session.cart.is_empty(),
        "line should drop at zero, cart = {:?}",
        session.cart
    );

    session.update_quantity(5, -1);
    session.remove_item(5);
    ensure!(session.cart.is_empty(), "out-of-range edits changed the cart");

    session.add_item(id, ItemKind::Service);
    session.cart[0].quantity = -2;
    let err = session.finalize().err();
    ensure!(
        err == Some(CheckoutError::InvalidQuantity {
            index: 0,
            quantity: -2
        }),
        "expected InvalidQuantity, got {err:?}"
    );
    Ok(())
}

pub fn payment_fallback(_seed: u64) -> Result<()> {
    let mut catalog = CatalogData::load_from_static();
    for method in &mut catalog.payment_methods {
        method.active = false;
    }
    let options = payment_options(&catalog.active_payment_methods());
    ensure!(options.len() == 1, "expected one fallback option");
    ensure!(options[0].name == FALLBACK_PAYMENT_METHOD, "fallback is not Pix");

    let session = CheckoutSession::new(catalog);
    ensure!(
        session.payment_method == FALLBACK_PAYMENT_METHOD,
        "session default payment is {}",
        session.payment_method
    );
    Ok(())
}
