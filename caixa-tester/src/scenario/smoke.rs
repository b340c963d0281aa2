use anyhow::{Result, ensure};
use caixa_core::{CheckoutCommands, CheckoutIntent, CheckoutSession, ItemKind};

pub fn run(_seed: u64) -> Result<()> {
    let mut session = CheckoutSession::demo();
    let product = session
        .catalog
        .products
        .first()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("demo catalog has no products"))?;

    CheckoutIntent::AddItem {
        id: product.id.clone(),
        kind: ItemKind::Product,
    }
    .dispatch(&mut session);
    CheckoutIntent::UpdateQuantity { index: 0, delta: 1 }.dispatch(&mut session);
    session.set_discount(1.0);

    let expected_subtotal = product.sale_price_cents * 2;
    ensure!(
        session.subtotal_cents() == expected_subtotal,
        "subtotal {} != {expected_subtotal}",
        session.subtotal_cents()
    );
    ensure!(
        session.cart_total_cents() == expected_subtotal - 100,
        "discount of 1.00 not applied: total {}",
        session.cart_total_cents()
    );

    CheckoutIntent::Save.dispatch(&mut session);
    let sale = session
        .last_sale()
        .ok_or_else(|| anyhow::anyhow!("save produced no sale"))?;
    ensure!(sale.number == 1, "first sale numbered {}", sale.number);
    ensure!(sale.total_cents == expected_subtotal - 100, "sale total drifted");
    ensure!(session.cart.is_empty(), "cart not cleared after sale");
    ensure!(session.discount == 0.0, "discount not reset after sale");
    Ok(())
}
