use anyhow::{Result, ensure};
use caixa_core::{CheckoutIntent, CheckoutSession, ItemKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const STEPS: usize = 200;

fn random_intent(rng: &mut ChaCha8Rng, session: &CheckoutSession) -> CheckoutIntent {
    let len = session.cart.len();
    match rng.gen_range(0..7) {
        0 | 1 => {
            let products = &session.catalog.products;
            let services = &session.catalog.services;
            if rng.gen_bool(0.5) && !products.is_empty() {
                CheckoutIntent::AddItem {
                    id: products[rng.gen_range(0..products.len())].id.clone(),
                    kind: ItemKind::Product,
                }
            } else if !services.is_empty() {
                CheckoutIntent::AddItem {
                    id: services[rng.gen_range(0..services.len())].id.clone(),
                    kind: ItemKind::Service,
                }
            } else {
                CheckoutIntent::ResetForm
            }
        }
        2 => CheckoutIntent::UpdateQuantity {
            index: rng.gen_range(0..=len),
            delta: if rng.gen_bool(0.5) { 1 } else { -1 },
        },
        3 => CheckoutIntent::RemoveItem(rng.gen_range(0..=len)),
        4 => CheckoutIntent::SetDiscount(f64::from(rng.gen_range(-500..5000)) / 100.0),
        5 => CheckoutIntent::Save,
        _ => CheckoutIntent::SetCatalogSearch(if rng.gen_bool(0.5) {
            String::new()
        } else {
            "cabo".to_string()
        }),
    }
}

fn check_invariants(session: &CheckoutSession) -> Result<()> {
    let line_sum: i64 = session.cart.iter().map(|l| l.line_total_cents()).sum();
    ensure!(
        session.subtotal_cents() == line_sum,
        "subtotal {} != line sum {line_sum}",
        session.subtotal_cents()
    );
    let total = session.cart_total_cents();
    ensure!(total >= 0, "total went negative: {total}");
    ensure!(
        total <= session.subtotal_cents(),
        "total {total} above subtotal {}",
        session.subtotal_cents()
    );
    ensure!(
        session.cart.iter().all(|l| l.quantity > 0),
        "cart holds a non-positive quantity"
    );
    ensure!(
        session
            .sales()
            .windows(2)
            .all(|pair| pair[1].number == pair[0].number + 1),
        "sale numbers are not consecutive"
    );
    Ok(())
}

pub fn run(seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut session = CheckoutSession::demo();
    for step in 0..STEPS {
        let intent = random_intent(&mut rng, &session);
        let label = intent.name();
        intent.dispatch(&mut session);
        check_invariants(&session)
            .map_err(|e| e.context(format!("after step {step} ({label})")))?;
    }
    Ok(())
}
