use anyhow::{Result, ensure};
use caixa_core::{CatalogMode, CheckoutCommands, CheckoutSession};

pub fn run(_seed: u64) -> Result<()> {
    let mut session = CheckoutSession::demo();
    let all_services = session.filtered_services().len();

    session.set_active_catalog(CatalogMode::Services);
    ensure!(session.active_catalog == CatalogMode::Services, "tab did not switch");
    ensure!(all_services > 0, "demo catalog has no services");

    session.set_catalog_search("TELA".into());
    let narrowed = session.filtered_services();
    ensure!(
        !narrowed.is_empty() && narrowed.len() < all_services,
        "search for `tela` kept {} of {all_services} services",
        narrowed.len()
    );

    session.set_catalog_search("   ".into());
    ensure!(
        session.filtered_services().len() == all_services,
        "blank search should keep everything"
    );

    session.reset_form();
    ensure!(
        session.active_catalog == CatalogMode::Products && session.catalog_search.is_empty(),
        "reset did not restore the products tab"
    );
    Ok(())
}
