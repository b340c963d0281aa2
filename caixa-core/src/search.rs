//! Catalog search used by the host to produce the filtered grid lists.
use crate::catalog::{Product, Service};

fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

/// Lowercase and strip the accents that matter for Portuguese catalog names.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().chars().flat_map(char::to_lowercase).map(fold_char).collect()
}

fn matches(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(needle)
}

/// Products whose name or code contains `query`. A blank query keeps everything.
#[must_use]
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = normalize(query);
    if needle.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| matches(&p.name, &needle) || matches(&p.code, &needle))
        .cloned()
        .collect()
}

/// Services whose name contains `query`. A blank query keeps everything.
#[must_use]
pub fn filter_services(services: &[Service], query: &str) -> Vec<Service> {
    let needle = normalize(query);
    if needle.is_empty() {
        return services.to_vec();
    }
    services
        .iter()
        .filter(|s| matches(&s.name, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        vec![
            Product {
                id: "P1".into(),
                code: "CAB-USB".into(),
                name: "Cabo USB-C".into(),
                stock: 10,
                sale_price_cents: 2990,
            },
            Product {
                id: "P2".into(),
                code: "PEL-01".into(),
                name: "Película de Vidro".into(),
                stock: 3,
                sale_price_cents: 1500,
            },
        ]
    }

    #[test]
    fn blank_query_keeps_all() {
        assert_eq!(filter_products(&products(), "   ").len(), 2);
    }

    #[test]
    fn matches_name_or_code_ignoring_case_and_accents() {
        let by_name = filter_products(&products(), "pelicula");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "P2");

        let by_code = filter_products(&products(), "cab-");
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].id, "P1");

        assert!(filter_products(&products(), "teclado").is_empty());
    }

    #[test]
    fn services_match_by_name() {
        let services = vec![Service {
            id: "S1".into(),
            name: "Troca de Tela".into(),
            warranty_days: 90,
            price_cents: 25000,
        }];
        assert_eq!(filter_services(&services, "TELA").len(), 1);
        assert!(filter_services(&services, "bateria").is_empty());
    }
}
