//! Shared fixtures for list engine tests.

#![allow(dead_code)]

use marketdesk_model::Product;
use serde_json::json;

/// Builds a product with the fields the list screens read.
pub fn product(id: i64, name: &str, sku: &str, price: f64, category: &str, created_at: &str) -> Product {
    serde_json::from_value(json!({
        "product_id": id,
        "product_name": name,
        "sku": sku,
        "base_price": price,
        "category_name": category,
        "status": "active",
        "created_at": created_at,
    }))
    .expect("fixture product must decode")
}

/// `n` products named `Item 01`..`Item n` in scrambled order, one day apart.
pub fn catalogue(n: usize) -> Vec<Product> {
    let mut ids: Vec<usize> = (1..=n).collect();
    // Deterministic shuffle so input order differs from name order.
    ids.sort_by_key(|i| (i * 7919) % (n + 1));
    ids.into_iter()
        .map(|i| {
            product(
                i as i64,
                &format!("Item {i:02}"),
                &format!("SKU-{i:03}"),
                (i * 10) as f64,
                if i % 2 == 0 { "Books" } else { "Electronics" },
                &format!("2024-01-{:02}T00:00:00Z", (i % 28) + 1),
            )
        })
        .collect()
}

pub fn names(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.product_name.clone()).collect()
}
