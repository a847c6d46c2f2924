use std::collections::HashSet;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ImageRef;
use crate::domain::shared::value_objects::ProductId;

use super::model::RemoteProduct;

/// Maps a remote snapshot onto local products, one product per remote row.
///
/// Remote ids that are positive integers below `i64::MAX` and appear once are
/// kept. Every other row gets a fresh id above the largest kept one, in payload
/// order.
pub fn remote_to_products(remote: Vec<RemoteProduct>) -> Vec<Product> {
    let mut seen = HashSet::new();
    let parsed: Vec<Option<i64>> = remote
        .iter()
        .map(|row| {
            row.id
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|id| *id > 0 && *id < i64::MAX && seen.insert(*id))
        })
        .collect();

    let mut next_id = parsed
        .iter()
        .flatten()
        .copied()
        .max()
        .unwrap_or(0)
        .saturating_add(1);

    remote
        .into_iter()
        .zip(parsed)
        .map(|(row, id)| {
            let id = id.unwrap_or_else(|| {
                while !seen.insert(next_id) {
                    next_id = next_id.wrapping_add(1).max(1);
                }
                next_id
            });
            Product::from_repository(
                ProductId::new(id),
                row.name,
                row.category,
                row.stock,
                row.price,
                ImageRef::parse(&row.image_url),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str) -> RemoteProduct {
        RemoteProduct {
            id: id.to_string(),
            name: name.to_string(),
            category: "Minuman".to_string(),
            stock: 3,
            price: 5000.0,
            image_url: String::new(),
        }
    }

    #[test]
    fn should_keep_numeric_remote_ids() {
        let products = remote_to_products(vec![row("4", "Kopi"), row("11", "Teh")]);

        assert_eq!(products[0].id, ProductId::new(4));
        assert_eq!(products[1].id, ProductId::new(11));
    }

    #[test]
    fn should_assign_fresh_ids_to_unparsable_and_duplicate_rows() {
        let products = remote_to_products(vec![
            row("2", "Kopi"),
            row("abc", "Teh"),
            row("2", "Susu"),
            row("", "Air"),
        ]);

        let ids: Vec<i64> = products.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn should_produce_one_product_per_remote_row() {
        let rows: Vec<RemoteProduct> = (0..25).map(|_| row("0", "Same")).collect();

        let products = remote_to_products(rows);

        let unique: HashSet<ProductId> = products.iter().map(|p| p.id).collect();
        assert_eq!(products.len(), 25);
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn should_not_overflow_when_remote_holds_largest_id() {
        let products = remote_to_products(vec![
            row("9223372036854775806", "Kopi"),
            row(&i64::MAX.to_string(), "Teh"),
            row("abc", "Susu"),
        ]);

        let ids: Vec<i64> = products.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids[0], i64::MAX - 1);
        assert!(ids.iter().all(|id| *id > 0));
        let unique: HashSet<i64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn should_map_image_url_to_remote_reference() {
        let mut remote = row("1", "Kopi");
        remote.image_url = "https://drive.example.com/uc?id=abc".to_string();

        let products = remote_to_products(vec![remote, row("2", "Teh")]);

        assert!(products[0].image.as_ref().unwrap().is_remote());
        assert!(products[1].image.is_none());
    }
}
