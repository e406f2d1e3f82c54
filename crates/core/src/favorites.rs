//! Favourites

use crate::products::{Product, ProductId};

/// Products the customer marked as favourites, in the order they were marked.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    products: Vec<Product>,
}

impl Favorites {
    /// Create an empty favourites list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a product as favourite. Already marked products are left as they are.
    pub fn add(&mut self, product: &Product) {
        if !self.contains(&product.id) {
            self.products.push(product.clone());
        }
    }

    /// Unmarks a product. Returns whether it was marked.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.products.len();

        self.products.retain(|product| &product.id != product_id);

        self.products.len() != before
    }

    /// Flips the favourite mark, returning whether the product is now a favourite.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(&product.id) {
            return false;
        }

        self.products.push(product.clone());

        true
    }

    /// Check whether a product is marked.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.products.iter().any(|product| &product.id == product_id)
    }

    /// Iterates over favourites in the order they were marked.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Get the number of favourites.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if there are no favourites.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};

    use super::*;

    fn product(id: &str) -> Product {
        Product::new(id, "Xarope 44E VICK", Money::from_minor(15_00, iso::BRL))
    }

    #[test]
    fn add_is_idempotent() {
        let mut favorites = Favorites::new();

        favorites.add(&product("4"));
        favorites.add(&product("4"));

        assert_eq!(favorites.len(), 1);
        assert!(favorites.contains(&"4".into()));
    }

    #[test]
    fn toggle_flips_membership() {
        let mut favorites = Favorites::new();

        assert!(favorites.toggle(&product("4")));
        assert!(!favorites.toggle(&product("4")));
        assert!(favorites.is_empty());
    }

    #[test]
    fn remove_absent_returns_false() {
        let mut favorites = Favorites::new();

        assert!(!favorites.remove(&"4".into()));
    }

    #[test]
    fn iter_keeps_marking_order() {
        let mut favorites = Favorites::new();

        favorites.add(&product("2"));
        favorites.add(&product("1"));

        let ids: Vec<&str> = favorites.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, ["2", "1"]);
    }
}
