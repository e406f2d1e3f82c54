//! Seed catalogue written when no products file exists yet.

use rust_decimal::Decimal;
use vitrine::products::ProductId;

use crate::domain::products::records::ProductRecord;

const IMAGE_BASE_URL: &str =
    "https://raw.githubusercontent.com/Allanzin178/MarketplaceMobile/main/assets/images";

/// The starter catalogue.
pub fn seed_products() -> Vec<ProductRecord> {
    [
        (
            "1",
            "Dipirona monoidratada 100mg Generico",
            9_90,
            "20 Comprimidos",
            "dipirona.png",
        ),
        (
            "2",
            "Colorio ecoflim 5mg/ml",
            15_00,
            "15 Ml",
            "colirio.png",
        ),
        ("3", "Bepantol", 15_00, "125 Gramas", "bepantol.png"),
        ("4", "Xarope 44E VICK", 15_00, "100 Ml", "xarope.png"),
    ]
    .into_iter()
    .map(|(id, name, cents, description, image)| ProductRecord {
        id: ProductId::new(id),
        name: name.to_string(),
        description: Some(description.to_string()),
        price: Decimal::new(cents, 2),
        image: format!("{IMAGE_BASE_URL}/{image}"),
        category: None,
        previous_price: None,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_four_products_with_absolute_images() {
        let products = seed_products();

        assert_eq!(products.len(), 4);
        assert!(products.iter().all(|p| p.image.starts_with("https://")));
        assert_eq!(
            products.first().map(|p| p.price),
            Some(Decimal::new(9_90, 2))
        );
    }
}
