//! Products Data

use rust_decimal::Decimal;

use crate::domain::products::{errors::ProductsServiceError, records::ProductRecord};

/// New Product Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: String,
    pub category: Option<String>,
    pub previous_price: Option<Decimal>,
}

impl NewProduct {
    /// Checks the fields a product cannot be created without.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::MissingRequiredData`] when the name or image is
    /// blank or the price is not positive, and [`ProductsServiceError::InvalidData`]
    /// for a negative previous price.
    pub fn validate(&self) -> Result<(), ProductsServiceError> {
        if self.name.trim().is_empty() || self.image.trim().is_empty() || self.price <= Decimal::ZERO
        {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        if self.previous_price.is_some_and(|price| price.is_sign_negative()) {
            return Err(ProductsServiceError::InvalidData);
        }

        Ok(())
    }
}

/// Product Update Data
///
/// Name, price and image only replace the stored value when present and non-empty;
/// the remaining fields replace it whenever present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub previous_price: Option<Decimal>,
}

impl ProductUpdate {
    /// Applies the update to a stored record.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::InvalidData`] for negative prices; the record is
    /// left unchanged.
    pub fn apply(self, record: &mut ProductRecord) -> Result<(), ProductsServiceError> {
        if self.price.is_some_and(|price| price.is_sign_negative())
            || self.previous_price.is_some_and(|price| price.is_sign_negative())
        {
            return Err(ProductsServiceError::InvalidData);
        }

        if let Some(name) = self.name.filter(|name| !name.trim().is_empty()) {
            record.name = name;
        }

        if let Some(price) = self.price.filter(|price| !price.is_zero()) {
            record.price = price;
        }

        if let Some(image) = self.image.filter(|image| !image.trim().is_empty()) {
            record.image = image;
        }

        if let Some(description) = self.description {
            record.description = Some(description);
        }

        if let Some(category) = self.category {
            record.category = Some(category);
        }

        if let Some(previous_price) = self.previous_price {
            record.previous_price = Some(previous_price);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use vitrine::products::ProductId;

    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            id: ProductId::new("1"),
            name: "Dipirona".to_string(),
            description: Some("20 Comprimidos".to_string()),
            price: Decimal::new(9_90, 2),
            image: "dipirona.png".to_string(),
            category: None,
            previous_price: None,
        }
    }

    fn new_product() -> NewProduct {
        NewProduct {
            name: "Bepantol".to_string(),
            price: Decimal::new(15_00, 2),
            image: "bepantol.png".to_string(),
            ..NewProduct::default()
        }
    }

    #[test]
    fn validate_accepts_complete_product() {
        assert!(new_product().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_fields() {
        let cases = [
            NewProduct {
                name: "  ".to_string(),
                ..new_product()
            },
            NewProduct {
                image: String::new(),
                ..new_product()
            },
            NewProduct {
                price: Decimal::ZERO,
                ..new_product()
            },
        ];

        for product in cases {
            assert!(
                matches!(
                    product.validate(),
                    Err(ProductsServiceError::MissingRequiredData)
                ),
                "expected MissingRequiredData for {product:?}"
            );
        }
    }

    #[test]
    fn empty_values_keep_required_fields() -> TestResult {
        let mut record = record();

        ProductUpdate {
            name: Some(String::new()),
            price: Some(Decimal::ZERO),
            image: Some(" ".to_string()),
            ..ProductUpdate::default()
        }
        .apply(&mut record)?;

        assert_eq!(record.name, "Dipirona");
        assert_eq!(record.price, Decimal::new(9_90, 2));
        assert_eq!(record.image, "dipirona.png");

        Ok(())
    }

    #[test]
    fn present_optional_fields_always_replace() -> TestResult {
        let mut record = record();

        ProductUpdate {
            description: Some(String::new()),
            category: Some("Analgesicos".to_string()),
            previous_price: Some(Decimal::new(12_00, 2)),
            ..ProductUpdate::default()
        }
        .apply(&mut record)?;

        assert_eq!(record.description.as_deref(), Some(""));
        assert_eq!(record.category.as_deref(), Some("Analgesicos"));
        assert_eq!(record.previous_price, Some(Decimal::new(12_00, 2)));

        Ok(())
    }

    #[test]
    fn negative_price_is_rejected_without_changes() {
        let mut record = record();

        let result = ProductUpdate {
            name: Some("Dipirona 500mg".to_string()),
            price: Some(Decimal::new(-1, 0)),
            ..ProductUpdate::default()
        }
        .apply(&mut record);

        assert!(matches!(result, Err(ProductsServiceError::InvalidData)));
        assert_eq!(record.name, "Dipirona");
    }
}
