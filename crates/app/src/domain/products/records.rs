//! Product Records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vitrine::products::ProductId;

/// Product as stored in the products file and served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "preco")]
    pub price: Decimal,

    #[serde(default)]
    pub image: String,

    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "precoAntigo", default, skip_serializing_if = "Option::is_none")]
    pub previous_price: Option<Decimal>,
}

impl ProductRecord {
    /// Check whether the product name contains `query`, ignoring case.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn serializes_with_wire_names() -> TestResult {
        let record = ProductRecord {
            id: ProductId::new("3"),
            name: "Bepantol".to_string(),
            description: Some("125 Gramas".to_string()),
            price: Decimal::new(15_00, 2),
            image: "bepantol.png".to_string(),
            category: None,
            previous_price: None,
        };

        let value = serde_json::to_value(&record)?;

        assert_eq!(
            value,
            json!({
                "id": "3",
                "nome": "Bepantol",
                "descricao": "125 Gramas",
                "preco": 15.0,
                "image": "bepantol.png"
            })
        );

        Ok(())
    }

    #[test]
    fn name_matching_ignores_case() {
        let record = ProductRecord {
            id: ProductId::new("4"),
            name: "Xarope 44E VICK".to_string(),
            description: None,
            price: Decimal::new(15_00, 2),
            image: String::new(),
            category: None,
            previous_price: None,
        };

        assert!(record.name_matches("vick"));
        assert!(record.name_matches("XAROPE"));
        assert!(!record.name_matches("dipirona"));
    }
}
