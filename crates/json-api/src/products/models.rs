//! Product Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use vitrine_app::domain::products::{
    data::{NewProduct, ProductUpdate},
    records::ProductRecord,
};

/// Product as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Product id, the creation time in Unix milliseconds
    pub id: String,

    /// Display name
    pub nome: String,

    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,

    /// Unit price in reais
    #[salvo(schema(value_type = f64))]
    pub preco: Decimal,

    /// Image URL or bundled asset name
    pub image: String,

    /// Category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,

    /// Price before a promotion
    #[serde(rename = "precoAntigo", default, skip_serializing_if = "Option::is_none")]
    #[salvo(schema(value_type = Option<f64>))]
    pub preco_antigo: Option<Decimal>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.to_string(),
            nome: product.name,
            descricao: product.description,
            preco: product.price,
            image: product.image,
            categoria: product.category,
            preco_antigo: product.previous_price,
        }
    }
}

/// Create Product Request
///
/// `nome`, `preco` and `image` are required; they are optional here so a missing
/// field is reported the same way as a blank one.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    #[salvo(schema(value_type = Option<f64>))]
    pub preco: Option<Decimal>,
    pub image: Option<String>,
    pub categoria: Option<String>,
    #[serde(rename = "precoAntigo")]
    #[salvo(schema(value_type = Option<f64>))]
    pub preco_antigo: Option<Decimal>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.nome.unwrap_or_default(),
            description: request.descricao,
            price: request.preco.unwrap_or_default(),
            image: request.image.unwrap_or_default(),
            category: request.categoria,
            previous_price: request.preco_antigo,
        }
    }
}

/// Update Product Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    #[salvo(schema(value_type = Option<f64>))]
    pub preco: Option<Decimal>,
    pub image: Option<String>,
    pub categoria: Option<String>,
    #[serde(rename = "precoAntigo")]
    #[salvo(schema(value_type = Option<f64>))]
    pub preco_antigo: Option<Decimal>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.nome,
            description: request.descricao,
            price: request.preco,
            image: request.image,
            category: request.categoria,
            previous_price: request.preco_antigo,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;
    use vitrine::products::ProductId;

    use super::*;

    #[test]
    fn response_uses_wire_names() -> TestResult {
        let response = ProductResponse::from(ProductRecord {
            id: ProductId::new("1"),
            name: "Dipirona".to_string(),
            description: None,
            price: Decimal::new(9_90, 2),
            image: "dipirona.png".to_string(),
            category: Some("Analgésicos".to_string()),
            previous_price: Some(Decimal::new(12_00, 2)),
        });

        assert_eq!(
            serde_json::to_value(&response)?,
            json!({
                "id": "1",
                "nome": "Dipirona",
                "preco": 9.9,
                "image": "dipirona.png",
                "categoria": "Analgésicos",
                "precoAntigo": 12.0
            })
        );

        Ok(())
    }

    #[test]
    fn missing_create_fields_become_blank() -> TestResult {
        let request: CreateProductRequest = serde_json::from_value(json!({ "nome": "Soro" }))?;

        let new = NewProduct::from(request);

        assert_eq!(new.name, "Soro");
        assert_eq!(new.price, Decimal::ZERO);
        assert!(new.image.is_empty());

        Ok(())
    }
}
