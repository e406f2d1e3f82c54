//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use vitrine::products::ProductId;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductResponse, UpdateProductRequest},
    },
    state::State,
};

/// Product Update Handler
///
/// Name, price and image are only replaced when present and non-empty; the other
/// fields are replaced whenever present.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(request_id = tracing::field::Empty, product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = ProductId::new(id.into_inner());
    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(&id));

    if let Some(request_id) = depot.request_id() {
        span.record("request_id", request_id);
    }

    let product = state
        .app
        .products
        .update_product(&id, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
