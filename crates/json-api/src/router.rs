//! API Router

use salvo::Router;

use crate::{products, status};

/// The banner at `/`, the healthcheck and the product API under `/api`.
pub(crate) fn app_router() -> Router {
    Router::new()
        .get(status::banner)
        .push(Router::with_path("healthcheck").get(status::healthcheck))
        .push(api_router())
}

/// Routes mounted under `/api`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api").push(
        Router::with_path("products")
            .get(products::index::handler)
            .post(products::create::handler)
            .push(Router::with_path("search").get(products::search::handler))
            .push(
                Router::with_path("{id}")
                    .get(products::get::handler)
                    .put(products::update::handler)
                    .delete(products::delete::handler),
            ),
    )
}
