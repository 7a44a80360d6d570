//! App Router

use salvo::Router;

use crate::{categories, products, summary};

/// Routes served under `/api`.
///
/// Fixed product paths are pushed ahead of `{id}` so they are not captured as
/// an id.
pub fn app_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("category/{category}").get(products::by_category::handler))
                .push(Router::with_path("active").get(products::active::handler))
                .push(Router::with_path("low-stock").get(products::low_stock::handler))
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .post(categories::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(categories::get::handler)
                        .put(categories::update::handler)
                        .delete(categories::delete::handler),
                ),
        )
        .push(Router::with_path("summary").get(summary::handler))
}
