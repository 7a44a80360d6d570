//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use inventory_app::{
    context::AppContext,
    domain::{
        categories::{
            MockCategoriesService,
            records::{CategoryRecord, CategoryUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        summary::MockSummaryService,
    },
};

use crate::state::State;

pub(crate) fn make_product(id: ProductUuid) -> ProductRecord {
    ProductRecord {
        id,
        name: "Hammer".to_string(),
        code: "H1".to_string(),
        category_id: CategoryUuid::nil(),
        price: Decimal::new(999, 2),
        stock_quantity: 3,
        is_active: true,
    }
}

pub(crate) fn make_category(id: CategoryUuid) -> CategoryRecord {
    CategoryRecord {
        id,
        name: "Tools".to_string(),
    }
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_list_products_by_category().never();
    products.expect_list_active_products().never();
    products.expect_list_low_stock_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_categories_mock() -> MockCategoriesService {
    let mut categories = MockCategoriesService::new();

    categories.expect_list_categories().never();
    categories.expect_get_category().never();
    categories.expect_create_category().never();
    categories.expect_update_category().never();
    categories.expect_delete_category().never();

    categories
}

fn strict_summary_mock() -> MockSummaryService {
    let mut summary = MockSummaryService::new();

    summary.expect_summarize().never();

    summary
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with(
        AppContext {
            products: Arc::new(products),
            categories: Arc::new(strict_categories_mock()),
            summary: Arc::new(strict_summary_mock()),
        },
        route,
    )
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    service_with(
        AppContext {
            products: Arc::new(strict_products_mock()),
            categories: Arc::new(categories),
            summary: Arc::new(strict_summary_mock()),
        },
        route,
    )
}

pub(crate) fn summary_service(summary: MockSummaryService, route: Router) -> Service {
    service_with(
        AppContext {
            products: Arc::new(strict_products_mock()),
            categories: Arc::new(strict_categories_mock()),
            summary: Arc::new(summary),
        },
        route,
    )
}
