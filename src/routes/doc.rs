use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        catalog::{CreateCategoryRequest, CreateProductRequest, CreateStorageRequest},
        customers::CreateCustomerRequest,
        orders::{
            CreateOrderItemRequest, CreateOrderRequest, CreateOrderStatusRequest,
            CreatePaymentRequest, CreateShippingRequest,
        },
        reviews::{CreateDiscountRequest, CreateReviewRequest},
    },
    models::{
        Category, Customer, Discount, Order, OrderItem, OrderStatus, Payment, Product, Review,
        Shipping, Storage,
    },
    response::{ApiResponse, Meta},
    routes::{
        categories, customers, discounts, health, order_items, order_statuses, orders, payments,
        products, reviews, shipping, storages,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::root,
        products::list_products,
        products::create_product,
        products::delete_product,
        categories::list_categories,
        categories::create_category,
        categories::delete_category,
        storages::list_storages,
        storages::create_storage,
        storages::delete_storage,
        customers::list_customers,
        customers::create_customer,
        customers::delete_customer,
        orders::list_orders,
        orders::create_order,
        orders::delete_order,
        order_statuses::list_order_statuses,
        order_statuses::create_order_status,
        order_statuses::delete_order_status,
        payments::list_payments,
        payments::create_payment,
        payments::delete_payment,
        shipping::list_shippings,
        shipping::create_shipping,
        shipping::delete_shipping,
        order_items::list_order_items,
        order_items::create_order_item,
        order_items::delete_order_item,
        reviews::list_reviews,
        reviews::create_review,
        reviews::delete_review,
        discounts::list_discounts,
        discounts::create_discount,
        discounts::delete_discount,
    ),
    components(
        schemas(
            Category,
            Storage,
            Product,
            Customer,
            OrderStatus,
            Order,
            Payment,
            Shipping,
            OrderItem,
            Review,
            Discount,
            CreateCategoryRequest,
            CreateStorageRequest,
            CreateProductRequest,
            CreateCustomerRequest,
            CreateOrderStatusRequest,
            CreateOrderRequest,
            CreatePaymentRequest,
            CreateShippingRequest,
            CreateOrderItemRequest,
            CreateReviewRequest,
            CreateDiscountRequest,
            health::HealthData,
            Meta,
            ApiResponse<health::HealthData>,
        )
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Products", description = "Product catalog"),
        (name = "Categories", description = "Product categories"),
        (name = "Storages", description = "Storage locations"),
        (name = "Customers", description = "Customer records"),
        (name = "Orders", description = "Orders, statuses, and order items"),
        (name = "Payments", description = "Order payments"),
        (name = "Shipping", description = "Order shipping records"),
        (name = "Reviews", description = "Product reviews"),
        (name = "Discounts", description = "Product discounts"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
