use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        orders::{OrderInput, OrderItemInput},
        payment::{PaymentRequest, PaymentResponse},
        products::{ProductInput, ReviewInput},
    },
    error::ErrorBody,
    models::{DocumentId, Order, OrderItem, Product, Review, User},
    routes::{health, orders, payment, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        orders::list_orders_for_user,
        orders::create_order,
        payment::create_payment_intent
    ),
    components(
        schemas(
            DocumentId,
            Product,
            Review,
            User,
            Order,
            OrderItem,
            ProductInput,
            ReviewInput,
            OrderInput,
            OrderItemInput,
            PaymentRequest,
            PaymentResponse,
            ErrorBody,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Payment", description = "Payment intent endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
