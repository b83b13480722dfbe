use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    models::{OrderAddress, OrderRequest, OrderResponse, ProductItem},
    routes::{health, orders},
};

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, orders::process_order),
    components(schemas(
        OrderAddress,
        ProductItem,
        OrderRequest,
        OrderResponse,
        health::HealthData
    )),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Orders", description = "Order pricing endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
