use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Products carry arbitrary caller-supplied fields next to the id; the doc
/// schema lists only the interpreted one.
#[derive(ToSchema)]
pub struct ProductDoc { pub id: u64 }

#[derive(ToSchema)]
pub struct CartItemDoc { pub id: u64, pub quantity: i64 }

#[derive(ToSchema)]
pub struct CartDoc { pub id: Uuid, pub products: Vec<CartItemDoc> }

#[derive(ToSchema)]
pub struct AddItemBodyDoc { pub quantity: Option<i64> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list_products,
        crate::routes::products::get_product,
        crate::routes::products::create_product,
        crate::routes::products::update_product,
        crate::routes::products::delete_product,
        crate::routes::carts::create_cart,
        crate::routes::carts::get_cart_products,
        crate::routes::carts::add_product_to_cart,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            CartItemDoc,
            CartDoc,
            AddItemBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "carts")
    )
)]
pub struct ApiDoc;
