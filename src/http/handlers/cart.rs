use crate::auth::Caller;
use crate::http::views::cart_view;
use crate::http::{ApiError, ApiResult, AppState};
use crate::model::{AddressId, ProductId, Role};
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(view_cart)
        .service(add_item)
        .service(checkout)
        .service(set_quantity)
        .service(remove_item)
        .service(clear_cart);
}

fn one() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddItem {
    product_id: ProductId,
    #[serde(default = "one")]
    quantity: u32,
}

#[derive(Debug, Deserialize)]
struct SetQuantity {
    quantity: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Checkout {
    delivery_to: Option<AddressId>,
    billing_to: Option<AddressId>,
}

#[get("/cart")]
async fn view_cart(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    caller.require(Role::Buyer)?;
    let cart = state.users.cart(caller.id).await?;
    Ok(HttpResponse::Ok().json(cart_view(&state, cart).await?))
}

#[post("/cart")]
async fn add_item(
    state: web::Data<AppState>,
    caller: Caller,
    body: web::Json<AddItem>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Buyer)?;
    let cart = state
        .users
        .add_to_cart(caller.id, body.product_id, body.quantity)
        .await?;
    Ok(HttpResponse::Created().json(json!({
        "message": "Product added to cart",
        "cart": cart_view(&state, cart).await?,
    })))
}

#[put("/cart/{product}")]
async fn set_quantity(
    state: web::Data<AppState>,
    caller: Caller,
    product: web::Path<ProductId>,
    body: web::Json<SetQuantity>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Buyer)?;
    let cart = state
        .users
        .set_cart_quantity(caller.id, product.into_inner(), body.quantity)
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Item quantity updated",
        "cart": cart_view(&state, cart).await?,
    })))
}

#[delete("/cart/{product}")]
async fn remove_item(
    state: web::Data<AppState>,
    caller: Caller,
    product: web::Path<ProductId>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Buyer)?;
    let cart = state
        .users
        .remove_from_cart(caller.id, product.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Item removed",
        "cart": cart_view(&state, cart).await?,
    })))
}

#[delete("/cart")]
async fn clear_cart(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    caller.require(Role::Buyer)?;
    state.users.clear_cart(caller.id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Your cart is now empty" })))
}

#[post("/cart/checkout")]
async fn checkout(
    state: web::Data<AppState>,
    caller: Caller,
    body: web::Json<Checkout>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Buyer)?;
    let (Some(delivery_to), Some(billing_to)) = (body.delivery_to, body.billing_to) else {
        return Err(ApiError::Validation(
            "Delivery and billing addresses are required".into(),
        ));
    };
    let placed = state
        .orders
        .checkout(&state.users, caller.id, delivery_to, billing_to)
        .await?;
    Ok(HttpResponse::Created().json(json!({
        "message": "Order placed successfully",
        "order": placed.order,
        "totalAmount": placed.total_amount,
    })))
}
