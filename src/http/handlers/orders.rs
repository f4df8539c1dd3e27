use crate::auth::Caller;
use crate::http::views::{order_views, Detail};
use crate::http::{ApiError, ApiResult, AppState};
use crate::model::{AddressId, LineItemRequest, OrderCreate, OrderId, Role};
use crate::order_actor::OrderError;
use actix_web::{get, post, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(place_order)
        .service(my_orders)
        .service(seller_orders)
        .service(seller_status);
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PlaceOrder {
    items: Vec<LineItemRequest>,
    delivery_to: Option<AddressId>,
    billing_to: Option<AddressId>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct StatusBody {
    pub(super) status: String,
}

#[post("/orders")]
async fn place_order(
    state: web::Data<AppState>,
    caller: Caller,
    body: web::Json<PlaceOrder>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Buyer)?;
    let body = body.into_inner();
    if body.items.is_empty() {
        return Err(OrderError::EmptyOrder.into());
    }
    let (Some(delivery_to), Some(billing_to)) = (body.delivery_to, body.billing_to) else {
        return Err(ApiError::Validation(
            "Delivery and billing addresses are required".into(),
        ));
    };

    let placed = state
        .orders
        .place_order(OrderCreate {
            buyer: caller.id,
            items: body.items,
            delivery_to,
            billing_to,
        })
        .await?;
    Ok(HttpResponse::Created().json(json!({
        "message": "Order placed successfully",
        "order": placed.order,
        "totalAmount": placed.total_amount,
    })))
}

#[get("/orders/my")]
async fn my_orders(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    caller.require(Role::Buyer)?;
    let orders = state.orders.for_buyer(caller.id).await?;
    Ok(HttpResponse::Ok().json(order_views(&state, orders, Detail::Products).await?))
}

#[get("/orders/seller")]
async fn seller_orders(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    caller.require(Role::Seller)?;
    let orders = state.orders.with_items().await?;
    Ok(HttpResponse::Ok().json(order_views(&state, orders, Detail::Full).await?))
}

#[put("/orders/{id}/status")]
async fn seller_status(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<OrderId>,
    body: web::Json<StatusBody>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Seller)?;
    let change = state
        .orders
        .set_status_as_seller(id.into_inner(), caller.id, &body.status)
        .await?;
    let message = if change.changed {
        format!("Order marked as {}", change.order.status)
    } else {
        format!("Order is already {}", change.order.status)
    };
    Ok(HttpResponse::Ok().json(json!({ "message": message, "order": change.order })))
}
