use super::orders::StatusBody;
use crate::auth::Caller;
use crate::clients::ActorClient;
use crate::http::views::{order_views, Detail};
use crate::http::{ApiResult, AppState};
use crate::model::{OrderId, ProfileForm, Role, UserId, UserUpdate};
use actix_web::{delete, get, put, web, HttpResponse};
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(status)
            .service(profile)
            .service(update_profile)
            .service(all_users)
            .service(all_sellers)
            .service(update_user)
            .service(delete_user)
            .service(all_orders)
            .service(order_stats)
            .service(set_order_status),
    );
}

#[get("/status")]
async fn status(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    caller.require(Role::Admin)?;
    let user = state.users.require(caller.id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "isAdmin": true,
        "name": user.name,
        "email": user.email,
        "roles": user.roles,
    })))
}

#[get("/profile")]
async fn profile(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    caller.require(Role::Admin)?;
    Ok(HttpResponse::Ok().json(state.users.require(caller.id).await?))
}

#[put("/profile")]
async fn update_profile(
    state: web::Data<AppState>,
    caller: Caller,
    form: web::Json<ProfileForm>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Admin)?;
    let user = state.users.update_profile(caller.id, form.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Admin profile updated successfully",
        "user": user,
    })))
}

#[get("/users")]
async fn all_users(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    caller.require(Role::Admin)?;
    Ok(HttpResponse::Ok().json(state.users.list().await?))
}

#[get("/sellers")]
async fn all_sellers(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    caller.require(Role::Admin)?;
    Ok(HttpResponse::Ok().json(state.users.sellers().await?))
}

#[put("/users/{id}")]
async fn update_user(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<UserId>,
    update: web::Json<UserUpdate>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Admin)?;
    let user = state
        .users
        .update_user(id.into_inner(), update.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "User updated successfully", "user": user })))
}

#[delete("/users/{id}")]
async fn delete_user(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<UserId>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Admin)?;
    state.users.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "User account deleted successfully" })))
}

#[get("/orders")]
async fn all_orders(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    caller.require(Role::Admin)?;
    let orders = state.orders.all().await?;
    Ok(HttpResponse::Ok().json(order_views(&state, orders, Detail::Full).await?))
}

#[get("/orders/stats")]
async fn order_stats(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    caller.require(Role::Admin)?;
    Ok(HttpResponse::Ok().json(state.orders.stats().await?))
}

#[put("/orders/{id}/status")]
async fn set_order_status(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<OrderId>,
    body: web::Json<StatusBody>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Admin)?;
    let change = state
        .orders
        .set_status_as_admin(id.into_inner(), &body.status)
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Order status updated successfully",
        "order": change.order,
    })))
}
