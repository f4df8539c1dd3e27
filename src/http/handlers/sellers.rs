use crate::auth::Caller;
use crate::http::{ApiError, ApiResult, AppState};
use crate::model::{Role, SellerProfileForm, SellerRegistration, User};
use actix_web::{get, post, put, web, HttpResponse};
use chrono::Utc;
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(register_seller)
        .service(check_seller)
        .service(seller_profile)
        .service(update_seller_profile);
}

#[post("/sellers/register")]
async fn register_seller(
    state: web::Data<AppState>,
    form: web::Json<SellerRegistration>,
) -> ApiResult<HttpResponse> {
    let user = state.users.register_seller(form.into_inner()).await?;
    let token = state.tokens.issue(user.id, Utc::now());
    Ok(HttpResponse::Created().json(json!({
        "message": "Seller account created",
        "user": user,
        "token": token,
    })))
}

/// The caller's account, provided it carries a business record.
async fn seller_account(state: &AppState, caller: &Caller) -> ApiResult<User> {
    caller.require(Role::Seller)?;
    let user = state.users.require(caller.id).await?;
    if user.seller_profile.is_none() {
        return Err(ApiError::Forbidden("User is not a seller".into()));
    }
    Ok(user)
}

#[get("/sellers/check")]
async fn check_seller(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    let user = seller_account(&state, &caller).await?;
    let profile = user.seller_profile.as_ref();
    Ok(HttpResponse::Ok().json(json!({
        "isSeller": true,
        "isVerified": profile.is_some_and(|p| p.verified),
        "taxId": profile.map(|p| &p.tax_id),
    })))
}

#[get("/sellers/profile")]
async fn seller_profile(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    let user = seller_account(&state, &caller).await?;
    let profile = user.seller_profile.as_ref();
    Ok(HttpResponse::Ok().json(json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "phone": user.phone,
        "roles": user.roles,
        "taxId": profile.map(|p| &p.tax_id),
        "isVerified": profile.is_some_and(|p| p.verified),
        "address": profile.map(|p| &p.business_address),
        "createdAt": user.created_at,
    })))
}

#[put("/sellers/profile")]
async fn update_seller_profile(
    state: web::Data<AppState>,
    caller: Caller,
    form: web::Json<SellerProfileForm>,
) -> ApiResult<HttpResponse> {
    seller_account(&state, &caller).await?;
    let user = state
        .users
        .update_seller_profile(caller.id, form.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Seller profile updated", "user": user })))
}
