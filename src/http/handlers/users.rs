use crate::auth::Caller;
use crate::clients::ActorClient;
use crate::http::{ApiResult, AppState};
use crate::model::{ProfileForm, Registration};
use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(register_buyer)
        .service(login)
        .service(logout)
        .service(me)
        .service(profile)
        .service(update_profile)
        .service(delete_account);
}

#[derive(Debug, Deserialize)]
struct Login {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[post("/users/register")]
async fn register_buyer(
    state: web::Data<AppState>,
    form: web::Json<Registration>,
) -> ApiResult<HttpResponse> {
    let user = state.users.register_buyer(form.into_inner()).await?;
    let token = state.tokens.issue(user.id, Utc::now());
    Ok(HttpResponse::Created().json(json!({
        "message": "User registered successfully",
        "user": user,
        "token": token,
    })))
}

#[post("/users/login")]
async fn login(state: web::Data<AppState>, body: web::Json<Login>) -> ApiResult<HttpResponse> {
    let user = state.users.authenticate(&body.email, &body.password).await?;
    let token = state.tokens.issue(user.id, Utc::now());
    Ok(HttpResponse::Ok().json(json!({ "token": token, "user": user })))
}

#[get("/users/me")]
async fn me(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    let user = state.users.require(caller.id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Tokens are stateless, so logging out is the client discarding its token.
#[post("/users/logout")]
async fn logout() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Logged out successfully" }))
}

#[get("/users/profile")]
async fn profile(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    let user = state.users.require(caller.id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "phone": user.phone,
    })))
}

#[put("/users/profile")]
async fn update_profile(
    state: web::Data<AppState>,
    caller: Caller,
    form: web::Json<ProfileForm>,
) -> ApiResult<HttpResponse> {
    let user = state.users.update_profile(caller.id, form.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Profile updated", "user": user })))
}

#[delete("/users/profile")]
async fn delete_account(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    state.users.delete(caller.id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Account deleted successfully" })))
}
