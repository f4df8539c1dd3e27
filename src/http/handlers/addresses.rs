use crate::auth::Caller;
use crate::http::{ApiResult, AppState};
use crate::model::AddressCreate;
use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(add_address).service(my_addresses);
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AddressForm {
    street: String,
    city: String,
    postal_code: String,
}

#[post("/addresses")]
async fn add_address(
    state: web::Data<AppState>,
    caller: Caller,
    form: web::Json<AddressForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let address = state
        .addresses
        .add(AddressCreate {
            owner: caller.id,
            street: form.street,
            city: form.city,
            postal_code: form.postal_code,
        })
        .await?;
    Ok(HttpResponse::Created().json(address))
}

#[get("/addresses")]
async fn my_addresses(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.addresses.for_owner(caller.id).await?))
}
