use crate::auth::Caller;
use crate::http::{ApiError, ApiResult, AppState};
use crate::model::{ProductCreate, ProductId, ProductQuery, ProductUpdate, Role};
use actix_web::{delete, get, post, put, web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(browse)
        .service(product_by_id)
        .service(add_product)
        .service(update_product)
        .service(remove_product)
        .service(seller_products);
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ProductForm {
    name: String,
    description: String,
    category: String,
    price: Option<Decimal>,
    stock: Option<u32>,
    image: Option<String>,
}

#[get("/products")]
async fn browse(
    state: web::Data<AppState>,
    query: web::Query<ProductQuery>,
) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.products.browse(query.into_inner()).await?))
}

#[get("/products/{id}")]
async fn product_by_id(
    state: web::Data<AppState>,
    id: web::Path<ProductId>,
) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.products.require(id.into_inner()).await?))
}

#[post("/products")]
async fn add_product(
    state: web::Data<AppState>,
    caller: Caller,
    form: web::Json<ProductForm>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Seller)?;
    let form = form.into_inner();
    let (Some(price), Some(stock)) = (form.price, form.stock) else {
        return Err(ApiError::Validation("All product fields are required".into()));
    };

    let id = state
        .products
        .create_product(ProductCreate {
            seller: caller.id,
            name: form.name,
            description: form.description,
            category: form.category,
            price,
            stock,
            image: form.image,
        })
        .await?;
    let product = state.products.require(id).await?;
    Ok(HttpResponse::Created().json(json!({
        "message": "Product added successfully",
        "product": product,
    })))
}

#[put("/products/{id}")]
async fn update_product(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<ProductId>,
    update: web::Json<ProductUpdate>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Seller)?;
    let product = state
        .products
        .update_owned(id.into_inner(), caller.id, update.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Product updated successfully",
        "product": product,
    })))
}

#[delete("/products/{id}")]
async fn remove_product(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<ProductId>,
) -> ApiResult<HttpResponse> {
    caller.require(Role::Seller)?;
    state.products.delete_owned(id.into_inner(), caller.id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted successfully" })))
}

#[get("/sellers/products")]
async fn seller_products(state: web::Data<AppState>, caller: Caller) -> ApiResult<HttpResponse> {
    caller.require(Role::Seller)?;
    Ok(HttpResponse::Ok().json(state.products.by_seller(caller.id).await?))
}
