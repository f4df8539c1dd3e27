use crate::auth::Caller;
use crate::http::views::review_views;
use crate::http::{ApiResult, AppState};
use crate::model::{ProductId, ReviewCreate, ReviewId};
use actix_web::{delete, get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(add_review)
        .service(product_reviews)
        .service(delete_review);
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReviewForm {
    stars: Option<i64>,
    comments: String,
}

#[post("/reviews/{product}")]
async fn add_review(
    state: web::Data<AppState>,
    caller: Caller,
    product: web::Path<ProductId>,
    form: web::Json<ReviewForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let review = state
        .reviews
        .add(ReviewCreate {
            product: product.into_inner(),
            author: caller.id,
            stars: form.stars.unwrap_or(0),
            comments: form.comments,
        })
        .await?;
    let view = review_views(&state, vec![review]).await?;
    Ok(HttpResponse::Created().json(json!({ "message": "Review added", "review": view.first() })))
}

#[get("/reviews/{product}")]
async fn product_reviews(
    state: web::Data<AppState>,
    product: web::Path<ProductId>,
) -> ApiResult<HttpResponse> {
    let reviews = state.reviews.for_product(product.into_inner()).await?;
    Ok(HttpResponse::Ok().json(review_views(&state, reviews).await?))
}

#[delete("/reviews/delete/{id}")]
async fn delete_review(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<ReviewId>,
) -> ApiResult<HttpResponse> {
    state.reviews.delete_own(id.into_inner(), caller.id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Review deleted" })))
}
