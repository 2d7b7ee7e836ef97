//! JSON routes for the product resource.

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::dto::products::ProductsQuery;
use crate::forms::product::ProductForm;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, products as products_service};

#[get("/products")]
pub async fn list_products(
    params: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_service::list_products(repo.get_ref(), params.into_inner()) {
        Ok(envelope) => HttpResponse::Ok().json(envelope),
        Err(ServiceError::EmptyPage) => HttpResponse::NoContent().finish(),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/products")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    match products_service::create_product(repo.get_ref(), form) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to create product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    product_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_service::get_product(repo.get_ref(), product_id.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to get product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/products/{product_id}")]
pub async fn update_product(
    product_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    match products_service::update_product(repo.get_ref(), product_id.into_inner(), form) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to update product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_service::delete_product(repo.get_ref(), product_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => {
            log::error!("Failed to delete product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Registers every product route on the given scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_products)
        .service(create_product)
        .service(show_product)
        .service(update_product)
        .service(delete_product);
}
