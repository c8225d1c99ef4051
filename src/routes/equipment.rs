use super::validation_failed;
use crate::core::{calculate_ski_size, calculate_snowboard_size};
use crate::models::{SkiQuery, SnowboardQuery};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure equipment calculator routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/equipment/snowboard", web::post().to(snowboard_size))
        .route("/equipment/ski", web::post().to(ski_size));
}

/// Snowboard size endpoint
///
/// POST /api/v1/equipment/snowboard
///
/// Request body:
/// ```json
/// {
///   "heightCm": 175,
///   "weightKg": 75,
///   "gender": "м",
///   "shoeSize": 42,
///   "style": "Универсал"
/// }
/// ```
async fn snowboard_size(req: web::Json<SnowboardQuery>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    HttpResponse::Ok().json(calculate_snowboard_size(&req))
}

/// Ski size endpoint
///
/// POST /api/v1/equipment/ski
async fn ski_size(req: web::Json<SkiQuery>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    HttpResponse::Ok().json(calculate_ski_size(&req))
}
