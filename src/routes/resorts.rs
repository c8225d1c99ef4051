use super::{not_found, validation_failed, AppState};
use crate::core::{rescue_contacts, EMERGENCY_NUMBER};
use crate::models::{
    Coordinate, ErrorResponse, NearbyResort, NearbyResortsRequest, RescueRequest, RescueResponse,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure resort, region and SOS routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/resorts/nearby", web::post().to(nearby_resorts))
        .route("/resorts/{id}", web::get().to(get_resort))
        .route("/resorts/{id}/weather", web::get().to(resort_weather))
        .route("/regions", web::get().to(list_regions))
        .route("/regions/{region}/resorts", web::get().to(region_resorts))
        .route("/rescue", web::post().to(rescue));
}

/// Nearest resorts endpoint
///
/// POST /api/v1/resorts/nearby
///
/// Request body:
/// ```json
/// {
///   "latitude": 55.75,
///   "longitude": 37.61,
///   "limit": 5
/// }
/// ```
async fn nearby_resorts(
    state: web::Data<AppState>,
    req: web::Json<NearbyResortsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let origin = Coordinate::new(req.latitude, req.longitude);
    let limit = req.limit.unwrap_or(state.nearby_limit);

    let resorts: Vec<NearbyResort> = state
        .catalog
        .nearest(origin, limit)
        .into_iter()
        .map(|(resort, distance_km)| NearbyResort {
            resort: resort.clone(),
            distance_km,
        })
        .collect();

    tracing::debug!(
        "Returning {} resorts near ({}, {})",
        resorts.len(),
        req.latitude,
        req.longitude
    );

    HttpResponse::Ok().json(resorts)
}

/// GET /api/v1/resorts/{id}
async fn get_resort(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get(id) {
        Some(resort) => HttpResponse::Ok().json(resort),
        None => not_found(format!("Resort {} does not exist", id)),
    }
}

/// Current weather at a resort
///
/// GET /api/v1/resorts/{id}/weather
///
/// Responds 204 when weather lookups are not configured.
async fn resort_weather(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();

    let Some(resort) = state.catalog.get(id) else {
        return not_found(format!("Resort {} does not exist", id));
    };

    match state.weather.current(resort.coordinate()).await {
        Ok(Some(weather)) => HttpResponse::Ok().json(weather),
        Ok(None) => HttpResponse::NoContent().finish(),
        Err(e) => {
            tracing::warn!("Weather lookup failed for resort {}: {}", id, e);
            HttpResponse::BadGateway().json(ErrorResponse::new(
                "Weather unavailable",
                e.to_string(),
                502,
            ))
        }
    }
}

/// GET /api/v1/regions
async fn list_regions(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.regions())
}

/// GET /api/v1/regions/{region}/resorts
async fn region_resorts(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let region = path.into_inner();
    let resorts: Vec<_> = state.catalog.by_region(&region).collect();

    if resorts.is_empty() {
        return not_found(format!("No resorts in region {}", region));
    }

    HttpResponse::Ok().json(resorts)
}

/// SOS contacts endpoint
///
/// POST /api/v1/rescue
///
/// Location is optional; without it every resort rescue phone is listed.
async fn rescue(state: web::Data<AppState>, req: web::Json<RescueRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let origin = req.location();
    let contacts = rescue_contacts(state.catalog.all(), origin, &state.rescue);

    tracing::info!(
        "SOS request (location: {}), returning {} contacts",
        origin.is_some(),
        contacts.len()
    );

    HttpResponse::Ok().json(RescueResponse {
        emergency_number: EMERGENCY_NUMBER,
        contacts,
    })
}
