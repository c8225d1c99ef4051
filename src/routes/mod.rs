// Route exports
pub mod equipment;
pub mod matches;
pub mod resorts;

use crate::config::Settings;
use crate::core::{Matcher, RescueSettings};
use crate::models::{ErrorResponse, HealthResponse, ScoringWeights};
use crate::services::{ResortCatalog, SessionStore, WeatherClient, WeatherError};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::ValidationErrors;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ResortCatalog>,
    pub weather: WeatherClient,
    pub sessions: SessionStore,
    pub matcher: Matcher,
    pub rescue: RescueSettings,
    pub nearby_limit: usize,
}

impl AppState {
    /// Build the state from loaded settings with the built-in catalog
    pub fn from_settings(settings: &Settings) -> Result<Self, WeatherError> {
        let weights = ScoringWeights::from(&settings.scoring.weights);

        Ok(Self {
            catalog: Arc::new(ResortCatalog::builtin()),
            weather: WeatherClient::new(&settings.weather)?,
            sessions: SessionStore::from_settings(&settings.sessions),
            matcher: Matcher::new(
                weights,
                settings.matching.max_profiles,
                settings.matching.event_score,
            ),
            rescue: RescueSettings::from(&settings.rescue),
            nearby_limit: settings.matching.nearby_limit,
        })
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(equipment::configure)
            .configure(resorts::configure)
            .configure(matches::configure),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_failed(errors: ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: field_errors={:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "Validation failed",
        errors.to_string(),
        400,
    ))
}

fn not_found(message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not found", message, 404))
}
