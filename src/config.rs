use crate::core::RescueSettings;
use crate::models::ScoringWeights;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub rescue: RescueConfig,
    #[serde(default)]
    pub weather: WeatherSettings,
    #[serde(default)]
    pub sessions: SessionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_profiles")]
    pub max_profiles: usize,
    #[serde(default = "default_event_score")]
    pub event_score: u32,
    #[serde(default = "default_nearby_limit")]
    pub nearby_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_profiles: default_max_profiles(),
            event_score: default_event_score(),
            nearby_limit: default_nearby_limit(),
        }
    }
}

fn default_max_profiles() -> usize { 100 }
fn default_event_score() -> u32 { 50 }
fn default_nearby_limit() -> usize { 5 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Points per matching feature, as read from config
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_ride_type_weight")]
    pub same_ride_type: u32,
    #[serde(default = "default_same_level_weight")]
    pub same_level: u32,
    #[serde(default = "default_adjacent_level_weight")]
    pub adjacent_level: u32,
    #[serde(default = "default_city_weight")]
    pub same_city: u32,
    #[serde(default = "default_close_age_weight")]
    pub close_age: u32,
    #[serde(default = "default_near_age_weight")]
    pub near_age: u32,
    #[serde(default = "default_within_10_km_weight")]
    pub within_10_km: u32,
    #[serde(default = "default_within_50_km_weight")]
    pub within_50_km: u32,
    #[serde(default = "default_within_100_km_weight")]
    pub within_100_km: u32,
    #[serde(default = "default_about_weight")]
    pub has_about: u32,
    #[serde(default = "default_photos_weight")]
    pub has_photos: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            same_ride_type: default_ride_type_weight(),
            same_level: default_same_level_weight(),
            adjacent_level: default_adjacent_level_weight(),
            same_city: default_city_weight(),
            close_age: default_close_age_weight(),
            near_age: default_near_age_weight(),
            within_10_km: default_within_10_km_weight(),
            within_50_km: default_within_50_km_weight(),
            within_100_km: default_within_100_km_weight(),
            has_about: default_about_weight(),
            has_photos: default_photos_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            same_ride_type: config.same_ride_type,
            same_level: config.same_level,
            adjacent_level: config.adjacent_level,
            same_city: config.same_city,
            close_age: config.close_age,
            near_age: config.near_age,
            within_10_km: config.within_10_km,
            within_50_km: config.within_50_km,
            within_100_km: config.within_100_km,
            has_about: config.has_about,
            has_photos: config.has_photos,
        }
    }
}

fn default_ride_type_weight() -> u32 { 20 }
fn default_same_level_weight() -> u32 { 15 }
fn default_adjacent_level_weight() -> u32 { 5 }
fn default_city_weight() -> u32 { 20 }
fn default_close_age_weight() -> u32 { 10 }
fn default_near_age_weight() -> u32 { 5 }
fn default_within_10_km_weight() -> u32 { 20 }
fn default_within_50_km_weight() -> u32 { 10 }
fn default_within_100_km_weight() -> u32 { 5 }
fn default_about_weight() -> u32 { 5 }
fn default_photos_weight() -> u32 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct RescueConfig {
    #[serde(default = "default_rescue_radius")]
    pub radius_km: f64,
    #[serde(default = "default_rescue_fallback")]
    pub fallback_count: usize,
    #[serde(default = "default_rescue_max")]
    pub max_results: usize,
}

impl Default for RescueConfig {
    fn default() -> Self {
        Self {
            radius_km: default_rescue_radius(),
            fallback_count: default_rescue_fallback(),
            max_results: default_rescue_max(),
        }
    }
}

impl From<&RescueConfig> for RescueSettings {
    fn from(config: &RescueConfig) -> Self {
        Self {
            radius_km: config.radius_km,
            fallback_count: config.fallback_count,
            max_results: config.max_results,
        }
    }
}

fn default_rescue_radius() -> f64 { 100.0 }
fn default_rescue_fallback() -> usize { 5 }
fn default_rescue_max() -> usize { 8 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    /// Weather lookups are disabled when unset
    pub api_key: Option<String>,
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_weather_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_weather_cache_size")]
    pub cache_size: u64,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_weather_endpoint(),
            timeout_secs: default_weather_timeout(),
            cache_ttl_secs: default_weather_cache_ttl(),
            cache_size: default_weather_cache_size(),
        }
    }
}

fn default_weather_endpoint() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}
fn default_weather_timeout() -> u64 { 5 }
fn default_weather_cache_ttl() -> u64 { 600 }
fn default_weather_cache_size() -> u64 { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_session_capacity")]
    pub capacity: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_session_ttl(),
            capacity: default_session_capacity(),
        }
    }
}

fn default_session_ttl() -> u64 { 1800 }
fn default_session_capacity() -> u64 { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SLOPE__)
    /// 4. WEATHER_API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g., SLOPE__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SLOPE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Honour the bare WEATHER_API_KEY variable used by existing deployments
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = std::env::var("WEATHER_API_KEY").ok().filter(|k| !k.is_empty()) {
        builder = builder.set_override("weather.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::from(&WeightsConfig::default());
        assert_eq!(weights, ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.matching.max_profiles, 100);
        assert_eq!(settings.matching.event_score, 50);
        assert_eq!(settings.rescue.radius_km, 100.0);
        assert_eq!(settings.weather.timeout_secs, 5);
        assert_eq!(settings.weather.cache_ttl_secs, 600);
        assert_eq!(settings.sessions.ttl_secs, 1800);
        assert!(settings.weather.api_key.is_none());
    }

    #[test]
    fn test_load_from_partial_file() {
        let path = std::env::temp_dir().join(format!("slope-buddy-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[scoring.weights]\nsame_city = 30").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.scoring.weights.same_city, 30);
        assert_eq!(settings.scoring.weights.same_ride_type, 20);
        assert_eq!(settings.rescue.max_results, 8);
    }
}
