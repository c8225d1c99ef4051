use crate::config::WeatherSettings;
use crate::models::Coordinate;
use moka::future::Cache;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching the weather
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Weather API returned status {0}")]
    Api(u16),

    #[error("Invalid weather payload: {0}")]
    Parse(String),
}

/// Current conditions at a resort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// Degrees Celsius
    pub temp: i32,
    #[serde(rename = "feelsLike")]
    pub feels_like: i32,
    pub description: String,
    /// Metres per second
    pub wind: i32,
    /// Percent
    pub humidity: u8,
    pub icon: String,
}

impl Weather {
    /// Short multi-line text for chat messages
    pub fn summary(&self) -> String {
        format!(
            "{} {}°C (ощущается {}°C)\n💨 Ветер: {} м/с\n💧 Влажность: {}%\n📝 {}",
            self.icon,
            self.temp,
            self.feels_like,
            self.wind,
            self.humidity,
            capitalize(&self.description)
        )
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Emoji for an OpenWeatherMap icon code
pub fn weather_emoji(icon_code: &str) -> &'static str {
    match icon_code {
        "01d" => "☀️",
        "01n" => "🌙",
        "02d" => "⛅",
        "02n" | "03d" | "03n" | "04d" | "04n" => "☁️",
        "09d" | "09n" | "10n" => "🌧️",
        "10d" => "🌦️",
        "11d" | "11n" => "⛈️",
        "13d" | "13n" => "🌨️",
        "50d" | "50n" => "🌫️",
        _ => "🌤️",
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    main: ApiMain,
    weather: Vec<ApiCondition>,
    wind: ApiWind,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct ApiWind {
    speed: f64,
}

impl TryFrom<ApiResponse> for Weather {
    type Error = WeatherError;

    fn try_from(response: ApiResponse) -> Result<Self, Self::Error> {
        let condition = response
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("missing weather conditions".into()))?;

        Ok(Self {
            temp: response.main.temp.round() as i32,
            feels_like: response.main.feels_like.round() as i32,
            description: condition.description,
            wind: response.wind.speed.round() as i32,
            humidity: response.main.humidity,
            icon: weather_emoji(&condition.icon).to_string(),
        })
    }
}

/// Grid cell used as cache key, about 1 km across
type CacheKey = (i32, i32);

fn cache_key(coordinate: Coordinate) -> CacheKey {
    (
        (coordinate.latitude * 100.0).round() as i32,
        (coordinate.longitude * 100.0).round() as i32,
    )
}

/// OpenWeatherMap client with a short-lived in-memory cache
///
/// Without an API key every lookup returns `Ok(None)`.
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    cache: Cache<CacheKey, Weather>,
}

impl WeatherClient {
    pub fn new(settings: &WeatherSettings) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        let cache = moka::future::CacheBuilder::new(settings.cache_size)
            .time_to_live(Duration::from_secs(settings.cache_ttl_secs))
            .build();

        let api_key = settings
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key,
            cache,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Current weather at a coordinate
    pub async fn current(&self, coordinate: Coordinate) -> Result<Option<Weather>, WeatherError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(None);
        };

        let key = cache_key(coordinate);
        if let Some(weather) = self.cache.get(&key).await {
            tracing::trace!("Weather cache hit: {:?}", key);
            return Ok(Some(weather));
        }

        tracing::debug!(
            "Fetching weather for ({}, {})",
            coordinate.latitude,
            coordinate.longitude
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("lat", coordinate.latitude.to_string()),
                ("lon", coordinate.longitude.to_string()),
                ("appid", api_key.to_string()),
                ("units", "metric".to_string()),
                ("lang", "ru".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Weather API returned {}", status);
            return Err(WeatherError::Api(status.as_u16()));
        }

        let body = response.text().await?;
        let payload: ApiResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;
        let weather = Weather::try_from(payload)?;

        self.cache.insert(key, weather.clone()).await;

        Ok(Some(weather))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const PAYLOAD: &str = r#"{
        "weather": [{"id": 600, "main": "Snow", "description": "небольшой снег", "icon": "13d"}],
        "main": {"temp": -7.6, "feels_like": -12.4, "humidity": 85},
        "wind": {"speed": 3.5}
    }"#;

    fn settings(endpoint: String, api_key: Option<&str>) -> WeatherSettings {
        WeatherSettings {
            api_key: api_key.map(str::to_string),
            endpoint,
            ..WeatherSettings::default()
        }
    }

    #[test]
    fn test_weather_emoji() {
        assert_eq!(weather_emoji("01d"), "☀️");
        assert_eq!(weather_emoji("01n"), "🌙");
        assert_eq!(weather_emoji("04n"), "☁️");
        assert_eq!(weather_emoji("10d"), "🌦️");
        assert_eq!(weather_emoji("10n"), "🌧️");
        assert_eq!(weather_emoji("13n"), "🌨️");
        assert_eq!(weather_emoji("xx"), "🌤️");
    }

    #[test]
    fn test_summary() {
        let weather = Weather {
            temp: -8,
            feels_like: -12,
            description: "небольшой снег".to_string(),
            wind: 4,
            humidity: 85,
            icon: "🌨️".to_string(),
        };

        let summary = weather.summary();
        assert!(summary.starts_with("🌨️ -8°C (ощущается -12°C)"));
        assert!(summary.contains("Ветер: 4 м/с"));
        assert!(summary.ends_with("📝 Небольшой снег"));
    }

    #[tokio::test]
    async fn test_disabled_without_api_key() {
        let client = WeatherClient::new(&settings("http://127.0.0.1:1".to_string(), None)).unwrap();

        assert!(!client.is_enabled());
        let weather = client.current(Coordinate::new(43.65, 40.29)).await.unwrap();
        assert!(weather.is_none());
    }

    #[tokio::test]
    async fn test_fetches_and_caches() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/data/2.5/weather")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("appid".into(), "secret".into()),
                Matcher::UrlEncoded("units".into(), "metric".into()),
                Matcher::UrlEncoded("lang".into(), "ru".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PAYLOAD)
            .expect(1)
            .create_async()
            .await;

        let endpoint = format!("{}/data/2.5/weather", server.url());
        let client = WeatherClient::new(&settings(endpoint, Some("secret"))).unwrap();
        let rosa = Coordinate::new(43.657, 40.297);

        let first = client.current(rosa).await.unwrap().unwrap();
        let second = client.current(rosa).await.unwrap().unwrap();

        assert_eq!(first.temp, -8);
        assert_eq!(first.feels_like, -12);
        assert_eq!(first.wind, 4);
        assert_eq!(first.humidity, 85);
        assert_eq!(first.icon, "🌨️");
        assert_eq!(first, second);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/data/2.5/weather")
            .match_query(Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let endpoint = format!("{}/data/2.5/weather", server.url());
        let client = WeatherClient::new(&settings(endpoint, Some("bad"))).unwrap();

        let result = client.current(Coordinate::new(55.0, 37.0)).await;
        assert!(matches!(result, Err(WeatherError::Api(401))));
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/data/2.5/weather")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"weather": [], "main": {"temp": 1.0, "feels_like": 1.0, "humidity": 50}, "wind": {"speed": 1.0}}"#)
            .create_async()
            .await;

        let endpoint = format!("{}/data/2.5/weather", server.url());
        let client = WeatherClient::new(&settings(endpoint, Some("key"))).unwrap();

        let result = client.current(Coordinate::new(55.0, 37.0)).await;
        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }
}
