// Service exports
pub mod resorts;
pub mod sessions;
pub mod weather;

pub use resorts::ResortCatalog;
pub use sessions::{SessionError, SessionStep, SessionStore};
pub use weather::{weather_emoji, Weather, WeatherClient, WeatherError};
