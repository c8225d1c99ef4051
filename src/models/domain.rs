use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use validator::Validate;

/// Geographic point in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle distance to another point in kilometers
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        crate::core::distance::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// Enumerations that arrive from the chat layer as free-text button labels.
///
/// Both the Russian labels used by the bot keyboards and plain English
/// identifiers are accepted. Anything else resolves to `None`.
pub trait Label: Sized {
    fn from_label(label: &str) -> Option<Self>;
}

/// Deserialize an optional enum field, mapping unknown labels to `None`
/// instead of failing the whole payload.
pub fn lenient_label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Label,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|label| {
        let parsed = T::from_label(label);
        if parsed.is_none() {
            tracing::debug!("Ignoring unrecognised label: {:?}", label);
        }
        parsed
    }))
}

/// Ride discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideType {
    Snowboard,
    Ski,
}

impl Label for RideType {
    fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "snowboard" | "🏂 Сноуборд" | "Сноуборд" => Some(RideType::Snowboard),
            "ski" | "🎿 Лыжи" | "Лыжи" => Some(RideType::Ski),
            _ => None,
        }
    }
}

/// Rider skill level, ordered from least to most experienced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Position on the beginner..advanced scale
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::Beginner => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Advanced => 2,
        }
    }

    /// Number of steps between two levels on the scale
    pub fn steps_to(self, other: SkillLevel) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

impl Label for SkillLevel {
    fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "beginner" | "Новичок" => Some(SkillLevel::Beginner),
            "intermediate" | "Средний" => Some(SkillLevel::Intermediate),
            "advanced" | "Продвинутый" => Some(SkillLevel::Advanced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Total parse: only explicit female labels count as female
    pub fn parse(label: &str) -> Gender {
        match label.trim().to_lowercase().as_str() {
            "ж" | "f" | "female" | "женский" | "женщина" => Gender::Female,
            _ => Gender::Male,
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Gender::parse(&raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnowboardStyle {
    AllMountain,
    Freestyle,
    Freeride,
}

impl Label for SnowboardStyle {
    fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "all-mountain" | "Универсал" => Some(SnowboardStyle::AllMountain),
            "freestyle" | "Фристайл" => Some(SnowboardStyle::Freestyle),
            "freeride" | "Фрирайд" => Some(SnowboardStyle::Freeride),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkiStyle {
    Carving,
    AllMountain,
    Freeride,
}

impl Label for SkiStyle {
    fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "carving" | "trail" | "Трасса" | "Карвинг" => Some(SkiStyle::Carving),
            "all-mountain" | "Универсал" => Some(SkiStyle::AllMountain),
            "freeride" | "Фрирайд" => Some(SkiStyle::Freeride),
            _ => None,
        }
    }
}

/// Rider profile, restricted to the fields matching cares about
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiderProfile {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "rideType", default, deserialize_with = "lenient_label")]
    pub ride_type: Option<RideType>,
    #[serde(rename = "skillLevel", default, deserialize_with = "lenient_label")]
    pub skill_level: Option<SkillLevel>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub location: Option<Coordinate>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(rename = "photoIds", default)]
    pub photo_ids: Vec<String>,
}

impl RiderProfile {
    /// City name as entered; a blank string counts as absent
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Age, treating zero as absent
    pub fn age(&self) -> Option<u8> {
        self.age.filter(|age| *age > 0)
    }

    pub fn has_about(&self) -> bool {
        self.about
            .as_deref()
            .is_some_and(|about| !about.trim().is_empty())
    }

    pub fn has_photos(&self) -> bool {
        !self.photo_ids.is_empty()
    }
}

/// Group ride created by a rider at a resort
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideEvent {
    pub id: i64,
    #[serde(rename = "creatorId")]
    pub creator_id: i64,
    #[serde(rename = "resortId")]
    pub resort_id: u32,
    #[serde(rename = "eventDate")]
    pub event_date: chrono::NaiveDate,
    #[serde(rename = "skillLevel", default, deserialize_with = "lenient_label")]
    pub skill_level: Option<SkillLevel>,
    #[serde(rename = "groupLink")]
    pub group_link: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "photoId", default)]
    pub photo_id: Option<String>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool { true }

/// Ski resort from the built-in catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resort {
    pub id: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub region: String,
    pub site: Option<String>,
    #[serde(rename = "trailsCount")]
    pub trails_count: u16,
    #[serde(rename = "trailLevels")]
    pub trail_levels: String,
    #[serde(rename = "liftsCount")]
    pub lifts_count: u16,
    #[serde(rename = "rescuePhone")]
    pub rescue_phone: Option<String>,
}

impl Resort {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Snowboard size calculator input
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SnowboardQuery {
    #[validate(range(min = 100, max = 230))]
    #[serde(rename = "heightCm")]
    pub height_cm: u16,
    #[validate(range(min = 30, max = 200))]
    #[serde(rename = "weightKg")]
    pub weight_kg: u16,
    #[serde(default)]
    pub gender: Gender,
    #[validate(range(min = 30.0, max = 52.0))]
    #[serde(rename = "shoeSize")]
    pub shoe_size: f32,
    #[serde(default, deserialize_with = "lenient_label")]
    pub style: Option<SnowboardStyle>,
}

/// Ski size calculator input
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkiQuery {
    #[validate(range(min = 100, max = 230))]
    #[serde(rename = "heightCm")]
    pub height_cm: u16,
    #[validate(range(min = 30, max = 200))]
    #[serde(rename = "weightKg")]
    pub weight_kg: u16,
    #[serde(default, deserialize_with = "lenient_label")]
    pub level: Option<SkillLevel>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub style: Option<SkiStyle>,
}

/// Recommended snowboard length range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowboardSize {
    #[serde(rename = "minLength")]
    pub min_length: u16,
    #[serde(rename = "maxLength")]
    pub max_length: u16,
    pub wide: bool,
    pub explanation: String,
}

/// Waist width band in millimetres; an open end means "or less"/"or more"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaistWidth {
    #[serde(rename = "minMm")]
    pub min_mm: Option<u16>,
    #[serde(rename = "maxMm")]
    pub max_mm: Option<u16>,
}

impl fmt::Display for WaistWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min_mm, self.max_mm) {
            (None, Some(max)) => write!(f, "≤{} mm", max),
            (Some(min), Some(max)) => write!(f, "{}–{} mm", min, max),
            (Some(min), None) => write!(f, "{}+ mm", min),
            (None, None) => write!(f, "any"),
        }
    }
}

/// Sidecut turn radius band in metres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRadius {
    #[serde(rename = "minM")]
    pub min_m: u16,
    #[serde(rename = "maxM")]
    pub max_m: u16,
}

impl fmt::Display for TurnRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{} m", self.min_m, self.max_m)
    }
}

/// Recommended ski length range with geometry hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkiSize {
    #[serde(rename = "minLength")]
    pub min_length: u16,
    #[serde(rename = "maxLength")]
    pub max_length: u16,
    pub waist: WaistWidth,
    pub radius: TurnRadius,
    pub explanation: String,
}

/// What a browsing candidate points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CandidateKind {
    Profile {
        #[serde(rename = "userId")]
        user_id: i64,
    },
    Event {
        #[serde(rename = "eventId")]
        event_id: i64,
    },
}

/// Scored candidate, alive for one browsing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    #[serde(flatten)]
    pub kind: CandidateKind,
    pub score: u32,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Optional narrowing applied before scoring
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(rename = "rideType", default, deserialize_with = "lenient_label")]
    pub ride_type: Option<RideType>,
    #[serde(rename = "skillLevel", default, deserialize_with = "lenient_label")]
    pub skill_level: Option<SkillLevel>,
}

/// Riders the viewer must not see again
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    pub liked: std::collections::HashSet<i64>,
    pub blocked: std::collections::HashSet<i64>,
}

/// Points awarded per matching feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub same_ride_type: u32,
    pub same_level: u32,
    pub adjacent_level: u32,
    pub same_city: u32,
    pub close_age: u32,
    pub near_age: u32,
    pub within_10_km: u32,
    pub within_50_km: u32,
    pub within_100_km: u32,
    pub has_about: u32,
    pub has_photos: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            same_ride_type: 20,
            same_level: 15,
            adjacent_level: 5,
            same_city: 20,
            close_age: 10,
            near_age: 5,
            within_10_km: 20,
            within_50_km: 10,
            within_100_km: 5,
            has_about: 5,
            has_photos: 10,
        }
    }
}
