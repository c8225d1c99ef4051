use crate::core::sort_by_distance;
use crate::models::{Coordinate, Resort};

/// Static resort record the catalog is built from
struct ResortSeed {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    region: &'static str,
    site: Option<&'static str>,
    trails_count: u16,
    trail_levels: &'static str,
    lifts_count: u16,
    rescue_phone: Option<&'static str>,
}

#[rustfmt::skip]
const RESORTS: &[ResortSeed] = &[
    ResortSeed { name: "КАНТ (Нагорная)", latitude: 55.6760, longitude: 37.5720, region: "Москва", site: Some("https://kant-sport.ru/"), trails_count: 11, trail_levels: "зелёные, синие, красные", lifts_count: 7, rescue_phone: Some("+74959092443") },
    ResortSeed { name: "Крылатское", latitude: 55.7530, longitude: 37.4480, region: "Москва", site: Some("https://krylatskoe-ski.ru/"), trails_count: 5, trail_levels: "зелёные, синие", lifts_count: 3, rescue_phone: Some("+74991448878") },
    ResortSeed { name: "Лата Трэк", latitude: 55.7906, longitude: 37.5736, region: "Москва", site: Some("https://spusk.ru/"), trails_count: 3, trail_levels: "зелёные, синие", lifts_count: 2, rescue_phone: Some("+74993174777") },
    ResortSeed { name: "Сорочаны", latitude: 56.0090, longitude: 37.3600, region: "Московская область", site: Some("https://sorochany.ru/"), trails_count: 10, trail_levels: "зелёные, синие, красные", lifts_count: 8, rescue_phone: Some("+74955025255") },
    ResortSeed { name: "Волен", latitude: 56.0603, longitude: 37.3904, region: "Московская область", site: Some("https://volen.ru/"), trails_count: 13, trail_levels: "зелёные, синие, красные", lifts_count: 10, rescue_phone: Some("+74955012323") },
    ResortSeed { name: "Степаново", latitude: 56.0621, longitude: 37.4012, region: "Московская область", site: Some("https://stepanovo-park.ru/"), trails_count: 8, trail_levels: "зелёные, синие, красные", lifts_count: 5, rescue_phone: Some("+74955012000") },
    ResortSeed { name: "Чулково (Клуб Тягачева)", latitude: 55.6547, longitude: 37.9636, region: "Московская область", site: Some("https://chulkovo-club.ru/"), trails_count: 7, trail_levels: "зелёные, синие, красные", lifts_count: 4, rescue_phone: Some("+74955842222") },
    ResortSeed { name: "Лоза", latitude: 56.3000, longitude: 38.1330, region: "Московская область", site: Some("https://loza-ski.ru/"), trails_count: 4, trail_levels: "зелёные, синие", lifts_count: 2, rescue_phone: None },
    ResortSeed { name: "Охта-Парк", latitude: 60.0906, longitude: 30.3894, region: "Санкт-Петербург", site: Some("https://ohta-park.ru/"), trails_count: 10, trail_levels: "зелёные, синие, красные", lifts_count: 6, rescue_phone: Some("+78123356666") },
    ResortSeed { name: "Игора", latitude: 60.5189, longitude: 30.1997, region: "Ленинградская область", site: Some("https://igora.ru/"), trails_count: 15, trail_levels: "зелёные, синие, красные, чёрные", lifts_count: 8, rescue_phone: Some("+78124565900") },
    ResortSeed { name: "Северный склон", latitude: 60.0415, longitude: 30.3749, region: "Санкт-Петербург", site: Some("https://sevsklon.ru/"), trails_count: 6, trail_levels: "зелёные, синие", lifts_count: 3, rescue_phone: Some("+78129241111") },
    ResortSeed { name: "Туутари-Парк", latitude: 59.7006, longitude: 30.2003, region: "Ленинградская область", site: Some("https://tuutari-park.ru/"), trails_count: 5, trail_levels: "зелёные, синие", lifts_count: 3, rescue_phone: Some("+78127770170") },
    ResortSeed { name: "Золотая Долина", latitude: 60.5560, longitude: 29.7200, region: "Ленинградская область", site: Some("https://zolotaya-dolina.ru/"), trails_count: 12, trail_levels: "зелёные, синие, красные", lifts_count: 6, rescue_phone: Some("+78137841111") },
    ResortSeed { name: "Гора Белая", latitude: 57.4936, longitude: 59.9375, region: "Свердловская область", site: Some("https://ski-gora-belaya.ru/"), trails_count: 7, trail_levels: "зелёные, синие, красные", lifts_count: 5, rescue_phone: Some("+73435070707") },
    ResortSeed { name: "Уктус", latitude: 56.7793, longitude: 60.6416, region: "Екатеринбург", site: Some("https://uktus.com/"), trails_count: 5, trail_levels: "зелёные, синие", lifts_count: 4, rescue_phone: Some("+73433898989") },
    ResortSeed { name: "Пильная", latitude: 56.9300, longitude: 59.9500, region: "Свердловская область", site: Some("https://pilnaya.ru/"), trails_count: 6, trail_levels: "зелёные, синие", lifts_count: 3, rescue_phone: None },
    ResortSeed { name: "Солнечная Долина", latitude: 54.9857, longitude: 60.2217, region: "Челябинская область", site: Some("https://solnechnaya-dolina.com/"), trails_count: 12, trail_levels: "зелёные, синие, красные, чёрные", lifts_count: 8, rescue_phone: Some("+73519777777") },
    ResortSeed { name: "Банное (Металлург-Магнитогорск)", latitude: 53.5900, longitude: 58.9700, region: "Челябинская область", site: Some("https://ski-bannoe.ru/"), trails_count: 6, trail_levels: "синие, красные", lifts_count: 4, rescue_phone: Some("+73473633333") },
    ResortSeed { name: "Абзаково", latitude: 53.8200, longitude: 58.6000, region: "Башкортостан", site: Some("https://abzakovo.com/"), trails_count: 13, trail_levels: "зелёные, синие, красные, чёрные", lifts_count: 9, rescue_phone: Some("+73519579600") },
    ResortSeed { name: "Роза Хутор", latitude: 43.6570, longitude: 40.2970, region: "Сочи, Краснодарский край", site: Some("https://roza-khutor.com/"), trails_count: 105, trail_levels: "зелёные, синие, красные, чёрные", lifts_count: 32, rescue_phone: Some("+78622437100") },
    ResortSeed { name: "Газпром Лаура", latitude: 43.6628, longitude: 40.2665, region: "Сочи, Краснодарский край", site: Some("https://polyanaski.ru/"), trails_count: 35, trail_levels: "зелёные, синие, красные", lifts_count: 10, rescue_phone: Some("+78622437000") },
    ResortSeed { name: "Красная Поляна", latitude: 43.6730, longitude: 40.2710, region: "Сочи, Краснодарский край", site: Some("https://krasnayapolyanaresort.ru/"), trails_count: 30, trail_levels: "зелёные, синие, красные, чёрные", lifts_count: 13, rescue_phone: Some("+78622437200") },
    ResortSeed { name: "Шерегеш", latitude: 52.9150, longitude: 87.9850, region: "Кемеровская область", site: Some("https://sheregesh.su/"), trails_count: 40, trail_levels: "зелёные, синие, красные, чёрные", lifts_count: 19, rescue_phone: Some("+73845337911") },
    ResortSeed { name: "Архыз", latitude: 43.5600, longitude: 41.2200, region: "Карачаево-Черкесия", site: Some("https://arhyz-resort.ru/"), trails_count: 15, trail_levels: "зелёные, синие, красные", lifts_count: 8, rescue_phone: Some("+78782226600") },
    ResortSeed { name: "Домбай", latitude: 43.2880, longitude: 41.6280, region: "Карачаево-Черкесия", site: Some("https://dombaj.ru/"), trails_count: 14, trail_levels: "синие, красные, чёрные", lifts_count: 7, rescue_phone: Some("+78782259111") },
    ResortSeed { name: "Эльбрус (Азау)", latitude: 43.2700, longitude: 42.4700, region: "Кабардино-Балкария", site: Some("https://elbrus.su/"), trails_count: 20, trail_levels: "синие, красные, чёрные", lifts_count: 7, rescue_phone: Some("+78663871899") },
    ResortSeed { name: "Большой Вудъявр", latitude: 67.6120, longitude: 33.6770, region: "Мурманская область", site: Some("https://bigwood.ru/"), trails_count: 25, trail_levels: "зелёные, синие, красные, чёрные", lifts_count: 10, rescue_phone: Some("+78155332211") },
    ResortSeed { name: "Горный Воздух", latitude: 46.9590, longitude: 142.7470, region: "Сахалин", site: Some("https://gornyvozdukh.ru/"), trails_count: 9, trail_levels: "зелёные, синие, красные", lifts_count: 5, rescue_phone: Some("+74242467777") },
    ResortSeed { name: "Свияжские Холмы", latitude: 55.7825, longitude: 48.8890, region: "Татарстан", site: Some("https://sviyaga-ski.ru/"), trails_count: 6, trail_levels: "зелёные, синие, красные", lifts_count: 4, rescue_phone: Some("+78432777700") },
    ResortSeed { name: "Хабарское", latitude: 56.1440, longitude: 44.0900, region: "Нижегородская область", site: Some("https://habarskoe.ru/"), trails_count: 10, trail_levels: "зелёные, синие, красные", lifts_count: 5, rescue_phone: Some("+78314666000") },
    ResortSeed { name: "Горский", latitude: 54.9840, longitude: 82.9080, region: "Новосибирск", site: None, trails_count: 4, trail_levels: "зелёные, синие", lifts_count: 2, rescue_phone: None },
    ResortSeed { name: "Бобровый Лог", latitude: 55.9680, longitude: 92.7950, region: "Красноярск", site: Some("https://bobrovylog.ru/"), trails_count: 15, trail_levels: "зелёные, синие, красные, чёрные", lifts_count: 7, rescue_phone: Some("+73912691111") },
];

/// In-memory resort catalog
///
/// Ids are assigned 1..N in seed order and never change for the lifetime
/// of the process.
#[derive(Debug, Clone)]
pub struct ResortCatalog {
    resorts: Vec<Resort>,
}

impl ResortCatalog {
    /// Catalog with the built-in resort list
    pub fn builtin() -> Self {
        let resorts = RESORTS
            .iter()
            .zip(1u32..)
            .map(|(seed, id)| Resort {
                id,
                name: seed.name.to_string(),
                latitude: seed.latitude,
                longitude: seed.longitude,
                region: seed.region.to_string(),
                site: seed.site.map(str::to_string),
                trails_count: seed.trails_count,
                trail_levels: seed.trail_levels.to_string(),
                lifts_count: seed.lifts_count,
                rescue_phone: seed.rescue_phone.map(str::to_string),
            })
            .collect();

        Self { resorts }
    }

    /// Catalog over an arbitrary resort list
    pub fn from_resorts(resorts: Vec<Resort>) -> Self {
        Self { resorts }
    }

    pub fn all(&self) -> &[Resort] {
        &self.resorts
    }

    pub fn len(&self) -> usize {
        self.resorts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resorts.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Resort> {
        self.resorts.iter().find(|resort| resort.id == id)
    }

    /// Distinct regions in first-seen order
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = Vec::new();
        for resort in &self.resorts {
            if !regions.contains(&resort.region.as_str()) {
                regions.push(&resort.region);
            }
        }
        regions
    }

    pub fn by_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a Resort> + 'a {
        self.resorts
            .iter()
            .filter(move |resort| resort.region == region)
    }

    /// Closest `limit` resorts with their distance in km
    pub fn nearest(&self, origin: Coordinate, limit: usize) -> Vec<(&Resort, f64)> {
        let mut sorted = sort_by_distance(origin, &self.resorts);
        sorted.truncate(limit);
        sorted
    }
}

impl Default for ResortCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
