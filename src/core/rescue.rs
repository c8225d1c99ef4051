use crate::models::{Coordinate, Resort};
use crate::core::distance::{
    calculate_bounding_box, is_within_bounding_box, sort_by_distance, Located,
};
use serde::Serialize;

/// Single emergency number that works everywhere in the country
pub const EMERGENCY_NUMBER: &str = "112";

/// Limits for the SOS contact list
#[derive(Debug, Clone, Copy)]
pub struct RescueSettings {
    /// Resorts within this radius of the rider are listed
    pub radius_km: f64,
    /// Nearest resorts shown when none are within the radius
    pub fallback_count: usize,
    /// Hard cap on listed contacts
    pub max_results: usize,
}

impl Default for RescueSettings {
    fn default() -> Self {
        Self {
            radius_km: 100.0,
            fallback_count: 5,
            max_results: 8,
        }
    }
}

/// Rescue service phone of a resort
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RescueContact {
    #[serde(rename = "resortId")]
    pub resort_id: u32,
    #[serde(rename = "resortName")]
    pub resort_name: String,
    pub phone: String,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
}

/// Resort that has a rescue phone on file
#[derive(Debug, Clone, Copy)]
struct Staffed<'a> {
    resort: &'a Resort,
    phone: &'a str,
}

impl Located for Staffed<'_> {
    fn coordinate(&self) -> Coordinate {
        self.resort.coordinate()
    }
}

impl Staffed<'_> {
    fn contact(&self, distance_km: Option<f64>) -> RescueContact {
        RescueContact {
            resort_id: self.resort.id,
            resort_name: self.resort.name.clone(),
            phone: self.phone.to_string(),
            distance_km,
        }
    }
}

/// Pick the rescue contacts to show a rider
///
/// Without a location every resort with a phone is listed in catalog order.
/// With one, resorts within `radius_km` are listed nearest first; if there
/// are none the `fallback_count` nearest are listed instead.
pub fn rescue_contacts(
    resorts: &[Resort],
    origin: Option<Coordinate>,
    settings: &RescueSettings,
) -> Vec<RescueContact> {
    let staffed: Vec<Staffed> = resorts
        .iter()
        .filter_map(|resort| {
            resort
                .rescue_phone
                .as_deref()
                .map(|phone| Staffed { resort, phone })
        })
        .collect();

    let Some(origin) = origin else {
        return staffed
            .iter()
            .take(settings.max_results)
            .map(|entry| entry.contact(None))
            .collect();
    };

    // Cheap box check first; only resorts inside it get an exact distance
    let bbox = calculate_bounding_box(origin.latitude, origin.longitude, settings.radius_km);
    let in_box = staffed.iter().copied().filter(|entry| {
        is_within_bounding_box(entry.resort.latitude, entry.resort.longitude, &bbox)
    });

    let nearby: Vec<RescueContact> = sort_by_distance(origin, in_box)
        .into_iter()
        .filter(|(_, distance)| *distance <= settings.radius_km)
        .take(settings.max_results)
        .map(|(entry, distance)| entry.contact(Some(distance)))
        .collect();

    if !nearby.is_empty() {
        return nearby;
    }

    tracing::debug!(
        "No rescue contacts within {} km, falling back to the {} nearest",
        settings.radius_km,
        settings.fallback_count
    );

    sort_by_distance(origin, staffed)
        .into_iter()
        .take(settings.fallback_count.min(settings.max_results))
        .map(|(entry, distance)| entry.contact(Some(distance)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_resort(id: u32, lat: f64, lon: f64, phone: Option<&str>) -> Resort {
        Resort {
            id,
            name: format!("Resort {}", id),
            latitude: lat,
            longitude: lon,
            region: "Test".to_string(),
            site: None,
            trails_count: 5,
            trail_levels: "green, blue".to_string(),
            lifts_count: 2,
            rescue_phone: phone.map(str::to_string),
        }
    }

    #[test]
    fn test_without_location_lists_all_with_phones() {
        let resorts = vec![
            create_resort(1, 55.67, 37.57, Some("+7 1")),
            create_resort(2, 55.75, 37.44, None),
            create_resort(3, 43.65, 40.29, Some("+7 3")),
        ];

        let contacts = rescue_contacts(&resorts, None, &RescueSettings::default());

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].resort_id, 1);
        assert_eq!(contacts[1].resort_id, 3);
        assert!(contacts.iter().all(|c| c.distance_km.is_none()));
    }

    #[test]
    fn test_nearby_sorted_within_radius() {
        let moscow = Coordinate::new(55.7558, 37.6173);
        let resorts = vec![
            create_resort(1, 56.06, 37.39, Some("+7 1")),  // ~37 km
            create_resort(2, 55.67, 37.57, Some("+7 2")),  // ~10 km
            create_resort(3, 43.65, 40.29, Some("+7 3")),  // Sochi, far away
        ];

        let contacts = rescue_contacts(&resorts, Some(moscow), &RescueSettings::default());

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].resort_id, 2);
        assert_eq!(contacts[1].resort_id, 1);
        assert_eq!(contacts[0].phone, "+7 2");
        assert!(contacts[0].distance_km.unwrap() < contacts[1].distance_km.unwrap());
    }

    #[test]
    fn test_falls_back_to_nearest_when_nothing_in_radius() {
        let remote = Coordinate::new(70.0, 100.0);
        let resorts: Vec<Resort> = (1..=7)
            .map(|id| create_resort(id, 55.0 + id as f64, 37.0, Some("+7")))
            .collect();

        let contacts = rescue_contacts(&resorts, Some(remote), &RescueSettings::default());

        assert_eq!(contacts.len(), 5);
        assert!(contacts.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn test_capped_at_max_results() {
        let here = Coordinate::new(55.75, 37.6);
        let resorts: Vec<Resort> = (1..=12)
            .map(|id| create_resort(id, 55.75 + id as f64 * 0.01, 37.6, Some("+7")))
            .collect();

        let contacts = rescue_contacts(&resorts, Some(here), &RescueSettings::default());

        assert_eq!(contacts.len(), 8);
        assert_eq!(contacts[0].resort_id, 1);
    }

    #[test]
    fn test_radius_bound_is_inclusive() {
        let origin = Coordinate::new(55.7558, 37.6173);
        let edge = create_resort(1, 56.2558, 37.6173, Some("+7 1"));
        let beyond = create_resort(2, 56.2658, 37.6173, Some("+7 2"));
        let settings = RescueSettings {
            radius_km: origin.distance_to(&edge.coordinate()),
            ..RescueSettings::default()
        };

        let contacts = rescue_contacts(&[beyond, edge], Some(origin), &settings);

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].resort_id, 1);
        assert_eq!(contacts[0].distance_km, Some(settings.radius_km));
    }

    #[test]
    fn test_box_check_keeps_resorts_near_the_edge() {
        let origin = Coordinate::new(55.7558, 37.6173);
        // Due east and due south, both just inside 100 km
        let resorts = vec![
            create_resort(1, 55.7558, 39.1900, Some("+7 1")),
            create_resort(2, 54.8650, 37.6173, Some("+7 2")),
        ];

        let contacts = rescue_contacts(&resorts, Some(origin), &RescueSettings::default());

        assert_eq!(contacts.len(), 2);
        assert!(contacts.iter().all(|c| c.distance_km.unwrap() <= 100.0));
    }
}
