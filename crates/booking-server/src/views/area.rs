//! Venues grouped by the place they are in

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use super::partition::count_upcoming;
use crate::models::{ShowListing, Venue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaVenue {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// One distinct `(city, state)` pair and its venues
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<AreaVenue>,
    /// Sum of `num_upcoming_shows` over `venues`
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDirectory {
    pub count: usize,
    pub areas: Vec<Area>,
}

/// Group `venues` into areas
///
/// Areas appear in the order their first venue appears in `venues`, and
/// venues keep their input order inside an area. `shows` may include shows
/// of venues not in `venues`; they are ignored.
pub fn group_venues_by_area(
    venues: Vec<Venue>,
    shows: &[ShowListing],
    reference_time: DateTime<Utc>,
) -> VenueDirectory {
    let mut per_venue: HashMap<i32, Vec<&ShowListing>> = HashMap::new();
    for show in shows {
        per_venue.entry(show.venue_id).or_default().push(show);
    }

    let count = venues.len();
    let mut areas: Vec<Area> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for venue in venues {
        let num_upcoming_shows = per_venue
            .get(&venue.id)
            .map(|shows| count_upcoming(shows.iter().copied(), reference_time))
            .unwrap_or(0);

        let key = (venue.city, venue.state);
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                areas.push(Area {
                    city: key.0.clone(),
                    state: key.1.clone(),
                    venues: Vec::new(),
                    upcoming_shows_count: 0,
                });
                index.insert(key, areas.len() - 1);
                areas.len() - 1
            }
        };

        let area = &mut areas[slot];
        area.upcoming_shows_count += num_upcoming_shows;
        area.venues.push(AreaVenue {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows,
        });
    }

    VenueDirectory { count, areas }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_fixtures::*;
    use chrono::Duration;

    #[test]
    fn test_groups_by_city_and_state() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
        ];

        let directory = group_venues_by_area(venues, &[], reference_time());

        assert_eq!(directory.count, 3);
        assert_eq!(directory.areas.len(), 2);
        assert_eq!(directory.areas[0].city, "San Francisco");
        assert_eq!(directory.areas[0].venues.len(), 2);
        assert_eq!(directory.areas[0].venues[1].id, 3);
        assert_eq!(directory.areas[1].state, "NY");
        assert_eq!(directory.areas[1].venues.len(), 1);
    }

    #[test]
    fn test_same_state_different_city_are_separate() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "Hollywood Bowl", "Los Angeles", "CA"),
        ];

        let directory = group_venues_by_area(venues, &[], reference_time());

        assert_eq!(directory.areas.len(), 2);
        assert_eq!(directory.areas[1].city, "Los Angeles");
    }

    #[test]
    fn test_upcoming_counts_per_venue_and_area() {
        let now = reference_time();
        let hop = venue(1, "The Musical Hop", "San Francisco", "CA");
        let park = venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA");
        let band = artist(6, "The Wild Sax Band");
        let shows = vec![
            listing(1, now + Duration::days(1), &hop, &band),
            listing(2, now - Duration::days(1), &hop, &band),
            listing(3, now + Duration::days(2), &park, &band),
            listing(4, now + Duration::days(3), &park, &band),
            listing(5, now, &park, &band),
        ];

        let directory = group_venues_by_area(vec![hop, park], &shows, now);
        let area = &directory.areas[0];

        assert_eq!(area.venues[0].num_upcoming_shows, 1);
        assert_eq!(area.venues[1].num_upcoming_shows, 2);
        assert_eq!(area.upcoming_shows_count, 3);
    }

    #[test]
    fn test_no_venues() {
        let directory = group_venues_by_area(Vec::new(), &[], reference_time());
        assert_eq!(directory.count, 0);
        assert!(directory.areas.is_empty());
    }
}
