//! Price/distance ranking of hotels around a query point.

use crate::geo::{self, Point};
use crate::models::hotel::{Hotel, HotelWithDistance};

/// Annotates every hotel with its distance to `point`, orders the whole set
/// by price ascending then distance ascending, and returns the `[skip,
/// skip+take)` slice of the ordered sequence.
///
/// Full ties on (price, distance) are broken by id ascending so repeated
/// calls over unchanged data return identical output.
pub fn rank(hotels: Vec<Hotel>, point: Point, skip: usize, take: usize) -> Vec<HotelWithDistance> {
    let mut ranked: Vec<HotelWithDistance> = hotels
        .into_iter()
        .map(|hotel| HotelWithDistance {
            distance_in_meters: geo::distance(Point::new(hotel.longitude, hotel.latitude), point),
            id: hotel.id,
            name: hotel.name,
            price: hotel.price,
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.price
            .total_cmp(&b.price)
            .then_with(|| a.distance_in_meters.total_cmp(&b.distance_in_meters))
            .then_with(|| a.id.cmp(&b.id))
    });

    ranked.into_iter().skip(skip).take(take).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: i64, name: &str, price: f64, longitude: f64, latitude: f64) -> Hotel {
        Hotel {
            id,
            name: name.to_string(),
            price,
            longitude,
            latitude,
        }
    }

    // A: price 100, distance 50; B: price 100, distance 10; C: price 50, distance 170.
    // Cheapest first, then closest among equal prices.
    fn sample_set() -> Vec<Hotel> {
        vec![
            hotel(1, "A", 100.0, 50.0, 0.0),
            hotel(2, "B", 100.0, 10.0, 0.0),
            hotel(3, "C", 50.0, 170.0, 0.0),
        ]
    }

    fn origin() -> Point {
        Point::new(0.0, 0.0)
    }

    #[test]
    fn orders_by_price_then_distance() {
        let result = rank(sample_set(), origin(), 0, 15);

        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["C", "B", "A"]);
    }

    #[test]
    fn ordering_invariant_holds_for_whole_sequence() {
        let result = rank(sample_set(), origin(), 0, 15);

        for pair in result.windows(2) {
            assert!(pair[0].price <= pair[1].price);
            if pair[0].price == pair[1].price {
                assert!(pair[0].distance_in_meters <= pair[1].distance_in_meters);
            }
        }
    }

    #[test]
    fn take_covering_whole_set_returns_every_hotel_once() {
        let result = rank(sample_set(), origin(), 0, 100);

        let mut ids: Vec<i64> = result.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn pagination_returns_slice_of_sorted_sequence() {
        let result = rank(sample_set(), origin(), 1, 1);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "B");
    }

    #[test]
    fn pagination_length_matches_slice_arithmetic() {
        let total: usize = 3;
        for skip in 0..5 {
            for take in 0..5 {
                let result = rank(sample_set(), origin(), skip, take);
                let expected = total.saturating_sub(skip).min(take);
                assert_eq!(result.len(), expected, "skip={skip} take={take}");
            }
        }
    }

    #[test]
    fn skip_beyond_count_returns_empty() {
        assert!(rank(sample_set(), origin(), 3, 15).is_empty());
        assert!(rank(sample_set(), origin(), 50, 15).is_empty());
    }

    #[test]
    fn take_zero_returns_empty() {
        assert!(rank(sample_set(), origin(), 0, 0).is_empty());
    }

    #[test]
    fn empty_set_returns_empty() {
        assert!(rank(Vec::new(), origin(), 0, 15).is_empty());
    }

    #[test]
    fn repeated_calls_yield_identical_output() {
        let first = rank(sample_set(), origin(), 0, 15);
        let second = rank(sample_set(), origin(), 0, 15);
        assert_eq!(first, second);
    }

    #[test]
    fn full_ties_break_by_id() {
        let hotels = vec![
            hotel(7, "later", 80.0, 4.0, 3.0),
            hotel(2, "earlier", 80.0, 3.0, 4.0),
        ];

        let result = rank(hotels, origin(), 0, 15);

        assert_eq!(result[0].id, 2);
        assert_eq!(result[1].id, 7);
        assert_eq!(result[0].distance_in_meters, result[1].distance_in_meters);
    }

    #[test]
    fn distance_is_measured_from_query_point() {
        let hotels = vec![hotel(1, "near", 10.0, 13.0, 14.0)];

        let result = rank(hotels, Point::new(10.0, 10.0), 0, 1);

        assert_eq!(result[0].distance_in_meters, 5.0);
    }
}
