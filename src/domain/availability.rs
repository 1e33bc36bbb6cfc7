//! Room availability computed from rental history.
//!
//! Pure functions: deterministic, no store access, no side effects. Search
//! code fetches a room's rentals and asks from when the room is free.

use chrono::{DateTime, Utc};

use super::rental::Rental;

/// Outcome of an availability computation against a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Free as of the reference date.
    Available,
    /// Occupied up to and including the given date; free strictly after it.
    AvailableFrom(DateTime<Utc>),
    /// An ongoing rental (no end date) holds the room indefinitely.
    Occupied,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }

    /// The earliest known date the room frees up, if one exists.
    pub fn available_from(&self) -> Option<DateTime<Utc>> {
        match self {
            Availability::AvailableFrom(date) => Some(*date),
            _ => None,
        }
    }
}

/// Derive a room's availability from its rental history.
///
/// A room with no history is free immediately. Otherwise the maximum end
/// date across its rentals decides: strictly before the reference date means
/// free, anything else means occupied until that date. A rental with no end
/// date is ongoing and dominates the whole history.
pub fn availability(rentals: &[Rental], reference: DateTime<Utc>) -> Availability {
    if rentals.is_empty() {
        return Availability::Available;
    }

    let mut last_end: Option<DateTime<Utc>> = None;
    for rental in rentals {
        match rental.ended_at {
            None => return Availability::Occupied,
            Some(end) => {
                if last_end.map_or(true, |current| end > current) {
                    last_end = Some(end);
                }
            }
        }
    }

    match last_end {
        Some(end) if end < reference => Availability::Available,
        Some(end) => Availability::AvailableFrom(end),
        None => Availability::Available,
    }
}

/// Whether the room is free as of the reference date.
pub fn is_free_at(rentals: &[Rental], reference: DateTime<Utc>) -> bool {
    availability(rentals, reference).is_available()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use uuid::Uuid;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn finished_rental(end: DateTime<Utc>) -> Rental {
        let mut rental = Rental::new(Uuid::new_v4(), "tenant@example.com");
        rental.finish(end);
        rental
    }

    #[test]
    fn empty_history_is_available() {
        assert_eq!(
            availability(&[], date(2024, 2, 1)),
            Availability::Available
        );
    }

    #[test]
    fn past_end_date_means_available() {
        let rentals = vec![finished_rental(date(2024, 1, 10))];
        assert!(is_free_at(&rentals, date(2024, 2, 1)));
    }

    #[test]
    fn future_end_date_means_available_from_that_date() {
        let rentals = vec![finished_rental(date(2024, 1, 10))];
        assert_eq!(
            availability(&rentals, date(2024, 1, 5)),
            Availability::AvailableFrom(date(2024, 1, 10))
        );
    }

    #[test]
    fn maximum_end_date_wins() {
        let rentals = vec![
            finished_rental(date(2023, 6, 1)),
            finished_rental(date(2024, 3, 15)),
            finished_rental(date(2023, 12, 31)),
        ];
        assert_eq!(
            availability(&rentals, date(2024, 1, 5)),
            Availability::AvailableFrom(date(2024, 3, 15))
        );
    }

    #[test]
    fn ongoing_rental_occupies_indefinitely() {
        let rentals = vec![
            finished_rental(date(2023, 6, 1)),
            Rental::new(Uuid::new_v4(), "tenant@example.com"),
        ];
        assert_eq!(
            availability(&rentals, date(2030, 1, 1)),
            Availability::Occupied
        );
        assert!(!is_free_at(&rentals, date(2030, 1, 1)));
    }

    #[test]
    fn end_date_equal_to_reference_is_not_free() {
        // "free as of D" requires the last end date strictly before D
        let rentals = vec![finished_rental(date(2024, 1, 10))];
        assert!(!is_free_at(&rentals, date(2024, 1, 10)));
    }
}
