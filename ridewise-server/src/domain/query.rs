//! Trip query (start and end location) type.

use std::fmt;

use super::QueryError;

/// Which end of the trip a location belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationField {
    Start,
    End,
}

impl fmt::Display for LocationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationField::Start => f.write_str("Start"),
            LocationField::End => f.write_str("End"),
        }
    }
}

/// A validated pair of free-text locations.
///
/// Both locations are stored trimmed. Construction fails if either is empty
/// after trimming, or if the two compare equal ignoring case.
///
/// # Examples
///
/// ```
/// use ridewise_server::domain::TripQuery;
///
/// let query = TripQuery::new("  Civic Centre ", "Sea Point").unwrap();
/// assert_eq!(query.start(), "Civic Centre");
///
/// assert!(TripQuery::new("Civic Centre", "civic centre").is_err());
/// assert!(TripQuery::new("   ", "Sea Point").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    start: String,
    end: String,
}

impl TripQuery {
    /// Validate and trim a start/end pair.
    pub fn new(start: &str, end: &str) -> Result<Self, QueryError> {
        let start = trim_location(start);
        if start.is_empty() {
            return Err(QueryError::MissingLocation(LocationField::Start));
        }

        let end = trim_location(end);
        if end.is_empty() {
            return Err(QueryError::MissingLocation(LocationField::End));
        }

        if start.to_lowercase() == end.to_lowercase() {
            return Err(QueryError::SameLocation);
        }

        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    /// The trimmed start location.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The trimmed end location.
    pub fn end(&self) -> &str {
        &self.end
    }
}

impl fmt::Display for TripQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

/// Strip surrounding whitespace, including byte order marks.
fn trim_location(location: &str) -> &str {
    location.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Shorten a places-autocomplete address to its first two segments.
///
/// Autocomplete suggestions carry suburb, city, postcode and country, which
/// the geocoder handles poorly. "Civic Centre, Hertzog Blvd, Cape Town, 8001"
/// becomes "Civic Centre, Hertzog Blvd". Addresses with two or fewer
/// segments are returned unchanged.
pub fn truncate_address(address: &str) -> String {
    let parts: Vec<&str> = address.split(',').map(str::trim).collect();
    if parts.len() > 2 {
        parts[..2].join(", ")
    } else {
        address.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_both_locations() {
        let query = TripQuery::new("  Civic Centre\t", "\nSea Point ").unwrap();
        assert_eq!(query.start(), "Civic Centre");
        assert_eq!(query.end(), "Sea Point");
    }

    #[test]
    fn rejects_empty_start() {
        assert_eq!(
            TripQuery::new("", "Sea Point"),
            Err(QueryError::MissingLocation(LocationField::Start))
        );
        assert_eq!(
            TripQuery::new("   ", "Sea Point"),
            Err(QueryError::MissingLocation(LocationField::Start))
        );
    }

    #[test]
    fn rejects_empty_end() {
        assert_eq!(
            TripQuery::new("Civic Centre", " "),
            Err(QueryError::MissingLocation(LocationField::End))
        );
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(
            TripQuery::new("\u{FEFF}", "Sea Point"),
            Err(QueryError::MissingLocation(LocationField::Start))
        );
        assert_eq!(
            TripQuery::new("Civic Centre", " \u{FEFF}\t"),
            Err(QueryError::MissingLocation(LocationField::End))
        );

        let query = TripQuery::new("\u{FEFF}Civic Centre ", "Sea Point\u{FEFF}").unwrap();
        assert_eq!(query.start(), "Civic Centre");
        assert_eq!(query.end(), "Sea Point");
    }

    #[test]
    fn start_is_checked_before_end() {
        assert_eq!(
            TripQuery::new("", ""),
            Err(QueryError::MissingLocation(LocationField::Start))
        );
    }

    #[test]
    fn rejects_same_location_ignoring_case_and_whitespace() {
        assert_eq!(
            TripQuery::new("Sea Point", "  SEA point "),
            Err(QueryError::SameLocation)
        );
    }

    #[test]
    fn display() {
        let query = TripQuery::new("Civic Centre", "Sea Point").unwrap();
        assert_eq!(query.to_string(), "Civic Centre → Sea Point");
    }

    #[test]
    fn truncate_long_address() {
        assert_eq!(
            truncate_address("Civic Centre, Hertzog Blvd, Cape Town, 8001"),
            "Civic Centre, Hertzog Blvd"
        );
        assert_eq!(
            truncate_address("Sea Point ,  Main Rd , Cape Town"),
            "Sea Point, Main Rd"
        );
    }

    #[test]
    fn truncate_short_address_is_identity() {
        assert_eq!(truncate_address("Sea Point, Cape Town"), "Sea Point, Cape Town");
        assert_eq!(truncate_address("Sea Point"), "Sea Point");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn distinct_non_empty_locations_validate(
            start in "[A-Za-z][A-Za-z ]{0,20}",
            end in "[A-Za-z][A-Za-z ]{0,20}",
        ) {
            prop_assume!(start.trim().to_lowercase() != end.trim().to_lowercase());

            let query = TripQuery::new(&start, &end);
            prop_assert!(query.is_ok());
            let query = query.unwrap();
            prop_assert_eq!(query.start(), start.trim());
            prop_assert_eq!(query.end(), end.trim());
        }

        #[test]
        fn case_and_whitespace_variants_are_rejected(
            location in "[A-Za-z][A-Za-z ]{0,20}",
            pad_left in " {0,3}",
            pad_right in " {0,3}",
        ) {
            let shouted = format!("{pad_left}{}{pad_right}", location.to_uppercase());
            prop_assert_eq!(
                TripQuery::new(&location, &shouted),
                Err(QueryError::SameLocation)
            );
        }
    }
}
