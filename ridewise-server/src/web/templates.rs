//! Askama templates for the web frontend.

use askama::Template;

use crate::formatter::TripSummary;
use crate::rides::RideOption;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the start/end form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Trip results fragment: ride cards plus the MyCiTi breakdown.
#[derive(Template)]
#[template(path = "trip_results.html")]
pub struct TripResultsTemplate {
    pub trip: TripSummary,
    pub rides: Vec<RideOption>,
}

/// Inline error fragment shown in place of results.
#[derive(Template)]
#[template(path = "trip_error.html")]
pub struct TripErrorTemplate {
    pub message: String,
    pub retryable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::{FormatterConfig, summarize};
    use crate::myciti::TripResponse;
    use crate::rides::{RideKind, ride_options};
    use serde_json::json;

    fn trip() -> TripSummary {
        let response = TripResponse::from_value(json!({
            "start": {
                "address": "Civic Centre",
                "nearest_stop": "Civic Centre",
                "distance_meters": 200.0
            },
            "end": {
                "address": "Sea Point",
                "nearest_stop": null,
                "distance_meters": 300.0
            },
            "trip_distance_km": 5.0,
            "is_peak_time": false,
            "fare_rands": 25.0
        }))
        .unwrap();
        summarize(&response, &FormatterConfig::default())
    }

    #[test]
    fn index_renders_form() {
        let html = IndexTemplate.render().unwrap();
        assert!(html.contains("name=\"start\""));
        assert!(html.contains("name=\"end\""));
    }

    #[test]
    fn trip_results_render_cards_and_breakdown() {
        let trip = trip();
        let rides = ride_options(&trip, None);
        let html = TripResultsTemplate { trip, rides }.render().unwrap();

        assert!(html.contains("MyCiTi Bus"));
        assert!(html.contains("E-Hailing"));
        assert!(html.contains("24min"));
        assert!(html.contains("R25.00"));
        assert!(html.contains("R5.00/km"));
        assert!(html.contains("Saver Fare"));
        assert!(html.contains("No stop found"));
        assert!(html.contains("No estimate available"));
    }

    #[test]
    fn ehailing_card_shows_wait() {
        let trip = trip();
        let mut rides = ride_options(&trip, None);
        rides[2] = RideOption::new(RideKind::EHailing)
            .with_estimate("12 mins", "R40.35")
            .with_wait("3 min");
        let html = TripResultsTemplate { trip, rides }.render().unwrap();

        assert!(html.contains("Duration: 12 mins"));
        assert!(html.contains("Cost: R40.35"));
        assert!(html.contains("Wait: 3 min"));
    }

    #[test]
    fn error_fragment_escapes_message() {
        let html = TripErrorTemplate {
            message: "<script>".into(),
            retryable: true,
        }
        .render()
        .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("try again"));
    }
}
