use chrono::DateTime;

use crate::transit::models::PredictionResponse;

/// Message used when a scoped query has no record with a departure time.
pub const NO_DEPARTURES_MESSAGE: &str = "No predicted departures";

/// Direction label used when the route or its destination entry is missing.
const UNKNOWN_DIRECTION: &str = "unknown";

/// Render the next departure from a scoped prediction response.
///
/// The provider returns predictions without departure times first (arrivals
/// at terminal stops), so the scan takes the first record that actually has
/// one. The record's route supplies the destination label at the record's
/// direction index. Pure function, no I/O.
#[must_use]
pub fn format_next_departure(predictions: &PredictionResponse, stop_label: &str) -> String {
    for record in &predictions.data {
        let Some(departure_time) = record.attributes.departure_time.as_deref() else {
            continue;
        };

        let route_id = &record.relationships.route.data.id;
        let direction = predictions
            .route(route_id)
            .and_then(|route| {
                route
                    .attributes
                    .direction_destinations
                    .get(record.attributes.direction_id as usize)
            })
            .and_then(|destination| destination.as_deref())
            .unwrap_or(UNKNOWN_DIRECTION);

        return format!(
            "Departing {} from stop {} towards {}",
            friendly_time(departure_time),
            stop_label,
            direction
        );
    }

    NO_DEPARTURES_MESSAGE.to_string()
}

/// Render an RFC 3339 departure timestamp as a clock time; anything else
/// passes through verbatim.
fn friendly_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp.format("%-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::friendly_time;

    #[test]
    fn rfc3339_times_render_as_clock_times() {
        assert_eq!(friendly_time("2026-08-06T08:05:00-04:00"), "8:05 AM");
        assert_eq!(friendly_time("2026-08-06T17:30:00-04:00"), "5:30 PM");
    }

    #[test]
    fn non_timestamp_strings_pass_through() {
        assert_eq!(friendly_time("08:00"), "08:00");
    }
}
