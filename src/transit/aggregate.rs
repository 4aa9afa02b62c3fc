use crate::transit::models::PredictionResponse;

/// A busy area can produce a large number of potential departures; only the
/// first 10 surviving records are considered.
const MAX_SURVIVING_RECORDS: usize = 10;

/// One unique route/stop combination offered to the user.
///
/// The triple is the deduplication key; insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopCandidate {
    pub route_id: String,
    pub stop_id: String,
    pub stop_name: String,
}

/// Reduce an area prediction response to the candidate stops worth offering.
///
/// Records are scanned in the provider's sort order (ascending departure
/// time). Records marked `SKIPPED` and records without a departure time are
/// discarded. The same route serves multiple upcoming departures, so each
/// surviving record's route/stop/name key enters the set only on first
/// sighting. Scanning stops once 10 surviving records have been seen.
///
/// Returns `None` when no record qualifies, which callers report as "nothing
/// scheduled near you" rather than an empty menu.
#[must_use]
pub fn collect_stop_candidates(predictions: &PredictionResponse) -> Option<Vec<StopCandidate>> {
    let mut candidates: Vec<StopCandidate> = Vec::new();
    let mut surviving = 0usize;

    for record in &predictions.data {
        if record.attributes.schedule_relationship.as_deref() == Some("SKIPPED") {
            continue;
        }
        if record.attributes.departure_time.is_none() {
            continue;
        }

        let route_id = &record.relationships.route.data.id;
        let stop_id = &record.relationships.stop.data.id;
        // Stops missing from `included` keep their id as the display name.
        let stop_name = predictions.stop_name(stop_id).unwrap_or(stop_id);

        let already_seen = candidates.iter().any(|candidate| {
            candidate.route_id == *route_id
                && candidate.stop_id == *stop_id
                && candidate.stop_name == stop_name
        });
        if !already_seen {
            candidates.push(StopCandidate {
                route_id: route_id.clone(),
                stop_id: stop_id.clone(),
                stop_name: stop_name.to_string(),
            });
        }

        surviving += 1;
        if surviving == MAX_SURVIVING_RECORDS {
            break;
        }
    }

    if surviving == 0 { None } else { Some(candidates) }
}
