//! Typed decoding of the provider's JSON:API prediction responses.
//!
//! The provider links predictions to their stop and route objects through the
//! `included` array (matched by type and id, not positionally). Decoding is
//! strict: a record missing its relationships or attributes fails the whole
//! response rather than silently yielding an absent value.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PredictionResponse {
    pub data: Vec<PredictionRecord>,
    #[serde(default)]
    pub included: Vec<IncludedResource>,
}

#[derive(Debug, Deserialize)]
pub struct PredictionRecord {
    pub attributes: PredictionAttributes,
    pub relationships: PredictionRelationships,
}

#[derive(Debug, Deserialize)]
pub struct PredictionAttributes {
    /// Absent for predictions that only carry an arrival (terminal stops).
    pub departure_time: Option<String>,
    #[serde(default)]
    pub schedule_relationship: Option<String>,
    pub direction_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct PredictionRelationships {
    pub route: Relationship,
    pub stop: Relationship,
}

#[derive(Debug, Deserialize)]
pub struct Relationship {
    pub data: ResourceId,
}

#[derive(Debug, Deserialize)]
pub struct ResourceId {
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IncludedResource {
    Stop(StopResource),
    Route(RouteResource),
}

#[derive(Debug, Deserialize)]
pub struct StopResource {
    pub id: String,
    pub attributes: StopAttributes,
}

#[derive(Debug, Deserialize)]
pub struct StopAttributes {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteResource {
    pub id: String,
    pub attributes: RouteAttributes,
}

#[derive(Debug, Deserialize)]
pub struct RouteAttributes {
    /// Destination labels indexed by `direction_id`; entries can be null.
    pub direction_destinations: Vec<Option<String>>,
}

impl PredictionResponse {
    /// Display name of a stop from the `included` array.
    ///
    /// Linear scan on purpose: the list is small and ordered, and the first
    /// match wins if the provider ever repeated an id.
    pub fn stop_name(&self, stop_id: &str) -> Option<&str> {
        self.included.iter().find_map(|resource| match resource {
            IncludedResource::Stop(stop) if stop.id == stop_id => {
                Some(stop.attributes.name.as_str())
            }
            _ => None,
        })
    }

    /// Route object from the `included` array, if present.
    pub fn route(&self, route_id: &str) -> Option<&RouteResource> {
        self.included.iter().find_map(|resource| match resource {
            IncludedResource::Route(route) if route.id == route_id => Some(route),
            _ => None,
        })
    }
}
