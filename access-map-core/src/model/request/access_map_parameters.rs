use super::time_of_trip::{seconds_since_midnight_to_time_str, TimeOfTrip};
use super::AccessMapRequest;
use crate::model::AccessMapError;
use geo::Point;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uom::si::f64::{Time, Velocity};

/// values used for request fields that are missing (or zero).
pub mod defaults {
    pub const MAX_TOTAL_TRAVEL_TIME_SECONDS: u32 = 900;
    pub const NUMBER_OF_POLYGONS: usize = 1;
    pub const DELTA_SECONDS: u32 = 0;
    pub const DELTA_INTERVAL_SECONDS: u32 = 60;
    pub const MIN_WAITING_TIME_SECONDS: u32 = 180;
    pub const MAX_ACCESS_EGRESS_TRAVEL_TIME_SECONDS: u32 = 900;
    pub const MAX_TRANSFER_TRAVEL_TIME_SECONDS: u32 = 900;
    pub const WALKING_SPEED_MPS: f64 = 5.0 / 3.6;
}

/// a complete set of accessibility map parameters, built from a partial
/// [`AccessMapRequest`] by filling in defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AccessMapParameters {
    pub location: Point<f64>,
    pub time_of_trip: TimeOfTrip,
    pub max_total_travel_time_seconds: u32,
    pub number_of_polygons: usize,
    pub delta_seconds: u32,
    pub delta_interval_seconds: u32,
    pub min_waiting_time_seconds: u32,
    pub max_access_egress_travel_time_seconds: u32,
    pub max_transfer_travel_time_seconds: u32,
    pub walking_speed_mps: f64,
    pub walking_speed_factor: Option<f64>,
    pub scenario_id: Option<String>,
    pub location_color: Option<String>,
    pub color: Option<String>,
    pub place_name: Option<String>,
    pub calculate_pois: bool,
}

impl TryFrom<&AccessMapRequest> for AccessMapParameters {
    type Error = AccessMapError;

    /// zero values count as missing, so a request with `numberOfPolygons: 0`
    /// gets the default of 1 polygon.
    fn try_from(request: &AccessMapRequest) -> Result<Self, Self::Error> {
        let location = request
            .location_geojson
            .as_ref()
            .ok_or_else(|| {
                AccessMapError::InvalidRequest(String::from("there should be a valid location"))
            })
            .and_then(location_point)?;
        let time_of_trip = TimeOfTrip::from_optional(
            request.departure_time_seconds_since_midnight,
            request.arrival_time_seconds_since_midnight,
        )
        .ok_or_else(|| {
            AccessMapError::InvalidRequest(String::from(
                "either a departure or an arrival time should be provided",
            ))
        })?;

        Ok(AccessMapParameters {
            location,
            time_of_trip,
            max_total_travel_time_seconds: non_zero(request.max_total_travel_time_seconds)
                .unwrap_or(defaults::MAX_TOTAL_TRAVEL_TIME_SECONDS),
            number_of_polygons: non_zero(request.number_of_polygons)
                .unwrap_or(defaults::NUMBER_OF_POLYGONS),
            delta_seconds: request.delta_seconds.unwrap_or(defaults::DELTA_SECONDS),
            delta_interval_seconds: non_zero(request.delta_interval_seconds)
                .unwrap_or(defaults::DELTA_INTERVAL_SECONDS),
            min_waiting_time_seconds: non_zero(request.min_waiting_time_seconds)
                .unwrap_or(defaults::MIN_WAITING_TIME_SECONDS),
            max_access_egress_travel_time_seconds: non_zero(
                request.max_access_egress_travel_time_seconds,
            )
            .unwrap_or(defaults::MAX_ACCESS_EGRESS_TRAVEL_TIME_SECONDS),
            max_transfer_travel_time_seconds: non_zero(request.max_transfer_travel_time_seconds)
                .unwrap_or(defaults::MAX_TRANSFER_TRAVEL_TIME_SECONDS),
            walking_speed_mps: request
                .walking_speed_mps
                .filter(|s| s.is_finite() && *s > 0.0)
                .unwrap_or(defaults::WALKING_SPEED_MPS),
            walking_speed_factor: request.walking_speed_factor,
            scenario_id: request.scenario_id.clone(),
            location_color: request.location_color.clone(),
            color: request.color.clone(),
            place_name: request.place_name.clone(),
            calculate_pois: request.calculate_pois.unwrap_or_default(),
        })
    }
}

impl AccessMapParameters {
    pub fn walking_speed(&self) -> Velocity {
        Velocity::new::<uom::si::velocity::meter_per_second>(self.walking_speed_mps)
    }

    pub fn max_access_egress_travel_time(&self) -> Time {
        Time::new::<uom::si::time::second>(self.max_access_egress_travel_time_seconds as f64)
    }

    pub fn location_feature(&self) -> geojson::Feature {
        let geometry = geojson::Geometry::new(geojson::Value::from(&self.location));
        geojson::Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: None,
            foreign_members: None,
        }
    }

    /// the request attributes copied onto every isochrone polygon, keyed as
    /// they are in requests.
    pub fn echo_properties(&self) -> Map<String, Value> {
        let (departure, arrival) = match self.time_of_trip {
            TimeOfTrip::Departure(s) => (Some(s), None),
            TimeOfTrip::Arrival(s) => (None, Some(s)),
        };
        let time_str =
            |t: Option<u32>| t.map(seconds_since_midnight_to_time_str).unwrap_or_default();

        let mut props = Map::new();
        if let Some(d) = departure {
            props.insert(String::from("departureTimeSecondsSinceMidnight"), json![d]);
        }
        props.insert(String::from("departureTime"), json![time_str(departure)]);
        if let Some(a) = arrival {
            props.insert(String::from("arrivalTimeSecondsSinceMidnight"), json![a]);
        }
        props.insert(String::from("arrivalTime"), json![time_str(arrival)]);
        props.insert(
            String::from("maxTotalTravelTimeSeconds"),
            json![self.max_total_travel_time_seconds],
        );
        props.insert(String::from("numberOfPolygons"), json![self.number_of_polygons]);
        props.insert(String::from("deltaSeconds"), json![self.delta_seconds]);
        props.insert(
            String::from("deltaIntervalSeconds"),
            json![self.delta_interval_seconds],
        );
        props.insert(
            String::from("locationGeojson"),
            json![self.location_feature()],
        );
        props.insert(
            String::from("minWaitingTimeSeconds"),
            json![self.min_waiting_time_seconds],
        );
        props.insert(
            String::from("maxAccessEgressTravelTimeSeconds"),
            json![self.max_access_egress_travel_time_seconds],
        );
        props.insert(
            String::from("maxTransferTravelTimeSeconds"),
            json![self.max_transfer_travel_time_seconds],
        );
        props.insert(String::from("walkingSpeedMps"), json![self.walking_speed_mps]);
        let optionals = [
            ("walkingSpeedFactor", self.walking_speed_factor.map(|f| json![f])),
            ("scenarioId", self.scenario_id.as_ref().map(|s| json![s])),
            ("locationColor", self.location_color.as_ref().map(|s| json![s])),
            ("color", self.color.as_ref().map(|s| json![s])),
            ("placeName", self.place_name.as_ref().map(|s| json![s])),
        ];
        for (key, value) in optionals {
            if let Some(v) = value {
                props.insert(String::from(key), v);
            }
        }
        props.insert(String::from("calculatePois"), json![self.calculate_pois]);
        props
    }
}

fn non_zero<T>(value: Option<T>) -> Option<T>
where
    T: PartialEq + Default,
{
    value.filter(|v| *v != T::default())
}

fn location_point(feature: &geojson::Feature) -> Result<Point<f64>, AccessMapError> {
    match feature.geometry.as_ref().map(|g| &g.value) {
        Some(geojson::Value::Point(position)) if position.len() >= 2 => {
            Ok(Point::new(position[0], position[1]))
        }
        Some(other) => Err(AccessMapError::InvalidRequest(format!(
            "location should be a point geometry, found {}",
            geometry_type_name(other)
        ))),
        None => Err(AccessMapError::InvalidRequest(String::from(
            "location feature has no geometry",
        ))),
    }
}

fn geometry_type_name(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}
