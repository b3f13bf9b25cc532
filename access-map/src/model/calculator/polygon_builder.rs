use crate::model::collaborator::{
    CancellationToken, NodeCollection, NodeStore, PoiCounter, ProgressSink, SpatialEngine,
};
use access_map_core::model::{
    average_remaining_seconds, AccessMapError, AccessMapParameters, DurationBand,
    IsochronePolygon, IsochroneProperties, PolygonArea, TravelTimesByNode, WeightedCircle,
};
use serde_json::{Map, Value};
use uom::si::f64::Length;

/// progress event name of polygon generation
pub const POLYGON_GENERATION_PROGRESS: &str = "AccessibilityMapPolygonGeneration";

/// builds one accessibility polygon per duration band from aggregated
/// travel times, using the node store for node locations and the spatial
/// engine to merge weighted circles.
pub struct IsochronePolygonBuilder<'a> {
    pub node_store: &'a dyn NodeStore,
    pub spatial_engine: &'a dyn SpatialEngine,
    pub poi_counter: Option<&'a dyn PoiCounter>,
    pub progress: Option<&'a dyn ProgressSink>,
}

impl IsochronePolygonBuilder<'_> {
    /// polygons are built sequentially from the largest band to the smallest,
    /// so smaller polygons are drawn over larger ones. cancellation is checked
    /// before every band and once more after the last.
    pub async fn build(
        &self,
        params: &AccessMapParameters,
        travel_times: &TravelTimesByNode,
        bands: &[DurationBand],
        sample_count: usize,
        cancellation: &CancellationToken,
        additional_properties: &Map<String, Value>,
    ) -> Result<Vec<IsochronePolygon>, AccessMapError> {
        let mut bands = bands.to_vec();
        bands.sort_by(|a, b| b.cmp(a));

        // fetched once for every band
        let nodes = self
            .node_store
            .geojson_collection(&travel_times.node_ids())
            .await?;
        for node_id in travel_times.travel_times().keys() {
            if nodes.get(node_id).is_none() {
                log::warn!("node not found in node store: {node_id}");
            }
        }

        let request_attributes = params.echo_properties();
        let color = params.color.clone().or_else(|| params.location_color.clone());
        let steps_count = bands.len() * 2;
        let mut step = 1;
        let mut polygons = Vec::with_capacity(bands.len());

        for band in bands.iter() {
            cancellation.check()?;
            let circles = band_circles(params, travel_times, &nodes, band, sample_count);
            log::debug!("band {band}: merging {} weighted circles", circles.len());
            self.emit_progress(step, steps_count);
            step += 1;

            let geometry = self.spatial_engine.clip_polygon(&circles).await?;
            let area = PolygonArea::of(&geometry);
            let mut properties = IsochroneProperties::new(
                band,
                area,
                color.clone(),
                request_attributes.clone(),
                additional_properties.clone(),
            );
            if params.calculate_pois {
                match self.poi_counter {
                    Some(counter) => {
                        let counts = counter.counts_in_polygon(&geometry).await?;
                        properties = properties.with_poi_counts(counts);
                    }
                    None => log::warn!("place counts requested but no place counter is configured"),
                }
            }
            polygons.push(IsochronePolygon::new(*band, geometry, properties));

            self.emit_progress(step, steps_count);
            step += 1;
        }

        cancellation.check()?;
        Ok(polygons)
    }

    fn emit_progress(&self, step: usize, steps_count: usize) {
        if let Some(progress) = self.progress {
            progress.emit(POLYGON_GENERATION_PROGRESS, step as f64 / steps_count as f64);
        }
    }
}

/// the weighted circles of one band: the origin circle first, then one circle
/// per node located in `nodes` with some walking distance left. distances are
/// floored to whole meters and capped at the access/egress walking distance.
pub fn band_circles(
    params: &AccessMapParameters,
    travel_times: &TravelTimesByNode,
    nodes: &NodeCollection,
    band: &DurationBand,
    sample_count: usize,
) -> Vec<WeightedCircle> {
    let speed = params.walking_speed_mps;
    let max_access_distance = (params.max_access_egress_travel_time_seconds as f64 * speed).floor();
    let band_max_distance = max_access_distance.min((band.seconds as f64 * speed).floor());

    let mut circles = vec![WeightedCircle::new(
        &params.location,
        meters(band_max_distance),
    )];
    for (node_id, node_travel_times) in travel_times.travel_times() {
        let Some(location) = nodes.get(node_id) else {
            continue;
        };
        let remaining = average_remaining_seconds(node_travel_times, band, sample_count);
        let distance = (remaining * speed).floor().min(max_access_distance);
        if distance > 0.0 {
            circles.push(WeightedCircle::new(location, meters(distance)));
        }
    }
    circles
}

fn meters(value: f64) -> Length {
    Length::new::<uom::si::length::meter>(value)
}
