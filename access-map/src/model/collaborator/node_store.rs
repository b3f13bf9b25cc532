use access_map_core::model::{AccessMapError, NodeId};
use async_trait::async_trait;
use geo::Point;
use indexmap::IndexMap;

/// node locations keyed by node id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeCollection {
    nodes: IndexMap<NodeId, Point<f64>>,
}

impl NodeCollection {
    pub fn new() -> NodeCollection {
        NodeCollection::default()
    }

    pub fn insert(&mut self, id: NodeId, location: Point<f64>) {
        self.nodes.insert(id, location);
    }

    pub fn get(&self, id: &NodeId) -> Option<&Point<f64>> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// reads point features; the node id is the feature id or, failing that,
    /// the `id` property.
    pub fn from_features(features: &[geojson::Feature]) -> Result<NodeCollection, AccessMapError> {
        let mut collection = NodeCollection::new();
        for (idx, feature) in features.iter().enumerate() {
            let id = feature_node_id(feature).ok_or_else(|| {
                AccessMapError::NodeStoreFailed(format!("node feature {idx} has no id"))
            })?;
            let location = match feature.geometry.as_ref().map(|g| &g.value) {
                Some(geojson::Value::Point(p)) if p.len() >= 2 => Point::new(p[0], p[1]),
                _ => {
                    return Err(AccessMapError::NodeStoreFailed(format!(
                        "node '{id}' does not have a point geometry"
                    )))
                }
            };
            collection.insert(id, location);
        }
        Ok(collection)
    }
}

impl FromIterator<(NodeId, Point<f64>)> for NodeCollection {
    fn from_iter<T: IntoIterator<Item = (NodeId, Point<f64>)>>(iter: T) -> Self {
        NodeCollection {
            nodes: iter.into_iter().collect(),
        }
    }
}

fn feature_node_id(feature: &geojson::Feature) -> Option<NodeId> {
    match &feature.id {
        Some(geojson::feature::Id::String(s)) => Some(NodeId::from(s.as_str())),
        Some(geojson::feature::Id::Number(n)) => Some(NodeId::from(n.to_string())),
        None => match feature.property("id") {
            Some(serde_json::Value::String(s)) => Some(NodeId::from(s.as_str())),
            Some(serde_json::Value::Number(n)) => Some(NodeId::from(n.to_string())),
            _ => None,
        },
    }
}

/// source of node geometries.
#[async_trait]
pub trait NodeStore: Send + Sync {
    /// locations of the requested nodes. ids unknown to the store are absent
    /// from the returned collection.
    async fn geojson_collection(
        &self,
        node_ids: &[NodeId],
    ) -> Result<NodeCollection, AccessMapError>;
}
