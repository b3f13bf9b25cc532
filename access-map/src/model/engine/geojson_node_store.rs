use crate::model::collaborator::{NodeCollection, NodeStore};
use access_map_core::model::{AccessMapError, NodeId};
use async_trait::async_trait;

/// a node store held in memory, loaded from a GeoJSON collection of points.
#[derive(Clone, Debug, Default)]
pub struct GeoJsonNodeStore {
    nodes: NodeCollection,
}

impl GeoJsonNodeStore {
    pub fn new(nodes: NodeCollection) -> GeoJsonNodeStore {
        GeoJsonNodeStore { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl TryFrom<&geojson::FeatureCollection> for GeoJsonNodeStore {
    type Error = AccessMapError;

    fn try_from(collection: &geojson::FeatureCollection) -> Result<Self, Self::Error> {
        let nodes = NodeCollection::from_features(&collection.features)?;
        Ok(GeoJsonNodeStore { nodes })
    }
}

#[async_trait]
impl NodeStore for GeoJsonNodeStore {
    async fn geojson_collection(
        &self,
        node_ids: &[NodeId],
    ) -> Result<NodeCollection, AccessMapError> {
        Ok(node_ids
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|p| (id.clone(), *p)))
            .collect())
    }
}
