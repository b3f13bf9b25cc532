use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CATEGORY_PREFIX: &str = "cat_";
pub const DETAILED_CATEGORY_PREFIX: &str = "catDet_";

/// counts of places inside an accessibility polygon, by coarse and by
/// detailed category.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PoiCategoryCounts {
    pub by_category: BTreeMap<String, u64>,
    pub by_detailed_category: BTreeMap<String, u64>,
}

impl PoiCategoryCounts {
    /// one `(key, count)` pair per category, with keys prefixed so coarse and
    /// detailed categories sharing a name do not collide.
    pub fn flattened(&self) -> Vec<(String, u64)> {
        let coarse = self
            .by_category
            .iter()
            .map(|(k, v)| (format!("{CATEGORY_PREFIX}{k}"), *v));
        let detailed = self
            .by_detailed_category
            .iter()
            .map(|(k, v)| (format!("{DETAILED_CATEGORY_PREFIX}{k}"), *v));
        coarse.chain(detailed).collect()
    }
}
