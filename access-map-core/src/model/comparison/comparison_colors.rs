use serde::{Deserialize, Serialize};

pub const DEFAULT_INTERSECTION_COLOR: &str = "#8e44ad";
pub const DEFAULT_SCENARIO1_MINUS_2_COLOR: &str = "#c0392b";
pub const DEFAULT_SCENARIO2_MINUS_1_COLOR: &str = "#2980b9";

/// fill colors of the three comparison layers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonColors {
    pub intersection_color: String,
    pub scenario1_minus_2_color: String,
    pub scenario2_minus_1_color: String,
}

impl Default for ComparisonColors {
    fn default() -> Self {
        ComparisonColors {
            intersection_color: String::from(DEFAULT_INTERSECTION_COLOR),
            scenario1_minus_2_color: String::from(DEFAULT_SCENARIO1_MINUS_2_COLOR),
            scenario2_minus_1_color: String::from(DEFAULT_SCENARIO2_MINUS_1_COLOR),
        }
    }
}
