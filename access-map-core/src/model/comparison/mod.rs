mod comparison_colors;
mod comparison_result;

pub use comparison_colors::{
    ComparisonColors, DEFAULT_INTERSECTION_COLOR, DEFAULT_SCENARIO1_MINUS_2_COLOR,
    DEFAULT_SCENARIO2_MINUS_1_COLOR,
};
pub use comparison_result::{ComparisonResult, MapSetOperationResult};
