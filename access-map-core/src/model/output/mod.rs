mod geometry_output_format;

pub use geometry_output_format::GeometryOutputFormat;
