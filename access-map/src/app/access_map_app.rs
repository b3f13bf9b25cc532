use super::AccessMapAppError;
use access_map_core::model::ComparisonColors;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Command line tool for transit accessibility maps and scenario comparison
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct AccessMapApp {
    #[command(subcommand)]
    pub op: AccessMapOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum AccessMapOperation {
    /// compute the accessibility polygons of a request
    Calculate {
        /// configuration file with the request and the input data files
        #[arg(short, long)]
        config_file: String,

        /// file to write the result to. if not provided, write to stdout.
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// compare the accessibility polygons of two scenarios
    Compare {
        /// polygons of the first scenario
        #[arg(long)]
        first: String,

        /// polygons of the second scenario
        #[arg(long)]
        second: String,

        /// number of bands to compare, by position
        #[arg(short, long)]
        number_of_polygons: usize,

        #[arg(long)]
        intersection_color: Option<String>,

        #[arg(long)]
        first_minus_second_color: Option<String>,

        #[arg(long)]
        second_minus_first_color: Option<String>,

        /// file to write the result to. if not provided, write to stdout.
        #[arg(short, long)]
        output_file: Option<String>,
    },
}

impl AccessMapOperation {
    pub fn run(&self) -> Result<(), AccessMapAppError> {
        match self {
            AccessMapOperation::Calculate {
                config_file,
                output_file,
            } => super::calculate::run(config_file, output_file.as_ref().map(Path::new)),
            AccessMapOperation::Compare {
                first,
                second,
                number_of_polygons,
                intersection_color,
                first_minus_second_color,
                second_minus_first_color,
                output_file,
            } => {
                let defaults = ComparisonColors::default();
                let colors = ComparisonColors {
                    intersection_color: intersection_color
                        .clone()
                        .unwrap_or(defaults.intersection_color),
                    scenario1_minus_2_color: first_minus_second_color
                        .clone()
                        .unwrap_or(defaults.scenario1_minus_2_color),
                    scenario2_minus_1_color: second_minus_first_color
                        .clone()
                        .unwrap_or(defaults.scenario2_minus_1_color),
                };
                super::compare::run(
                    Path::new(first),
                    Path::new(second),
                    *number_of_polygons,
                    &colors,
                    output_file.as_ref().map(Path::new),
                )
            }
        }
    }
}
