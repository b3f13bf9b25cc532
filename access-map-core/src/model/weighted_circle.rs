use geo::Point;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// a circle handed to the spatial engine. its radius is the walking distance
/// still available at its center, from the origin or from a reached node.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightedCircle {
    /// `[lon, lat]`
    pub center: [f64; 2],
    pub radius_km: f64,
}

impl WeightedCircle {
    pub fn new(center: &Point<f64>, radius: Length) -> WeightedCircle {
        WeightedCircle {
            center: [center.x(), center.y()],
            radius_km: radius.get::<uom::si::length::kilometer>(),
        }
    }

    pub fn center_point(&self) -> Point<f64> {
        Point::new(self.center[0], self.center[1])
    }

    pub fn radius(&self) -> Length {
        Length::new::<uom::si::length::kilometer>(self.radius_km)
    }
}
