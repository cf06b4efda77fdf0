//! Response envelopes used at the HTTP boundary
//!
//! The engine's views are plain values; a couple of them are wrapped for the
//! dashboard frontend here.

use crate::views::{GeoPoint, TimePoint};
use serde::{Deserialize, Serialize};

/// Axis label shipped with every time series
pub const TIME_SERIES_LABEL: &str = "Average Intensity";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesResponse {
    pub points: Vec<TimePoint>,
    #[serde(rename = "yAxisLabel")]
    pub y_axis_label: String,
}

impl From<Vec<TimePoint>> for TimeSeriesResponse {
    fn from(points: Vec<TimePoint>) -> Self {
        Self {
            points,
            y_axis_label: TIME_SERIES_LABEL.to_string(),
        }
    }
}

/// GeoJSON point geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    /// Placeholder location; countries are not geocoded
    pub fn unplaced() -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [0.0, 0.0],
        }
    }
}

/// Per-country figures carried as feature properties. `value` is the mean
/// intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoProperties {
    pub name: String,
    pub value: f64,
    pub likelihood: f64,
    pub relevance: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: GeoProperties,
    pub geometry: PointGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<GeoFeature>,
}

impl From<Vec<GeoPoint>> for GeoFeatureCollection {
    fn from(points: Vec<GeoPoint>) -> Self {
        let features = points
            .into_iter()
            .map(|point| GeoFeature {
                kind: "Feature".to_string(),
                properties: GeoProperties {
                    name: point.country,
                    value: point.intensity,
                    likelihood: point.likelihood,
                    relevance: point.relevance,
                    count: point.count,
                },
                geometry: PointGeometry::unplaced(),
            })
            .collect();

        Self {
            kind: "FeatureCollection".to_string(),
            features,
        }
    }
}

impl GeoFeatureCollection {
    /// Recover the per-country points, in feature order
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.features
            .into_iter()
            .map(|feature| GeoPoint {
                country: feature.properties.name,
                intensity: feature.properties.value,
                likelihood: feature.properties.likelihood,
                relevance: feature.properties.relevance,
                count: feature.properties.count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geojson_shape() {
        let collection = GeoFeatureCollection::from(vec![GeoPoint {
            country: "India".to_string(),
            intensity: 5.0,
            likelihood: 3.0,
            relevance: 4.0,
            count: 2,
        }]);

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["type"], "Feature");
        assert_eq!(json["features"][0]["properties"]["name"], "India");
        assert_eq!(json["features"][0]["properties"]["value"], 5.0);
        assert_eq!(json["features"][0]["geometry"]["coordinates"][0], 0.0);
    }

    #[test]
    fn test_time_series_label() {
        let response = TimeSeriesResponse::from(Vec::new());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["yAxisLabel"], TIME_SERIES_LABEL);
        assert!(json["points"].as_array().unwrap().is_empty());
    }
}
