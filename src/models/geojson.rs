//! GeoJSON point-feature collections for ocean measurement data.
//!
//! The backend serves two collection variants that differ only in their
//! feature properties: chlorophyll concentration and current vectors. The
//! container types are generic over the properties record so both share one
//! definition. Feature order is preserved exactly as received from the
//! server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GeoJSON `Point` geometry.
///
/// Coordinates are `[longitude, latitude]`, with an optional third element
/// for elevation passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
    pub coordinates: Vec<f64>,
}

impl PointGeometry {
    /// Builds a two-dimensional point from longitude and latitude.
    ///
    /// ```
    /// use ocean_twin_client::models::PointGeometry;
    ///
    /// let point = PointGeometry::new(1.1, 41.0);
    /// assert_eq!(point.coordinates, vec![1.1, 41.0]);
    /// ```
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            coordinates: vec![longitude, latitude],
        }
    }
}

/// A GeoJSON `Feature` with a point geometry and typed properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature<P> {
    pub geometry: PointGeometry,
    pub properties: P,
}

/// A GeoJSON `FeatureCollection` of point features of one property variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection<P> {
    pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    /// The well-formed empty collection, `{"type":"FeatureCollection","features":[]}`.
    pub fn empty() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<P> Default for FeatureCollection<P> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Properties of a chlorophyll concentration measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChlorophyllProperties {
    pub id: i64,
    pub measurement_time: DateTime<Utc>,
    /// Chlorophyll-a concentration in mg/m³.
    pub chlor_a: f64,
}

/// Properties of an ocean current vector measurement.
///
/// `u_current`/`v_current` are the eastward/northward surface velocity
/// components in m/s. The server additionally derives a map-bearing angle
/// and a magnitude for rendering; both are optional here and omitted from
/// serialization when absent so payloads round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentsProperties {
    pub id: i64,
    pub measurement_time: DateTime<Utc>,
    pub v_current: f64,
    pub u_current: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
}

/// Collection of chlorophyll measurements as served by `/chlorophyll`.
pub type ChlorophyllFeatureCollection = FeatureCollection<ChlorophyllProperties>;

/// Collection of current vector measurements as served by `/currents`.
pub type CurrentsFeatureCollection = FeatureCollection<CurrentsProperties>;
