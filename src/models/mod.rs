//! Defines data structures for the application.
//!
//! Includes serde types for the GeoJSON point-feature collections served by
//! the ocean digital-twin backend (chlorophyll concentration and ocean
//! current vectors).

mod geojson;

pub use geojson::*;
