//! Client library for the ocean digital-twin HTTP API.
//!
//! Fetches chlorophyll concentration and ocean current vector measurements
//! as GeoJSON point-feature collections, and exposes the service's counter
//! endpoints. The [`api::OceanClient`] is constructed explicitly from a
//! [`config::ClientConfig`] and passed where needed; there is no global
//! client instance.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
