//! Provides the client for interacting with the ocean digital-twin HTTP API.
//!
//! This module defines the `OceanClient` struct and its methods for fetching
//! chlorophyll and ocean-current feature collections, plus the raw counter
//! endpoints.

mod ocean;

pub use ocean::*;
