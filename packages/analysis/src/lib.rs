#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Criminal activity risk analysis for a geographic location.
//!
//! Queries the upstream analysis API for an address, classifies each time
//! period's activity score against period-specific maxima, aggregates
//! crime occurrence counts across periods, resolves crime type IDs to
//! human-readable names, and derives safety recommendations.
//!
//! The entry point is [`analyzer::analyze_location`]. Classification,
//! aggregation, and recommendation generation are pure functions in
//! [`classify`], [`analyzer`], and [`recommend`]; only the analysis POST
//! and the crime type lookups in [`resolver`] touch the network.

pub mod analyzer;
pub mod classify;
pub mod recommend;
pub mod resolver;

pub use analyzer::analyze_location;
