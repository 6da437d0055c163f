//! Core library for the academic staffing portal's selection analytics.
//!
//! The [`selection`] module holds the domain model, the report computations,
//! and the storage boundary; [`config`] and [`telemetry`] carry the service
//! plumbing shared by every binary that embeds this crate.

pub mod config;
pub mod error;
pub mod selection;
pub mod telemetry;
