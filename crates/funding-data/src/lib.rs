//! Data layer for the funding dashboard.
//!
//! Reads the funding CSV, cleans it into a [`funding_core::models::FundingTable`],
//! groups records, and computes the projections each report view renders.

pub mod aggregator;
pub mod analysis;
pub mod normalizer;
pub mod reader;
pub mod reports;

pub use funding_core as core;
