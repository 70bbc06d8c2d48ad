//! Test fixtures for bin-route-planner.
//!
//! Provides realistic test data:
//! - Bin sites and depots around Copenhagen
//! - A mixed-urgency fleet builder

#![allow(dead_code)]

pub mod copenhagen_bins;

pub use copenhagen_bins::*;
