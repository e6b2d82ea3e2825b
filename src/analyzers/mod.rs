//! Aggregation over the filtered corridor tickets.
//!
//! This module computes the per-carrier minimum flight time and the
//! mean/median/spread summary of ticket prices.

pub mod aggregate;
pub mod types;
pub mod utility;
