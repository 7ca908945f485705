//! Wage Comparison Engine for Australian construction labour hire
//!
//! This crate compares an ABN (contractor) arrangement against a TFN (PAYG
//! employee) arrangement using the 2024-25 resident tax rates, Medicare levy,
//! Low Income Tax Offset, superannuation, FIFO roster and overtime rules.
//! Results are estimates, not tax advice.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
