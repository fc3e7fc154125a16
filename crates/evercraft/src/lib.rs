//! Pricing and sustainability calculators behind the Evercraft marketplace.
//!
//! Every calculator in [`shipping`], [`eco`] and [`applications`] is a pure function over
//! caller-supplied records. The remaining modules carry the service plumbing shared with the
//! `evercraft-api` binary.

pub mod applications;
pub mod config;
pub mod eco;
pub mod error;
mod rounding;
pub mod shipping;
pub mod telemetry;
