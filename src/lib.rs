//! Per-seller sales performance reporting
//!
//! Joins purchase records against seller and product reference data in a
//! single pass, accumulates per-seller statistics, ranks sellers by profit,
//! and derives a rank-based bonus and a top-10 sold-products list for each.
//!
//! The engine is synchronous and pure over its inputs: revenue and bonus
//! calculations are pluggable capabilities (see [`strategy`]), and the only
//! side effects are `tracing` warnings for purchase records that reference
//! unknown sellers or products.

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod strategy;
